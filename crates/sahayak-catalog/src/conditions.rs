//! Candidate conditions with their symptom patterns and referral specialists.
//!
//! Pattern weights run 1 to 3: 3 for hallmark symptoms, 1 for symptoms that
//! often accompany the condition but say little on their own. Every
//! selectable symptom appears in at least one pattern.

use sahayak_contracts::{
    condition::{Condition, PatternEntry, Specialist},
    locale::Localized,
};

const GRANDE: (&str, &str, &str) = ("Grande Hospital, Dhapasi", "ग्रान्डे अस्पताल, ढापासी", "+977-1-5159266");
const NORVIC: (&str, &str, &str) = ("Norvic Hospital, Thapathali", "नर्भिक अस्पताल, थापाथली", "+977-1-4258554");
const TUTH: (&str, &str, &str) = (
    "TUTH, Maharajgunj",
    "त्रिभुवन विश्वविद्यालय शिक्षण अस्पताल, महाराजगञ्ज",
    "+977-1-4412303",
);
const PATAN: (&str, &str, &str) = ("Patan Hospital, Lagankhel", "पाटन अस्पताल, लगनखेल", "+977-1-5522278");
const GANGALAL: (&str, &str, &str) = (
    "Shahid Gangalal Heart Centre, Bansbari",
    "शहीद गंगालाल हृदय केन्द्र, बाँसबारी",
    "+977-1-4371322",
);

fn specialist(
    name: (&str, &str),
    specialty: (&str, &str),
    facility: (&str, &str, &str),
    years_experience: u8,
    rating: f32,
) -> Specialist {
    Specialist {
        name: Localized::text(name.0, name.1),
        specialty: Localized::text(specialty.0, specialty.1),
        facility: Localized::text(facility.0, facility.1),
        years_experience,
        phone: facility.2.to_string(),
        rating,
    }
}

fn pattern(entries: &[(&str, u8)]) -> Vec<PatternEntry> {
    entries.iter().map(|&(id, w)| PatternEntry::new(id, w)).collect()
}

/// All candidate conditions, in tie-break order.
pub fn conditions() -> Vec<Condition> {
    vec![
        Condition {
            key: "common-cold".to_string(),
            name: Localized::text("Common Cold", "सामान्य रुघाखोकी"),
            base_probability: 85,
            description: Localized::text(
                "A viral infection of the upper respiratory tract. Usually resolves on its own within 7-10 days.",
                "माथिल्लो श्वासप्रश्वास पथको भाइरल संक्रमण। सामान्यतया ७-१० दिनमा आफै निको हुन्छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Get plenty of rest",
                    "Stay hydrated with warm fluids",
                    "Use over-the-counter cold medications",
                    "Gargle with salt water for sore throat",
                ],
                &[
                    "धेरै आराम गर्नुहोस्",
                    "न्यानो तरल पदार्थले हाइड्रेटेड रहनुहोस्",
                    "ओभर-द-काउन्टर चिसो औषधिहरू प्रयोग गर्नुहोस्",
                    "घाँटी दुखाइको लागि नुन पानीले गार्गल गर्नुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Ramesh Sharma", "डा. रमेश शर्मा"),
                    ("General Physician", "सामान्य चिकित्सक"),
                    GRANDE,
                    15,
                    4.7,
                ),
                specialist(
                    ("Dr. Sita Poudel", "डा. सीता पौडेल"),
                    ("Family Medicine", "पारिवारिक चिकित्सा"),
                    NORVIC,
                    12,
                    4.8,
                ),
            ],
            pattern: pattern(&[
                ("runny-nose", 3),
                ("nasal-congestion", 3),
                ("sneezing", 2),
                ("sore-throat", 3),
                ("cough", 2),
                ("fever", 1),
                ("fatigue", 1),
                ("headache", 1),
            ]),
        },
        Condition {
            key: "seasonal-flu".to_string(),
            name: Localized::text("Seasonal Flu (Influenza)", "मौसमी फ्लू (इन्फ्लुएन्जा)"),
            base_probability: 70,
            description: Localized::text(
                "Influenza is a viral infection that attacks the respiratory system. Can be more severe than a common cold with sudden onset of symptoms.",
                "इन्फ्लुएन्जा एक भाइरल संक्रमण हो जसले श्वासप्रश्वास प्रणालीमा आक्रमण गर्छ। लक्षणहरूको अचानक सुरुवातसँग सामान्य रुघाखोकी भन्दा गम्भीर हुन सक्छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Consult a doctor for antiviral medication within 48 hours",
                    "Rest and drink plenty of fluids",
                    "Monitor temperature regularly",
                    "Isolate to prevent spread to others",
                    "Take prescribed medications as directed",
                ],
                &[
                    "४८ घण्टा भित्र एन्टिभाइरल औषधिको लागि डाक्टरसँग परामर्श गर्नुहोस्",
                    "आराम गर्नुहोस् र धेरै तरल पदार्थ पिउनुहोस्",
                    "नियमित रूपमा तापक्रम निगरानी गर्नुहोस्",
                    "अरूलाई फैलावट रोक्न अलग रहनुहोस्",
                    "निर्देशन अनुसार निर्धारित औषधिहरू लिनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Prakash Thapa", "डा. प्रकाश थापा"),
                    ("Internal Medicine", "आन्तरिक चिकित्सा"),
                    TUTH,
                    20,
                    4.9,
                ),
                specialist(
                    ("Dr. Anjali Singh", "डा. अञ्जली सिंह"),
                    ("Infectious Disease", "संक्रामक रोग"),
                    GRANDE,
                    10,
                    4.6,
                ),
            ],
            pattern: pattern(&[
                ("fever", 3),
                ("chills", 2),
                ("muscle-pain", 2),
                ("fatigue", 2),
                ("cough", 2),
                ("headache", 1),
                ("sore-throat", 1),
                ("weakness", 1),
            ]),
        },
        Condition {
            key: "allergic-rhinitis".to_string(),
            name: Localized::text("Allergic Rhinitis", "एलर्जिक राइनाइटिस"),
            base_probability: 65,
            description: Localized::text(
                "Inflammation of the nasal passages caused by allergies. Common triggers include pollen, dust mites, pet dander, and mold.",
                "एलर्जीको कारणले नाक मार्गको सूजन। सामान्य ट्रिगरहरूमा परागकण, धुलो माइट, पाल्तु जनावरको फर र ढुसी समावेश छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Identify and avoid known allergens",
                    "Use antihistamine medications",
                    "Keep windows closed during high pollen days",
                    "Use air purifiers at home",
                    "Consider allergy testing",
                ],
                &[
                    "ज्ञात एलर्जी पहिचान गर्नुहोस् र बच्नुहोस्",
                    "एन्टिहिस्टामाइन औषधि प्रयोग गर्नुहोस्",
                    "उच्च परागकणको दिनहरूमा झ्यालहरू बन्द राख्नुहोस्",
                    "घरमा एयर प्युरिफायर प्रयोग गर्नुहोस्",
                    "एलर्जी परीक्षण विचार गर्नुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Binod Adhikari", "डा. बिनोद अधिकारी"),
                    ("Allergist/Immunologist", "एलर्जी विशेषज्ञ"),
                    PATAN,
                    18,
                    4.8,
                ),
                specialist(
                    ("Dr. Maya Gurung", "डा. माया गुरुङ"),
                    ("ENT Specialist", "कान, नाक, घाँटी विशेषज्ञ"),
                    NORVIC,
                    14,
                    4.7,
                ),
            ],
            pattern: pattern(&[
                ("sneezing", 3),
                ("runny-nose", 3),
                ("nasal-congestion", 2),
                ("itching", 1),
                ("eye-redness", 2),
                ("cough", 1),
                ("wheezing", 1),
            ]),
        },
        Condition {
            key: "gastroenteritis".to_string(),
            name: Localized::text("Gastroenteritis", "ग्यास्ट्रोएन्टेराइटिस"),
            base_probability: 75,
            description: Localized::text(
                "Inflammation of the digestive tract causing diarrhea, vomiting, and abdominal pain. Usually caused by viral or bacterial infection.",
                "पाचन तन्त्रको सूजनले झाडापखाला, बान्ता र पेट दुखाइ निम्त्याउँछ। सामान्यतया भाइरल वा ब्याक्टेरियल संक्रमणको कारणले हुन्छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Stay well hydrated with ORS",
                    "Eat bland, easy-to-digest foods",
                    "Avoid dairy products temporarily",
                    "Practice good hand hygiene",
                    "Seek medical help if symptoms persist beyond 3 days",
                ],
                &[
                    "ORS ले राम्रोसँग हाइड्रेटेड रहनुहोस्",
                    "नरम, सजिलै पच्ने खाना खानुहोस्",
                    "अस्थायी रूपमा दुग्ध उत्पादनहरूबाट बच्नुहोस्",
                    "राम्रो हात सरसफाइ अभ्यास गर्नुहोस्",
                    "लक्षणहरू ३ दिन भन्दा बढी रहे चिकित्सा सहायता लिनुहोस्",
                ],
            ),
            specialists: vec![specialist(
                ("Dr. Suresh Regmi", "डा. सुरेश रेग्मी"),
                ("Gastroenterologist", "ग्यास्ट्रोएन्टेरोलोजिस्ट"),
                GRANDE,
                16,
                4.8,
            )],
            pattern: pattern(&[
                ("diarrhea", 3),
                ("vomiting", 3),
                ("nausea", 2),
                ("abdominal-pain", 2),
                ("fever", 1),
                ("loss-appetite", 1),
                ("weakness", 1),
            ]),
        },
        Condition {
            key: "migraine".to_string(),
            name: Localized::text("Migraine", "माइग्रेन"),
            base_probability: 80,
            description: Localized::text(
                "A neurological condition characterized by intense, throbbing headaches often accompanied by nausea, vomiting, and sensitivity to light and sound.",
                "एक न्यूरोलोजिकल अवस्था जसमा तीव्र, धड्किने टाउको दुखाइ हुन्छ जुन प्राय: वाकवाकी, बान्ता र प्रकाश र आवाजप्रति संवेदनशीलताको साथ हुन्छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Rest in a quiet, dark room",
                    "Take prescribed migraine medications early",
                    "Apply cold compress to head",
                    "Identify and avoid triggers",
                    "Maintain regular sleep schedule",
                    "Stay hydrated",
                ],
                &[
                    "शान्त, अँध्यारो कोठामा आराम गर्नुहोस्",
                    "निर्धारित माइग्रेन औषधि चाँडै लिनुहोस्",
                    "टाउकोमा चिसो कम्प्रेस लगाउनुहोस्",
                    "ट्रिगर पहिचान गर्नुहोस् र बच्नुहोस्",
                    "नियमित निद्रा तालिका कायम राख्नुहोस्",
                    "हाइड्रेटेड रहनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Rajesh Bajracharya", "डा. राजेश बज्राचार्य"),
                    ("Neurologist", "न्यूरोलोजिस्ट"),
                    TUTH,
                    22,
                    4.9,
                ),
                specialist(
                    ("Dr. Kalpana Shrestha", "डा. कल्पना श्रेष्ठ"),
                    ("Neurologist", "न्यूरोलोजिस्ट"),
                    NORVIC,
                    15,
                    4.7,
                ),
            ],
            pattern: pattern(&[
                ("headache", 3),
                ("nausea", 2),
                ("vomiting", 1),
                ("blurred-vision", 2),
                ("dizziness", 1),
                ("fatigue", 1),
            ]),
        },
        Condition {
            key: "urinary-tract-infection".to_string(),
            name: Localized::text("Urinary Tract Infection (UTI)", "मूत्र मार्ग संक्रमण"),
            base_probability: 85,
            description: Localized::text(
                "Bacterial infection affecting the urinary system. More common in women. Requires prompt antibiotic treatment.",
                "मूत्र प्रणालीलाई असर गर्ने ब्याक्टेरियल संक्रमण। महिलाहरूमा बढी सामान्य। तुरुन्त एन्टिबायोटिक उपचार आवश्यक छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Consult doctor for antibiotic prescription",
                    "Drink plenty of water",
                    "Urinate frequently",
                    "Avoid holding urine",
                    "Maintain good hygiene",
                    "Complete full course of antibiotics",
                ],
                &[
                    "एन्टिबायोटिक प्रिस्क्रिप्शनको लागि डाक्टरसँग परामर्श गर्नुहोस्",
                    "धेरै पानी पिउनुहोस्",
                    "बारम्बार पिसाब गर्नुहोस्",
                    "पिसाब रोक्न बच्नुहोस्",
                    "राम्रो सरसफाइ कायम राख्नुहोस्",
                    "एन्टिबायोटिकको पूर्ण कोर्स पूरा गर्नुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Nirmala Rai", "डा. निर्मला राई"),
                    ("Urologist", "युरोलोजिस्ट"),
                    GRANDE,
                    13,
                    4.6,
                ),
                specialist(
                    ("Dr. Krishna Karki", "डा. कृष्ण कार्की"),
                    ("General Physician", "सामान्य चिकित्सक"),
                    PATAN,
                    17,
                    4.7,
                ),
            ],
            pattern: pattern(&[
                ("painful-urination", 3),
                ("frequent-urination", 3),
                ("blood-urine", 2),
                ("abdominal-pain", 1),
                ("fever", 1),
                ("back-pain", 1),
            ]),
        },
        Condition {
            key: "acid-reflux".to_string(),
            name: Localized::text("Acid Reflux (Gastritis)", "अम्लपित्त (ग्यास्ट्राइटिस)"),
            base_probability: 75,
            description: Localized::text(
                "Stomach acid irritates the stomach lining or flows back into the food pipe. Common with irregular meals, spicy food and stress.",
                "पेटको अम्लले पेटको भित्री भागलाई पोल्छ वा खाना नलीमा फर्कन्छ। अनियमित खाना, पिरो खाना र तनावसँग सामान्य।",
            ),
            recommendations: Localized::lines(
                &[
                    "Eat small meals at regular times",
                    "Avoid spicy, oily food and tea on an empty stomach",
                    "Do not lie down right after eating",
                    "See a doctor if pain wakes you at night",
                ],
                &[
                    "नियमित समयमा थोरै थोरै खाना खानुहोस्",
                    "खाली पेटमा पिरो, चिल्लो खाना र चिया नखानुहोस्",
                    "खाना खाएपछि तुरुन्तै नसुत्नुहोस्",
                    "राति दुखाइले ब्युँझाएमा डाक्टरलाई देखाउनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Bikash Gurung", "डा. विकास गुरुङ"),
                    ("Gastroenterologist", "ग्यास्ट्रोइन्टेरोलोजिस्ट"),
                    GRANDE,
                    14,
                    4.6,
                ),
            ],
            pattern: pattern(&[
                ("heartburn", 3),
                ("indigestion", 3),
                ("bloating", 2),
                ("constipation", 1),
                ("chest-pain", 1),
            ]),
        },
        Condition {
            key: "heart-rhythm-problem".to_string(),
            name: Localized::text("Heart Rhythm or Blood Pressure Problem", "मुटुको धड्कन वा रक्तचापको समस्या"),
            base_probability: 80,
            description: Localized::text(
                "An irregular heartbeat or abnormal blood pressure. Needs an ECG and a blood pressure check; chest pain with breathlessness is an emergency.",
                "अनियमित मुटुको धड्कन वा असामान्य रक्तचाप। ईसीजी र रक्तचाप जाँच आवश्यक छ; सास फेर्न गाह्रोसहित छाती दुखे आपतकालीन हो।",
            ),
            recommendations: Localized::lines(
                &[
                    "Call 102 if chest pain lasts more than a few minutes",
                    "Check your blood pressure regularly",
                    "Reduce salt, caffeine and alcohol",
                    "Take prescribed heart medicines without skipping",
                ],
                &[
                    "छाती दुखाइ केही मिनेटभन्दा बढी रहेमा १०२ मा फोन गर्नुहोस्",
                    "नियमित रूपमा रक्तचाप जाँच गर्नुहोस्",
                    "नुन, क्याफिन र मदिरा कम गर्नुहोस्",
                    "तोकिएको मुटुको औषधि नछुटाई लिनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Suman Adhikari", "डा. सुमन अधिकारी"),
                    ("Cardiologist", "हृदय रोग विशेषज्ञ"),
                    GANGALAL,
                    20,
                    4.9,
                ),
                specialist(
                    ("Dr. Anjana Thapa", "डा. अञ्जना थापा"),
                    ("Cardiologist", "हृदय रोग विशेषज्ञ"),
                    NORVIC,
                    11,
                    4.6,
                ),
            ],
            pattern: pattern(&[
                ("palpitations", 3),
                ("irregular-heartbeat", 3),
                ("high-blood-pressure", 3),
                ("low-blood-pressure", 2),
                ("chest-pain", 3),
                ("shortness-breath", 2),
                ("sweating", 1),
                ("swelling", 1),
            ]),
        },
        Condition {
            key: "arthritis".to_string(),
            name: Localized::text("Arthritis", "बाथ (आर्थ्राइटिस)"),
            base_probability: 70,
            description: Localized::text(
                "Inflammation of one or more joints causing pain and stiffness, often worse in the morning or in cold weather.",
                "एक वा बढी जोर्नीको सुजन जसले दुखाइ र कडापन ल्याउँछ, प्राय: बिहान वा चिसो मौसममा बढी हुन्छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Keep joints moving with gentle exercise",
                    "Apply warm compresses to stiff joints",
                    "Maintain a healthy weight",
                ],
                &[
                    "हल्का व्यायामले जोर्नी चलाइराख्नुहोस्",
                    "कडा जोर्नीमा तातो सेक लगाउनुहोस्",
                    "स्वस्थ तौल कायम राख्नुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Prakash Joshi", "डा. प्रकाश जोशी"),
                    ("Rheumatologist", "बाथ रोग विशेषज्ञ"),
                    PATAN,
                    16,
                    4.7,
                ),
            ],
            pattern: pattern(&[
                ("joint-pain", 3),
                ("stiffness", 3),
                ("swelling", 2),
                ("fatigue", 1),
            ]),
        },
        Condition {
            key: "skin-allergy".to_string(),
            name: Localized::text("Allergic Skin Reaction", "छालाको एलर्जी"),
            base_probability: 75,
            description: Localized::text(
                "The skin reacts to a food, medicine, plant or soap with a rash, hives or itching. Swelling of the lips or difficulty breathing is an emergency.",
                "छालाले खाना, औषधि, बोटबिरुवा वा साबुनप्रति डाबर, पित्त वा चिलाइले प्रतिक्रिया दिन्छ। ओठ सुन्निने वा सास फेर्न गाह्रो भए आपतकालीन हो।",
            ),
            recommendations: Localized::lines(
                &[
                    "Avoid the suspected trigger",
                    "Use a gentle moisturiser on dry skin",
                    "Take an antihistamine if advised",
                ],
                &[
                    "शंकास्पद कारणबाट टाढा रहनुहोस्",
                    "सुख्खा छालामा हल्का मोइस्चराइजर लगाउनुहोस्",
                    "सल्लाह भएमा एन्टिहिस्टामिन लिनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Rina Maharjan", "डा. रिना महर्जन"),
                    ("Dermatologist", "छाला रोग विशेषज्ञ"),
                    TUTH,
                    12,
                    4.7,
                ),
            ],
            pattern: pattern(&[
                ("rash", 3),
                ("hives", 3),
                ("dry-skin", 2),
                ("swelling", 1),
                ("bruising", 1),
            ]),
        },
        Condition {
            key: "nerve-disorder".to_string(),
            name: Localized::text("Nerve or Seizure Disorder", "स्नायु वा छारे रोगको समस्या"),
            base_probability: 65,
            description: Localized::text(
                "Problems in the nerves or brain that cause numbness, tingling, confusion or seizures. A first seizure always needs medical review.",
                "स्नायु वा मस्तिष्कको समस्या जसले सुन्निने, झिलमिली, भ्रम वा छारे रोग ल्याउँछ। पहिलो पटक छारे आएमा सधैं चिकित्सकलाई देखाउनुहोस्।",
            ),
            recommendations: Localized::lines(
                &[
                    "Do not drive until a doctor has reviewed you",
                    "Keep a diary of episodes",
                    "Check blood sugar and vitamin B12 levels",
                ],
                &[
                    "डाक्टरले नहेरेसम्म सवारी नचलाउनुहोस्",
                    "घटनाहरूको दैनिकी राख्नुहोस्",
                    "रगतमा चिनी र भिटामिन बी१२ जाँच गर्नुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Rajesh Bajracharya", "डा. राजेश बज्राचार्य"),
                    ("Neurologist", "न्यूरोलोजिस्ट"),
                    TUTH,
                    22,
                    4.9,
                ),
            ],
            pattern: pattern(&[
                ("numbness", 3),
                ("tingling", 3),
                ("seizures", 3),
                ("confusion", 2),
                ("memory-loss", 2),
            ]),
        },
        Condition {
            key: "anxiety-depression".to_string(),
            name: Localized::text("Anxiety or Depression", "चिन्ता वा डिप्रेसन"),
            base_probability: 70,
            description: Localized::text(
                "Persistent worry, low mood or loss of interest that affects sleep, appetite and daily life. It is common and treatable.",
                "लगातार चिन्ता, उदास मन वा रुचि हराउनु जसले निद्रा, भोक र दैनिक जीवनमा असर गर्छ। यो सामान्य र उपचारयोग्य छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Talk to someone you trust",
                    "Keep a regular sleep and meal routine",
                    "Seek help immediately if you think of self-harm",
                ],
                &[
                    "विश्वास गर्ने व्यक्तिसँग कुरा गर्नुहोस्",
                    "नियमित निद्रा र खानाको दिनचर्या राख्नुहोस्",
                    "आफैंलाई हानि गर्ने विचार आएमा तुरुन्तै सहयोग लिनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Meena Karki", "डा. मीना कार्की"),
                    ("Psychiatrist", "मनोचिकित्सक"),
                    PATAN,
                    18,
                    4.8,
                ),
            ],
            pattern: pattern(&[
                ("anxiety", 3),
                ("depression", 3),
                ("difficulty-sleeping", 2),
                ("palpitations", 1),
                ("weight-loss", 1),
                ("weight-gain", 1),
                ("memory-loss", 1),
            ]),
        },
        Condition {
            key: "ear-infection".to_string(),
            name: Localized::text("Ear Infection", "कानको संक्रमण"),
            base_probability: 80,
            description: Localized::text(
                "Infection of the middle or outer ear, often after a cold or swimming. Pain may be sharp and can affect balance.",
                "बीच वा बाहिरी कानको संक्रमण, प्राय: रुघा वा पौडीपछि। दुखाइ तीव्र हुन सक्छ र सन्तुलनमा असर गर्न सक्छ।",
            ),
            recommendations: Localized::lines(
                &[
                    "Keep the ear dry",
                    "Do not put oil or cotton buds in the ear",
                    "See an ENT doctor if pain lasts more than two days",
                ],
                &[
                    "कान सुख्खा राख्नुहोस्",
                    "कानमा तेल वा कटन बड नहाल्नुहोस्",
                    "दुखाइ दुई दिनभन्दा बढी रहेमा नाक-कान-घाँटी डाक्टरलाई देखाउनुहोस्",
                ],
            ),
            specialists: vec![
                specialist(
                    ("Dr. Hari Bhattarai", "डा. हरि भट्टराई"),
                    ("ENT Specialist", "नाक-कान-घाँटी विशेषज्ञ"),
                    NORVIC,
                    15,
                    4.6,
                ),
            ],
            pattern: pattern(&[
                ("ear-pain", 3),
                ("dizziness", 1),
            ]),
        },
    ]
}
