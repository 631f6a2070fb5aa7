//! Reference sheets for the medicines the local recognizer knows.

use sahayak_contracts::{locale::Localized, medicine::Medicine};

pub fn medicines() -> Vec<Medicine> {
    vec![
        Medicine {
            key: "paracetamol-500".to_string(),
            name: Localized::text("Paracetamol 500mg", "प्यारासिटामोल ५०० मिलीग्राम"),
            generic_name: Localized::text("Acetaminophen", "एसिटामिनोफेन"),
            uses: Localized::lines(
                &[
                    "Relief of mild to moderate pain",
                    "Reduction of fever",
                    "Headache and body aches",
                    "Cold and flu symptoms",
                ],
                &[
                    "हल्का देखि मध्यम दुखाइको राहत",
                    "ज्वरो कम गर्ने",
                    "टाउको दुख्ने र शरीर दुख्ने",
                    "चिसो र फ्लू लक्षणहरू",
                ],
            ),
            dosage: Localized::text(
                "Adults: 1-2 tablets every 4-6 hours. Maximum 8 tablets in 24 hours.",
                "वयस्कहरू: हरेक ४-६ घण्टामा १-२ ट्याब्लेट। २४ घण्टामा अधिकतम ८ ट्याब्लेट।",
            ),
            side_effects: Localized::lines(
                &[
                    "Rare allergic reactions (rash, itching)",
                    "Nausea (uncommon)",
                    "Liver damage with overdose",
                    "Abdominal pain (rare)",
                ],
                &[
                    "दुर्लभ एलर्जी प्रतिक्रियाहरू (दाग, चिलाउने)",
                    "वाकवाकी (असामान्य)",
                    "ओभरडोजसँग कलेजो क्षति",
                    "पेट दुख्ने (दुर्लभ)",
                ],
            ),
            warnings: Localized::lines(
                &[
                    "Do not exceed recommended dose",
                    "Avoid alcohol consumption",
                    "Consult doctor if pregnant or breastfeeding",
                    "Not for children under 6 without medical advice",
                ],
                &[
                    "सिफारिस गरिएको खुराक नाघ्नुहोस्",
                    "मदिरा सेवनबाट बच्नुहोस्",
                    "गर्भवती वा स्तनपान गराइरहेको भए डाक्टरसँग परामर्श गर्नुहोस्",
                    "चिकित्सा सल्लाह बिना ६ वर्ष मुनिका बालबालिकाका लागि होइन",
                ],
            ),
            photo_url: "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=400&h=300&fit=crop"
                .to_string(),
        },
        Medicine {
            key: "ibuprofen-200".to_string(),
            name: Localized::text("Ibuprofen 200mg", "इबुप्रोफेन २०० मिलीग्राम"),
            generic_name: Localized::text("Ibuprofen", "इबुप्रोफेन"),
            uses: Localized::lines(
                &["Pain relief", "Reduction of inflammation", "Fever reduction", "Arthritis pain"],
                &["दुखाइ राहत", "सूजन कम गर्ने", "ज्वरो कम गर्ने", "गठिया दुखाइ"],
            ),
            dosage: Localized::text(
                "Adults: 200-400mg every 4-6 hours. Maximum 1200mg in 24 hours.",
                "वयस्कहरू: हरेक ४-६ घण्टामा २००-४०० मिलीग्राम। २४ घण्टामा अधिकतम १२०० मिलीग्राम।",
            ),
            side_effects: Localized::lines(
                &["Stomach upset", "Heartburn", "Dizziness", "Increased blood pressure"],
                &["पेट खराब", "हर्टबर्न", "चक्कर आउने", "रक्तचाप बढ्ने"],
            ),
            warnings: Localized::lines(
                &[
                    "Avoid if allergic to aspirin",
                    "May cause stomach bleeding",
                    "Consult doctor for kidney/liver issues",
                    "Not recommended during pregnancy",
                ],
                &[
                    "एस्पिरिनमा एलर्जी भए बच्नुहोस्",
                    "पेट रक्तस्राव हुन सक्छ",
                    "मृगौला/कलेजो समस्याका लागि डाक्टरसँग परामर्श गर्नुहोस्",
                    "गर्भावस्थामा सिफारिस गरिएको छैन",
                ],
            ),
            photo_url: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=300&fit=crop".to_string(),
        },
        Medicine {
            key: "amoxicillin-500".to_string(),
            name: Localized::text("Amoxicillin 500mg", "एमोक्सिसिलिन ५०० मिलीग्राम"),
            generic_name: Localized::text("Amoxicillin", "एमोक्सिसिलिन"),
            uses: Localized::lines(
                &[
                    "Bacterial infections",
                    "Ear infections",
                    "Urinary tract infections",
                    "Skin infections",
                ],
                &["ब्याक्टेरियल संक्रमणहरू", "कान संक्रमणहरू", "मूत्र मार्ग संक्रमणहरू", "छाला संक्रमणहरू"],
            ),
            dosage: Localized::text(
                "Adults: 500mg every 8 hours for 7-10 days.",
                "वयस्कहरू: ७-१० दिनका लागि हरेक ८ घण्टामा ५०० मिलीग्राम।",
            ),
            side_effects: Localized::lines(
                &["Diarrhea", "Nausea", "Vomiting", "Rash"],
                &["दस्त", "वाकवाकी", "वमन", "दाग"],
            ),
            warnings: Localized::lines(
                &[
                    "Complete full course of antibiotics",
                    "May cause allergic reactions",
                    "Avoid if penicillin allergic",
                    "May interact with other medications",
                ],
                &[
                    "एन्टिबायोटिकहरूको पूर्ण कोर्स पूरा गर्नुहोस्",
                    "एलर्जी प्रतिक्रियाहरू हुन सक्छ",
                    "पेनिसिलिनमा एलर्जी भए बच्नुहोस्",
                    "अन्य औषधिहरूसँग अन्तरक्रिया हुन सक्छ",
                ],
            ),
            photo_url: "https://images.unsplash.com/photo-1559757175-0eb30cd8c063?w=400&h=300&fit=crop".to_string(),
        },
        Medicine {
            key: "omeprazole-20".to_string(),
            name: Localized::text("Omeprazole 20mg", "ओमेप्राजोल २० मिलीग्राम"),
            generic_name: Localized::text("Omeprazole", "ओमेप्राजोल"),
            uses: Localized::lines(
                &[
                    "Acid reflux treatment",
                    "Heartburn relief",
                    "Stomach ulcer treatment",
                    "GERD management",
                ],
                &["एसिड रिफ्लक्स उपचार", "हर्टबर्न राहत", "पेटको घाउ उपचार", "जीईआरडी व्यवस्थापन"],
            ),
            dosage: Localized::text(
                "Adults: 20mg once daily for 4-8 weeks.",
                "वयस्कहरू: ४-८ हप्ताका लागि दैनिक एक पटक २० मिलीग्राम।",
            ),
            side_effects: Localized::lines(
                &["Headache", "Nausea", "Diarrhea", "Abdominal pain"],
                &["टाउको दुख्ने", "वाकवाकी", "दस्त", "पेट दुख्ने"],
            ),
            warnings: Localized::lines(
                &[
                    "Long-term use may affect bone health",
                    "May mask stomach cancer symptoms",
                    "Consult doctor for persistent symptoms",
                    "May interact with certain medications",
                ],
                &[
                    "दीर्घकालीन प्रयोगले हड्डी स्वास्थ्यमा असर गर्न सक्छ",
                    "पेट क्यान्सरका लक्षणहरू लुकाउन सक्छ",
                    "निरन्तर लक्षणहरूका लागि डाक्टरसँग परामर्श गर्नुहोस्",
                    "केही औषधिहरूसँग अन्तरक्रिया हुन सक्छ",
                ],
            ),
            photo_url: "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=400&h=300&fit=crop".to_string(),
        },
        Medicine {
            key: "aspirin-75".to_string(),
            name: Localized::text("Aspirin 75mg", "एस्पिरिन ७५ मिलीग्राम"),
            generic_name: Localized::text("Acetylsalicylic Acid", "एसिटिलसालिसिलिक एसिड"),
            uses: Localized::lines(
                &[
                    "Pain relief",
                    "Fever reduction",
                    "Heart attack prevention",
                    "Blood clot prevention",
                ],
                &["दुखाइ राहत", "ज्वरो कम गर्ने", "हर्ट अट्याक रोकथाम", "रक्त जमघट रोकथाम"],
            ),
            dosage: Localized::text(
                "Adults: 75-325mg daily for heart protection.",
                "वयस्कहरू: हर्ट संरक्षणका लागि दैनिक ७५-३२५ मिलीग्राम।",
            ),
            side_effects: Localized::lines(
                &["Stomach irritation", "Heartburn", "Bruising", "Bleeding"],
                &["पेट चिढिने", "हर्टबर्न", "नीलडाम", "रक्तस्राव"],
            ),
            warnings: Localized::lines(
                &[
                    "May cause stomach bleeding",
                    "Avoid if bleeding disorders",
                    "Not for children with viral infections",
                    "Consult doctor before surgery",
                ],
                &[
                    "पेट रक्तस्राव हुन सक्छ",
                    "रक्तस्राव विकारहरू भए बच्नुहोस्",
                    "भाइरल संक्रमण भएका बालबालिकाका लागि होइन",
                    "सर्जरी अघि डाक्टरसँग परामर्श गर्नुहोस्",
                ],
            ),
            photo_url: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=300&fit=crop".to_string(),
        },
    ]
}
