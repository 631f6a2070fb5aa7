//! The selectable symptom list.

use sahayak_contracts::{
    locale::Localized,
    symptom::{Symptom, SymptomCategory},
};

use SymptomCategory::*;

const SYMPTOMS: &[(&str, &str, &str, SymptomCategory)] = &[
    ("fever", "Fever", "ज्वरो", General),
    ("fatigue", "Fatigue", "थकान", General),
    ("weakness", "Weakness", "कमजोरी", General),
    ("chills", "Chills", "चिसो लाग्ने", General),
    ("sweating", "Night Sweats", "रातमा पसिना", General),
    ("weight-loss", "Weight Loss", "तौल घट्ने", General),
    ("weight-gain", "Weight Gain", "तौल बढ्ने", General),
    ("loss-appetite", "Loss of Appetite", "भोक नलाग्ने", General),
    ("cough", "Cough", "खोकी", Respiratory),
    ("sore-throat", "Sore Throat", "घाँटी दुख्ने", Respiratory),
    ("runny-nose", "Runny Nose", "नाक बग्ने", Respiratory),
    ("nasal-congestion", "Nasal Congestion", "नाक बन्द", Respiratory),
    ("shortness-breath", "Shortness of Breath", "सास फेर्न गाह्रो", Respiratory),
    ("chest-pain", "Chest Pain", "छाती दुख्ने", Respiratory),
    ("wheezing", "Wheezing", "सास फेर्दा आवाज", Respiratory),
    ("sneezing", "Sneezing", "हाच्छ्युँ", Respiratory),
    ("nausea", "Nausea", "वाकवाकी", Digestive),
    ("vomiting", "Vomiting", "बान्ता", Digestive),
    ("diarrhea", "Diarrhea", "झाडापखाला", Digestive),
    ("constipation", "Constipation", "कब्जियत", Digestive),
    ("abdominal-pain", "Abdominal Pain", "पेट दुख्ने", Digestive),
    ("bloating", "Bloating", "पेट फुल्ने", Digestive),
    ("heartburn", "Heartburn", "छाती पोल्ने", Digestive),
    ("indigestion", "Indigestion", "बदहजमी", Digestive),
    ("headache", "Headache", "टाउको दुख्ने", Neurological),
    ("dizziness", "Dizziness", "चक्कर लाग्ने", Neurological),
    ("confusion", "Confusion", "भ्रम", Neurological),
    ("memory-loss", "Memory Loss", "सम्झना गुम्ने", Neurological),
    ("numbness", "Numbness", "सुन्निने", Neurological),
    ("tingling", "Tingling", "झिलमिली", Neurological),
    ("seizures", "Seizures", "दौरा", Neurological),
    ("blurred-vision", "Blurred Vision", "धमिलो देखिने", Neurological),
    ("joint-pain", "Joint Pain", "जोर्नी दुख्ने", Musculoskeletal),
    ("muscle-pain", "Muscle Pain", "मांसपेशी दुख्ने", Musculoskeletal),
    ("back-pain", "Back Pain", "ढाड दुख्ने", Musculoskeletal),
    ("stiffness", "Stiffness", "कडा हुने", Musculoskeletal),
    ("swelling", "Swelling", "सुन्निने", Musculoskeletal),
    ("rash", "Rash", "दाग", Skin),
    ("itching", "Itching", "चिलाउने", Skin),
    ("dry-skin", "Dry Skin", "सुख्खा छाला", Skin),
    ("hives", "Hives", "पित्त उठ्ने", Skin),
    ("bruising", "Easy Bruising", "सजिलै चोट", Skin),
    ("palpitations", "Heart Palpitations", "मुटु धड्किने", Cardiovascular),
    ("irregular-heartbeat", "Irregular Heartbeat", "अनियमित मुटुको धड्कन", Cardiovascular),
    ("high-blood-pressure", "High Blood Pressure", "उच्च रक्तचाप", Cardiovascular),
    ("low-blood-pressure", "Low Blood Pressure", "कम रक्तचाप", Cardiovascular),
    ("frequent-urination", "Frequent Urination", "बारम्बार पिसाब", Other),
    ("painful-urination", "Painful Urination", "पिसाब गर्दा दुख्ने", Other),
    ("blood-urine", "Blood in Urine", "पिसाबमा रगत", Other),
    ("difficulty-sleeping", "Difficulty Sleeping", "निद्रा नलाग्ने", Other),
    ("anxiety", "Anxiety", "चिन्ता", Other),
    ("depression", "Depression", "डिप्रेसन", Other),
    ("ear-pain", "Ear Pain", "कान दुख्ने", Other),
    ("eye-redness", "Eye Redness", "आँखा रातो", Other),
];

/// Every symptom in display order, grouped by category.
pub fn symptoms() -> Vec<Symptom> {
    SYMPTOMS
        .iter()
        .map(|&(id, en, ne, category)| Symptom {
            id: id.into(),
            label: Localized::text(en, ne),
            category,
        })
        .collect()
}
