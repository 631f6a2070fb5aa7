//! National emergency numbers, first-response steps, and emergency hospitals.

use sahayak_contracts::{
    facility::{EmergencyHospital, EmergencyLine},
    locale::Localized,
};

pub fn emergency_lines() -> Vec<EmergencyLine> {
    [
        ("ambulance", "Call Ambulance", "एम्बुलेन्स कल गर्नुहोस्", "102"),
        ("police", "Police", "प्रहरी", "100"),
        ("fire", "Fire Department", "अग्नि नियन्त्रण", "101"),
        ("medical", "Medical Emergency", "चिकित्सा आपातकालीन", "103"),
    ]
    .into_iter()
    .map(|(key, en, ne, number)| EmergencyLine {
        key: key.to_string(),
        name: Localized::text(en, ne),
        number: number.to_string(),
    })
    .collect()
}

/// What to do when calling for help, in order.
pub fn emergency_instructions() -> Localized<Vec<String>> {
    Localized::lines(
        &[
            "Stay calm and assess the situation",
            "Call the appropriate emergency number",
            "Provide clear location information",
            "Follow dispatcher instructions",
            "Do not hang up until told to do so",
        ],
        &[
            "शान्त रहनुहोस् र स्थिति मूल्याङ्कन गर्नुहोस्",
            "उपयुक्त आपातकालीन नम्बरमा कल गर्नुहोस्",
            "स्पष्ट स्थान जानकारी प्रदान गर्नुहोस्",
            "डिस्प्याचर निर्देशनहरू पालना गर्नुहोस्",
            "भनिएसम्म फोन नकाट्नुहोस्",
        ],
    )
}

pub fn emergency_hospitals() -> Vec<EmergencyHospital> {
    [
        (
            ("B.P. Koirala Institute of Health Sciences", "बी.पी. कोइराला स्वास्थ्य विज्ञान प्रतिष्ठान"),
            "+977-1-4412303",
            ("Dharan, Nepal", "धरान, नेपाल"),
        ),
        (
            ("Norvic International Hospital", "नर्भिक अन्तर्राष्ट्रिय अस्पताल"),
            "+977-1-4258554",
            ("Thapathali, Kathmandu", "थापाथली, काठमाडौं"),
        ),
        (
            ("Grande International Hospital", "ग्रान्डे अन्तर्राष्ट्रिय अस्पताल"),
            "+977-1-5159266",
            ("Dhapasi, Kathmandu", "ढापासी, काठमाडौं"),
        ),
    ]
    .into_iter()
    .map(|(name, phone, address)| EmergencyHospital {
        name: Localized::text(name.0, name.1),
        phone: phone.to_string(),
        address: Localized::text(address.0, address.1),
    })
    .collect()
}
