//! UI strings for both locales.
//!
//! Look strings up with [`t`]. Keys are dotted, grouped by screen. The two
//! tables must carry the same keys; a test enforces it.

use tracing::warn;

use sahayak_contracts::locale::Locale;

const EN: &[(&str, &str)] = &[
    // ── Login ──
    ("app.title", "Health Care App"),
    ("app.subtitle", "Your Personal Health Assistant"),
    ("login.email", "Email"),
    ("login.password", "Password"),
    ("login.name", "Full Name"),
    ("login.login", "Login"),
    ("login.signup", "Sign Up"),
    ("login.switch_to_signup", "Don't have an account? Sign Up"),
    ("login.switch_to_login", "Already have an account? Login"),
    ("login.feature.symptoms", "AI-Powered Symptom Checker"),
    ("login.feature.medicine", "Medicine Identification"),
    ("login.feature.reminders", "Smart Reminders"),
    ("login.feature.emergency", "Emergency Services"),
    // ── Dashboard ──
    ("dashboard.welcome", "Welcome"),
    ("dashboard.logout", "Logout"),
    ("dashboard.language", "Change Language"),
    ("tab.symptom-checker", "Symptom Checker"),
    ("tab.medicine-id", "Medicine ID"),
    ("tab.health-services", "Health Services"),
    ("tab.reminders", "Reminders"),
    ("tab.health-info", "Health Info"),
    ("tab.emergency", "Emergency"),
    // ── Symptom checker ──
    ("symptoms.title", "AI Symptom Checker"),
    ("symptoms.subtitle", "Select your symptoms to get AI-powered disease predictions"),
    ("symptoms.select", "Select Your Symptoms"),
    ("symptoms.selected", "Selected Symptoms"),
    ("symptoms.search", "Search symptoms..."),
    ("symptoms.analyze", "Analyze Symptoms"),
    ("symptoms.analyzing", "Analyzing your symptoms..."),
    ("symptoms.results", "Possible Conditions"),
    ("symptoms.no_results", "No matching conditions found for the selected symptoms"),
    ("symptoms.probability", "Probability"),
    ("symptoms.recommendations", "Recommendations"),
    ("symptoms.doctors", "Recommended Doctors"),
    ("symptoms.experience", "Experience"),
    ("symptoms.rating", "Rating"),
    ("symptoms.contact", "Contact"),
    ("symptoms.no_symptoms", "Please select at least one symptom"),
    (
        "symptoms.disclaimer",
        "This is not a substitute for professional medical advice. Please consult a healthcare provider.",
    ),
    // ── Medicine identifier ──
    ("medicine.title", "AI Medicine Identifier"),
    ("medicine.subtitle", "Take a photo of your medicine to get detailed information"),
    ("medicine.upload", "Upload Image"),
    ("medicine.take_picture", "Take Picture"),
    ("medicine.analyzing", "Analyzing medicine..."),
    ("medicine.name", "Medicine Name"),
    ("medicine.generic_name", "Generic Name"),
    ("medicine.uses", "Uses"),
    ("medicine.dosage", "Dosage"),
    ("medicine.side_effects", "Side Effects"),
    ("medicine.warnings", "Warnings"),
    ("medicine.no_image", "Please upload or take a picture of the medicine"),
    ("medicine.not_recognized", "The medicine could not be identified. Try a clearer picture."),
    (
        "medicine.disclaimer",
        "AI-generated information. Always consult a healthcare professional or pharmacist.",
    ),
    // ── Health services ──
    ("services.title", "Nearby Health Services"),
    ("services.subtitle", "Find hospitals, clinics, and pharmacies near you"),
    ("services.search", "Search location..."),
    ("services.all", "All"),
    ("services.distance", "Distance"),
    ("services.phone", "Phone"),
    ("services.hours", "Hours"),
    ("services.directions", "Get Directions"),
    ("services.open_now", "Open Now"),
    ("services.location_detected", "Your Location Detected"),
    ("services.default_area", "Kathmandu Area"),
    ("services.configured_area", "Default Area"),
    ("services.shown", "health facilities shown below"),
    ("services.view_map", "View in Google Maps"),
    // ── Reminders ──
    ("reminders.title", "Medicine & Vaccination Reminders"),
    ("reminders.subtitle", "Never miss your medications and vaccinations"),
    ("reminders.add", "Add Reminder"),
    ("reminders.name", "Name"),
    ("reminders.type", "Type"),
    ("reminders.time", "Time"),
    ("reminders.frequency", "Frequency"),
    ("reminders.notes", "Notes"),
    ("reminders.save", "Save Reminder"),
    ("reminders.cancel", "Cancel"),
    ("reminders.delete", "Delete"),
    ("reminders.enabled", "Enabled"),
    ("reminders.disabled", "Disabled"),
    ("reminders.empty", "No reminders yet. Add one to get started!"),
    // ── Health info ──
    ("info.title", "Health Information & Awareness"),
    ("info.subtitle", "Stay informed about health topics and wellness"),
    ("info.search", "Search health topics..."),
    ("info.read_more", "Read More"),
    ("info.back", "Back to Articles"),
    ("info.all", "All Topics"),
    (
        "info.disclaimer",
        "This information is for educational purposes. Consult healthcare professionals for medical advice.",
    ),
    // ── Emergency ──
    ("emergency.title", "Emergency Services"),
    ("emergency.subtitle", "Quick access to emergency contacts and services"),
    ("emergency.warning", "Only call emergency services in case of actual emergencies"),
    ("emergency.instructions", "Emergency Instructions"),
    ("emergency.hospitals", "Nearby Emergency Hospitals"),
    ("emergency.available_24", "Available 24/7"),
    ("emergency.call", "Call"),
];

const NE: &[(&str, &str)] = &[
    ("app.title", "स्वास्थ्य सेवा एप"),
    ("app.subtitle", "तपाईंको व्यक्तिगत स्वास्थ्य सहायक"),
    ("login.email", "इमेल"),
    ("login.password", "पासवर्ड"),
    ("login.name", "पूरा नाम"),
    ("login.login", "लगइन"),
    ("login.signup", "साइन अप"),
    ("login.switch_to_signup", "खाता छैन? साइन अप गर्नुहोस्"),
    ("login.switch_to_login", "खाता छ? लगइन गर्नुहोस्"),
    ("login.feature.symptoms", "एआई लक्षण परीक्षक"),
    ("login.feature.medicine", "औषधि पहिचान"),
    ("login.feature.reminders", "स्मार्ट रिमाइन्डर"),
    ("login.feature.emergency", "आपातकालीन सेवाहरू"),
    ("dashboard.welcome", "स्वागत छ"),
    ("dashboard.logout", "लगआउट"),
    ("dashboard.language", "भाषा परिवर्तन"),
    ("tab.symptom-checker", "लक्षण परीक्षक"),
    ("tab.medicine-id", "औषधि पहिचान"),
    ("tab.health-services", "स्वास्थ्य सेवाहरू"),
    ("tab.reminders", "रिमाइन्डर"),
    ("tab.health-info", "स्वास्थ्य जानकारी"),
    ("tab.emergency", "आपातकालीन"),
    ("symptoms.title", "एआई लक्षण परीक्षक"),
    ("symptoms.subtitle", "एआई-संचालित रोग भविष्यवाणी प्राप्त गर्न आफ्नो लक्षणहरू चयन गर्नुहोस्"),
    ("symptoms.select", "आफ्नो लक्षणहरू चयन गर्नुहोस्"),
    ("symptoms.selected", "चयन गरिएका लक्षणहरू"),
    ("symptoms.search", "लक्षणहरू खोज्नुहोस्..."),
    ("symptoms.analyze", "लक्षण विश्लेषण गर्नुहोस्"),
    ("symptoms.analyzing", "तपाईंको लक्षणहरू विश्लेषण गर्दै..."),
    ("symptoms.results", "सम्भावित रोगहरू"),
    ("symptoms.no_results", "चयन गरिएका लक्षणहरूसँग मिल्ने कुनै रोग फेला परेन"),
    ("symptoms.probability", "सम्भावना"),
    ("symptoms.recommendations", "सिफारिसहरू"),
    ("symptoms.doctors", "सिफारिस गरिएका डाक्टरहरू"),
    ("symptoms.experience", "अनुभव"),
    ("symptoms.rating", "मूल्याङ्कन"),
    ("symptoms.contact", "सम्पर्क"),
    ("symptoms.no_symptoms", "कृपया कम्तिमा एउटा लक्षण चयन गर्नुहोस्"),
    (
        "symptoms.disclaimer",
        "यो व्यावसायिक चिकित्सा सल्लाहको विकल्प होइन। कृपया स्वास्थ्य सेवा प्रदायकसँग परामर्श गर्नुहोस्।",
    ),
    ("medicine.title", "एआई औषधि पहिचानकर्ता"),
    ("medicine.subtitle", "विस्तृत जानकारी प्राप्त गर्न आफ्नो औषधिको फोटो खिच्नुहोस्"),
    ("medicine.upload", "छवि अपलोड गर्नुहोस्"),
    ("medicine.take_picture", "तस्वीर खिच्नुहोस्"),
    ("medicine.analyzing", "औषधि विश्लेषण गर्दै..."),
    ("medicine.name", "औषधिको नाम"),
    ("medicine.generic_name", "जेनेरिक नाम"),
    ("medicine.uses", "प्रयोगहरू"),
    ("medicine.dosage", "खुराक"),
    ("medicine.side_effects", "साइड इफेक्टहरू"),
    ("medicine.warnings", "चेतावनीहरू"),
    ("medicine.no_image", "कृपया औषधिको तस्वीर अपलोड गर्नुहोस् वा खिच्नुहोस्"),
    ("medicine.not_recognized", "औषधि पहिचान गर्न सकिएन। अझ स्पष्ट तस्वीर प्रयास गर्नुहोस्।"),
    (
        "medicine.disclaimer",
        "एआई-उत्पन्न जानकारी। सधैं स्वास्थ्य सेवा पेशेवर वा फार्मासिस्टसँग परामर्श गर्नुहोस्।",
    ),
    ("services.title", "नजिकका स्वास्थ्य सेवाहरू"),
    ("services.subtitle", "तपाईंको नजिक अस्पताल, क्लिनिक र फार्मेसीहरू फेला पार्नुहोस्"),
    ("services.search", "स्थान खोज्नुहोस्..."),
    ("services.all", "सबै"),
    ("services.distance", "दूरी"),
    ("services.phone", "फोन"),
    ("services.hours", "समय"),
    ("services.directions", "दिशा प्राप्त गर्नुहोस्"),
    ("services.open_now", "खुला छ"),
    ("services.location_detected", "तपाईंको स्थान पत्ता लाग्यो"),
    ("services.default_area", "काठमाडौं क्षेत्र"),
    ("services.configured_area", "पूर्वनिर्धारित क्षेत्र"),
    ("services.shown", "स्वास्थ्य संस्थाहरू तल देखाइएका छन्"),
    ("services.view_map", "गुगल नक्सामा हेर्नुहोस्"),
    ("reminders.title", "औषधि र खोप रिमाइन्डर"),
    ("reminders.subtitle", "आफ्नो औषधि र खोपहरू नछुटाउनुहोस्"),
    ("reminders.add", "रिमाइन्डर थप्नुहोस्"),
    ("reminders.name", "नाम"),
    ("reminders.type", "प्रकार"),
    ("reminders.time", "समय"),
    ("reminders.frequency", "आवृत्ति"),
    ("reminders.notes", "टिप्पणीहरू"),
    ("reminders.save", "रिमाइन्डर सुरक्षित गर्नुहोस्"),
    ("reminders.cancel", "रद्द गर्नुहोस्"),
    ("reminders.delete", "मेटाउनुहोस्"),
    ("reminders.enabled", "सक्षम छ"),
    ("reminders.disabled", "अक्षम छ"),
    ("reminders.empty", "अझै कुनै रिमाइन्डर छैन। सुरु गर्न एउटा थप्नुहोस्!"),
    ("info.title", "स्वास्थ्य जानकारी र जागरूकता"),
    ("info.subtitle", "स्वास्थ्य विषयहरू र कल्याणको बारेमा जानकार रहनुहोस्"),
    ("info.search", "स्वास्थ्य विषयहरू खोज्नुहोस्..."),
    ("info.read_more", "थप पढ्नुहोस्"),
    ("info.back", "लेखहरूमा फर्कनुहोस्"),
    ("info.all", "सबै विषयहरू"),
    (
        "info.disclaimer",
        "यो जानकारी शैक्षिक उद्देश्यका लागि हो। चिकित्सा सल्लाहको लागि स्वास्थ्य सेवा पेशेवरहरूसँग परामर्श गर्नुहोस्।",
    ),
    ("emergency.title", "आपातकालीन सेवाहरू"),
    ("emergency.subtitle", "आपातकालीन सम्पर्क र सेवाहरूमा द्रुत पहुँच"),
    ("emergency.warning", "वास्तविक आपतकालीन अवस्थामा मात्र आपातकालीन सेवाहरूमा कल गर्नुहोस्"),
    ("emergency.instructions", "आपातकालीन निर्देशनहरू"),
    ("emergency.hospitals", "नजिकका आपातकालीन अस्पतालहरू"),
    ("emergency.available_24", "२४/७ उपलब्ध"),
    ("emergency.call", "कल गर्नुहोस्"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Ne => NE,
    }
}

/// The string for `key` in `locale`.
///
/// An unknown key is returned unchanged so a missing translation shows up on
/// screen instead of panicking.
pub fn t(locale: Locale, key: &'static str) -> &'static str {
    match table(locale).iter().find(|(k, _)| *k == key) {
        Some((_, text)) => text,
        None => {
            warn!(key, locale = %locale, "missing UI string");
            key
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sahayak_contracts::locale::Locale;

    use super::{t, EN, NE};

    #[test]
    fn both_locales_define_the_same_keys() {
        let en: HashSet<_> = EN.iter().map(|(k, _)| *k).collect();
        let ne: HashSet<_> = NE.iter().map(|(k, _)| *k).collect();
        assert_eq!(en.len(), EN.len(), "duplicate key in EN table");
        assert_eq!(ne.len(), NE.len(), "duplicate key in NE table");
        assert_eq!(en.symmetric_difference(&ne).collect::<Vec<_>>(), Vec::<&&str>::new());
    }

    #[test]
    fn lookup_follows_locale() {
        assert_eq!(t(Locale::En, "dashboard.welcome"), "Welcome");
        assert_eq!(t(Locale::Ne, "dashboard.welcome"), "स्वागत छ");
    }

    #[test]
    fn unknown_key_falls_through() {
        assert_eq!(t(Locale::Ne, "no.such.key"), "no.such.key");
    }
}
