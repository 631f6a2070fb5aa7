//! # sahayak-contracts
//!
//! Shared types, locale helpers, and errors for the Sahayak health assistant.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, localization primitives, and the error
//! type.

pub mod article;
pub mod condition;
pub mod error;
pub mod facility;
pub mod locale;
pub mod medicine;
pub mod reminder;
pub mod symptom;
pub mod verify;

#[cfg(test)]
mod tests {
    use super::*;
    use error::SahayakError;
    use facility::{Coordinates, EmergencyLine, FacilityKind};
    use locale::{localize_digits, to_ascii_digits, to_nepali_digits, Locale, Localized, NEPALI_DIGITS};
    use symptom::{SelectionSet, Symptom, SymptomCategory, SymptomId};

    // ── Digit conversion ─────────────────────────────────────────────────────

    #[test]
    fn every_nepali_digit_maps_to_its_ascii_value() {
        for (value, digit) in NEPALI_DIGITS.iter().enumerate() {
            assert_eq!(to_ascii_digits(&digit.to_string()), value.to_string());
        }
    }

    #[test]
    fn nepali_digits_round_trip_through_ascii() {
        let samples = ["०", "९", "१०२", "१००", "+९७७-१-४४१२३०३", "०१२३४५६७८९"];
        for original in samples {
            let ascii = to_ascii_digits(original);
            assert!(ascii.chars().all(|c| !NEPALI_DIGITS.contains(&c)));
            assert_eq!(to_nepali_digits(&ascii), original);
        }
    }

    #[test]
    fn digit_conversion_leaves_other_characters_alone() {
        assert_eq!(to_ascii_digits("+९७७-१ ext"), "+977-1 ext");
        assert_eq!(to_nepali_digits("Call 102!"), "Call १०२!");
        assert_eq!(localize_digits("१०३", Locale::En), "103");
        assert_eq!(localize_digits("103", Locale::Ne), "१०३");
    }

    // ── Locale ───────────────────────────────────────────────────────────────

    #[test]
    fn locale_parses_codes_and_names() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("Nepali".parse::<Locale>().unwrap(), Locale::Ne);
        assert_eq!(" ne ".parse::<Locale>().unwrap(), Locale::Ne);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(SahayakError::InvalidInput { .. })
        ));
    }

    #[test]
    fn locale_toggle_is_an_involution() {
        for locale in Locale::ALL {
            assert_ne!(locale.toggle(), locale);
            assert_eq!(locale.toggle().toggle(), locale);
        }
    }

    #[test]
    fn localized_fallback_uses_english_when_nepali_is_blank() {
        let text = Localized::with_fallback("Vitamin D3", Some("   ".to_string()));
        assert_eq!(text.get(Locale::Ne), "Vitamin D3");

        let text = Localized::with_fallback("Vitamin D3", Some("भिटामिन डी३".to_string()));
        assert_eq!(text.get(Locale::Ne), "भिटामिन डी३");
    }

    #[test]
    fn localized_matches_is_case_insensitive_for_english() {
        let text = Localized::text("Sore Throat", "घाँटी दुख्ने");
        assert!(text.matches("throat"));
        assert!(text.matches("SORE"));
        assert!(text.matches("घाँटी"));
        assert!(!text.matches("cough"));
    }

    // ── Symptoms and selection ───────────────────────────────────────────────

    #[test]
    fn symptom_matches_label_and_category() {
        let symptom = Symptom {
            id: SymptomId::new("cough"),
            label: Localized::text("Cough", "खोकी"),
            category: SymptomCategory::Respiratory,
        };
        assert!(symptom.matches(""));
        assert!(symptom.matches("cou"));
        assert!(symptom.matches("खोकी"));
        assert!(symptom.matches("respir"));
        assert!(!symptom.matches("digestive"));
    }

    #[test]
    fn selection_set_toggle_and_dedup() {
        let mut selection = SelectionSet::new();
        assert!(selection.is_empty());

        assert!(selection.insert(SymptomId::new("fever")));
        assert!(!selection.insert(SymptomId::new("fever")));
        assert_eq!(selection.len(), 1);

        assert!(selection.toggle(SymptomId::new("cough")));
        assert!(!selection.toggle(SymptomId::new("cough")));
        assert!(!selection.contains(&SymptomId::new("cough")));

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_set_equality_ignores_order() {
        let a: SelectionSet = ["fever", "cough"].into_iter().collect();
        let b: SelectionSet = ["cough", "fever"].into_iter().collect();
        let c: SelectionSet = ["cough"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn symptom_category_serializes_as_kebab_key() {
        for category in SymptomCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    // ── Facilities ───────────────────────────────────────────────────────────

    #[test]
    fn distance_is_zero_to_self_and_symmetric() {
        let a = Coordinates::KATHMANDU;
        let b = Coordinates::new(27.7350, 85.3290);
        assert!(a.distance_km(&a).abs() < 1e-9);
        let ab = a.distance_km(&b);
        let ba = b.distance_km(&a);
        assert!((ab - ba).abs() < 1e-9);
        // Roughly two kilometres north of the city centre.
        assert!(ab > 1.5 && ab < 2.5, "unexpected distance {ab}");
    }

    #[test]
    fn antipodal_distance_is_half_the_circumference() {
        let pairs = [
            (Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0)),
            (Coordinates::KATHMANDU, Coordinates::new(-27.7172, 85.3240 - 180.0)),
            (Coordinates::new(90.0, 0.0), Coordinates::new(-90.0, 0.0)),
        ];
        let half = std::f64::consts::PI * 6371.0;
        for (a, b) in pairs {
            let d = a.distance_km(&b);
            assert!(d.is_finite(), "distance between {a:?} and {b:?} is {d}");
            assert!((d - half).abs() < 1.0, "unexpected distance {d}");
        }
    }

    #[test]
    fn facility_kind_from_key() {
        assert_eq!(FacilityKind::from_key("Clinic"), Some(FacilityKind::Clinic));
        assert_eq!(FacilityKind::from_key("all"), None);
    }

    #[test]
    fn emergency_line_renders_locale_digits() {
        let line = EmergencyLine {
            key: "ambulance".to_string(),
            name: Localized::text("Call Ambulance", "एम्बुलेन्स कल गर्नुहोस्"),
            number: "102".to_string(),
        };
        assert_eq!(line.display_number(Locale::En), "102");
        assert_eq!(line.display_number(Locale::Ne), "१०२");
    }

    // ── SahayakError display messages ────────────────────────────────────────

    #[test]
    fn error_invalid_input_display() {
        let err = SahayakError::InvalidInput {
            reason: "select at least one symptom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("at least one symptom"));
    }

    #[test]
    fn error_unknown_symptom_display() {
        let err = SahayakError::UnknownSymptom {
            id: "purple-spots".to_string(),
        };
        assert!(err.to_string().contains("purple-spots"));
    }

    #[test]
    fn error_not_found_display() {
        let err = SahayakError::NotFound {
            kind: "reminder".to_string(),
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "reminder '42' not found");
    }

    #[test]
    fn error_superseded_display() {
        let err = SahayakError::Superseded {
            operation: "analysis".to_string(),
        };
        assert!(err.to_string().contains("analysis request superseded"));
    }
}
