//! # sahayak-catalog
//!
//! The bundled reference data of the Sahayak health assistant, plus the
//! offline medicine recognizer.
//!
//! Every function here returns fresh owned data; callers keep what they need.
//! The data is static for the life of the process.
//!
//! | Function | Contents |
//! |---|---|
//! | [`symptoms`] | 54 symptoms in eight categories |
//! | [`conditions`] | 13 conditions with symptom patterns and specialists |
//! | [`medicines`] | 5 medicine reference sheets |
//! | [`facilities`] | 6 hospitals, clinics and pharmacies in Kathmandu |
//! | [`articles`] | 5 health-awareness articles |
//! | [`emergency_lines`], [`emergency_instructions`], [`emergency_hospitals`] | emergency screen data |
//! | [`seed_reminders`] | 3 sample reminders |

pub mod articles;
pub mod conditions;
pub mod emergency;
pub mod facilities;
pub mod medicines;
pub mod recognizer;
pub mod reminders;
pub mod symptoms;

pub use articles::articles;
pub use conditions::conditions;
pub use emergency::{emergency_hospitals, emergency_instructions, emergency_lines};
pub use facilities::facilities;
pub use medicines::medicines;
pub use recognizer::HintRecognizer;
pub use reminders::seed_reminders;
pub use symptoms::symptoms;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, time::Duration};

    use sahayak_contracts::{
        error::SahayakError,
        medicine::ImagePayload,
        symptom::{SelectionSet, SymptomCategory, SymptomId},
    };
    use sahayak_core::{traits::ImageRecognizer, AnalysisPipeline, OverlapMatcher, ScoringWeights};
    use sahayak_verify::{standard_schema, SchemaReportVerifier};

    use super::*;

    // ── Data integrity ────────────────────────────────────────────────────────

    #[test]
    fn symptom_ids_are_unique_and_every_category_is_used() {
        let all = symptoms();
        let ids: HashSet<_> = all.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), all.len());

        for category in SymptomCategory::ALL {
            assert!(all.iter().any(|s| s.category == category), "{category:?} has no symptoms");
        }
    }

    #[test]
    fn condition_patterns_reference_known_symptoms() {
        let known: HashSet<SymptomId> = symptoms().into_iter().map(|s| s.id).collect();
        for condition in conditions() {
            assert!(!condition.pattern.is_empty(), "{} has no pattern", condition.key);
            assert!(condition.base_probability <= 100);
            assert!(!condition.specialists.is_empty());
            for entry in &condition.pattern {
                assert!(known.contains(&entry.symptom), "{} references {}", condition.key, entry.symptom);
                assert!(entry.weight > 0);
            }
            assert_eq!(condition.recommendations.en.len(), condition.recommendations.ne.len());
        }
    }

    #[test]
    fn localized_lists_line_up() {
        for m in medicines() {
            assert_eq!(m.uses.en.len(), m.uses.ne.len(), "{}", m.key);
            assert_eq!(m.side_effects.en.len(), m.side_effects.ne.len(), "{}", m.key);
            assert_eq!(m.warnings.en.len(), m.warnings.ne.len(), "{}", m.key);
        }
        let steps = emergency_instructions();
        assert_eq!(steps.en.len(), 5);
        assert_eq!(steps.ne.len(), 5);
    }

    #[test]
    fn emergency_numbers_are_ascii() {
        let numbers: Vec<_> = emergency_lines().into_iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec!["102", "100", "101", "103"]);
    }

    #[test]
    fn seed_reminders_are_enabled_with_unique_ids() {
        let seeds = seed_reminders();
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|r| r.enabled));
        let ids: HashSet<_> = seeds.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
    }

    // ── Recognizer ────────────────────────────────────────────────────────────

    #[test]
    fn recognizer_matches_brand_or_generic_name() {
        let recognizer = HintRecognizer::new(medicines());

        let by_brand = recognizer.recognize(&ImagePayload::new("Paracetamol_strip.jpg", vec![1])).unwrap();
        assert_eq!(by_brand.key, "paracetamol-500");

        let by_generic = recognizer.recognize(&ImagePayload::new("IMG acetaminophen.png", vec![1])).unwrap();
        assert_eq!(by_generic.key, "paracetamol-500");

        let spaced_generic = recognizer
            .recognize(&ImagePayload::new("acetylsalicylic-acid.jpeg", vec![1]))
            .unwrap();
        assert_eq!(spaced_generic.key, "aspirin-75");
    }

    #[test]
    fn recognizer_rejects_unknown_labels() {
        let recognizer = HintRecognizer::new(medicines());
        let err = recognizer.recognize(&ImagePayload::new("IMG_0042.jpg", vec![1])).unwrap_err();
        assert!(matches!(err, SahayakError::RecognitionFailure { .. }));
    }

    // ── Matching against the bundled catalog ──────────────────────────────────

    fn matcher() -> OverlapMatcher {
        OverlapMatcher::new(conditions(), ScoringWeights::default()).unwrap()
    }

    #[test]
    fn cold_symptoms_rank_common_cold_first() {
        use sahayak_core::traits::ConditionMatcher;

        let selection: SelectionSet = ["fever", "cough", "sore-throat"].into_iter().collect();
        let ranked = matcher().rank(&selection).unwrap();

        let summary: Vec<_> = ranked.iter().map(|r| (r.condition.key.as_str(), r.probability)).collect();
        assert_eq!(
            summary,
            vec![("common-cold", 48), ("seasonal-flu", 42), ("urinary-tract-infection", 14)]
        );
    }

    #[test]
    fn urinary_symptoms_rank_uti_first() {
        use sahayak_core::traits::ConditionMatcher;

        let selection: SelectionSet = ["painful-urination", "frequent-urination"].into_iter().collect();
        let ranked = matcher().rank(&selection).unwrap();

        assert_eq!(ranked.len(), 1, "no other condition shares these symptoms");
        assert_eq!(ranked[0].condition.key, "urinary-tract-infection");
    }

    #[test]
    fn every_symptom_on_its_own_reaches_a_condition() {
        use sahayak_core::traits::ConditionMatcher;

        let matcher = matcher();
        for symptom in symptoms() {
            let selection: SelectionSet = [symptom.id.as_str()].into_iter().collect();
            let ranked = matcher.rank(&selection).unwrap();
            assert!(!ranked.is_empty(), "{} matches no condition", symptom.id);
        }
    }

    #[test]
    fn chest_pain_ranks_heart_problem_first() {
        use sahayak_core::traits::ConditionMatcher;

        let selection: SelectionSet = ["chest-pain"].into_iter().collect();
        let ranked = matcher().rank(&selection).unwrap();
        let keys: Vec<_> = ranked.iter().map(|r| r.condition.key.as_str()).collect();
        assert_eq!(keys, vec!["heart-rhythm-problem", "acid-reflux"]);
    }

    #[tokio::test(start_paused = true)]
    async fn full_pipeline_produces_verified_report() {
        let pipeline = AnalysisPipeline::new(
            Box::new(matcher()),
            Box::new(SchemaReportVerifier::new()),
            standard_schema(),
            &symptoms(),
            Duration::from_secs(2),
        );

        let selection: SelectionSet = ["headache", "nausea", "blurred-vision"].into_iter().collect();
        let report = pipeline.analyze(&selection).await.unwrap();

        assert_eq!(report.condition_keys()[0], "migraine");
        assert!(report.results.len() <= 3);
    }
}
