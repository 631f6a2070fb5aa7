//! Schema-based match report verifier.
//!
//! `SchemaReportVerifier` implements the `ReportVerifier` trait from
//! `sahayak-core`. Verification runs in two phases:
//!
//! 1. **Structural**: the report is serialized to JSON and validated against
//!    `ReportSchema::json_schema` using the `jsonschema` crate.
//! 2. **Ranking**: each `ReportRule` in `ReportSchema::rules` is evaluated in
//!    order against the typed report.
//!
//! All failures are collected before returning.

use std::collections::HashSet;

use serde_json::json;
use tracing::{debug, warn};

use sahayak_contracts::{
    condition::{MatchReport, MAX_RESULTS},
    error::{SahayakError, SahayakResult},
    verify::{ReportRule, ReportRuleKind, ReportSchema, VerificationFailure, VerificationReport},
};
use sahayak_core::traits::ReportVerifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaReportVerifier;

impl SchemaReportVerifier {
    pub fn new() -> Self {
        Self
    }

    fn check_rule(rule: &ReportRule, report: &MatchReport) -> Option<String> {
        let probabilities = report.results.iter().map(|r| r.probability);
        match &rule.kind {
            ReportRuleKind::MaxEntries { max } => (report.results.len() > *max)
                .then(|| format!("report has {} entries, at most {max} allowed", report.results.len())),

            ReportRuleKind::ProbabilityRange { min, max } => report
                .results
                .iter()
                .find(|r| r.probability < *min || r.probability > *max)
                .map(|r| {
                    format!(
                        "condition '{}' has probability {} outside {min}..={max}",
                        r.condition.key, r.probability
                    )
                }),

            ReportRuleKind::DescendingOrder => probabilities
                .clone()
                .zip(probabilities.skip(1))
                .position(|(a, b)| b > a)
                .map(|i| format!("entry {} ranks above a higher-probability entry", i)),

            ReportRuleKind::UniqueConditions => {
                let mut seen = HashSet::new();
                report
                    .results
                    .iter()
                    .find(|r| !seen.insert(r.condition.key.as_str()))
                    .map(|r| format!("condition '{}' appears more than once", r.condition.key))
            }
        }
    }
}

impl ReportVerifier for SchemaReportVerifier {
    fn verify(&self, report: &MatchReport, schema: &ReportSchema) -> SahayakResult<VerificationReport> {
        let mut failures: Vec<VerificationFailure> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        if !schema.json_schema.is_null() {
            let payload = serde_json::to_value(report).map_err(|e| SahayakError::VerificationFailed {
                reason: format!("report could not be serialized: {e}"),
            })?;

            match jsonschema::validator_for(&schema.json_schema) {
                Ok(validator) => {
                    for error in validator.iter_errors(&payload) {
                        let message = format!("JSON Schema violation at {}: {}", error.instance_path, error);
                        warn!(schema_id = %schema.schema_id, %message, "structural validation failure");
                        failures.push(VerificationFailure {
                            rule_id: "json-schema".to_string(),
                            message,
                        });
                    }
                }
                Err(e) => {
                    let message = format!("invalid JSON Schema document: {e}");
                    warn!(schema_id = %schema.schema_id, %message, "schema compilation failure");
                    failures.push(VerificationFailure {
                        rule_id: "json-schema".to_string(),
                        message,
                    });
                }
            }
        }

        // ── Phase 2: Ranking rules ────────────────────────────────────────────
        for rule in &schema.rules {
            debug!(rule_id = %rule.rule_id, description = %rule.description, "evaluating report rule");
            if let Some(message) = Self::check_rule(rule, report) {
                warn!(rule_id = %rule.rule_id, %message, "report rule failed");
                failures.push(VerificationFailure {
                    rule_id: rule.rule_id.clone(),
                    message,
                });
            }
        }

        let passed = failures.is_empty();
        debug!(
            schema_id = %schema.schema_id,
            passed,
            failure_count = failures.len(),
            "verification complete"
        );
        Ok(VerificationReport { passed, failures })
    }
}

/// The schema every match report is checked against before display.
pub fn standard_schema() -> ReportSchema {
    let rule = |id: &str, description: &str, kind| ReportRule {
        rule_id: id.to_string(),
        description: description.to_string(),
        kind,
    };

    ReportSchema {
        schema_id: "match-report-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": ["selection", "results", "generated_at"],
            "properties": {
                "selection": {
                    "type": "array",
                    "minItems": 1,
                    "items": { "type": "string" }
                },
                "results": {
                    "type": "array",
                    "maxItems": MAX_RESULTS,
                    "items": {
                        "type": "object",
                        "required": ["condition", "probability"],
                        "properties": {
                            "probability": { "type": "integer", "minimum": 0, "maximum": 100 },
                            "condition": {
                                "type": "object",
                                "required": ["key", "name"],
                                "properties": {
                                    "key": { "type": "string", "minLength": 1 }
                                }
                            }
                        }
                    }
                },
                "generated_at": { "type": "string" }
            }
        }),
        rules: vec![
            rule(
                "max-entries",
                "no more than three conditions are shown",
                ReportRuleKind::MaxEntries { max: MAX_RESULTS },
            ),
            rule(
                "probability-range",
                "every probability is a percentage",
                ReportRuleKind::ProbabilityRange { min: 0, max: 100 },
            ),
            rule(
                "descending-order",
                "conditions are ordered by probability, highest first",
                ReportRuleKind::DescendingOrder,
            ),
            rule(
                "unique-conditions",
                "each condition appears once",
                ReportRuleKind::UniqueConditions,
            ),
        ],
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use sahayak_contracts::{
        condition::{Condition, MatchReport, RankedCondition},
        locale::Localized,
        symptom::SymptomId,
        verify::ReportSchema,
    };
    use sahayak_core::traits::ReportVerifier;

    use super::{standard_schema, SchemaReportVerifier};

    // ── Builder helpers ───────────────────────────────────────────────────────

    fn ranked(key: &str, probability: u8) -> RankedCondition {
        RankedCondition {
            condition: Condition {
                key: key.to_string(),
                name: Localized::text(key, key),
                base_probability: 80,
                description: Localized::text("", ""),
                recommendations: Localized::lines(&[], &[]),
                specialists: vec![],
                pattern: vec![],
            },
            probability,
        }
    }

    fn report(results: Vec<RankedCondition>) -> MatchReport {
        MatchReport {
            selection: vec![SymptomId::new("fever")],
            results,
            generated_at: Utc::now(),
        }
    }

    fn failed_rules(report: &MatchReport, schema: &ReportSchema) -> Vec<String> {
        SchemaReportVerifier::new()
            .verify(report, schema)
            .unwrap()
            .failures
            .into_iter()
            .map(|f| f.rule_id)
            .collect()
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn well_formed_report_passes() {
        let r = report(vec![ranked("cold", 48), ranked("flu", 42), ranked("uti", 14)]);
        let verdict = SchemaReportVerifier::new().verify(&r, &standard_schema()).unwrap();
        assert!(verdict.passed, "failures: {:?}", verdict.failures);
    }

    #[test]
    fn empty_results_pass() {
        let r = report(vec![]);
        assert!(failed_rules(&r, &standard_schema()).is_empty());
    }

    #[test]
    fn too_many_entries_fails_both_phases() {
        let r = report(vec![ranked("a", 40), ranked("b", 30), ranked("c", 20), ranked("d", 10)]);
        let failed = failed_rules(&r, &standard_schema());
        assert!(failed.contains(&"json-schema".to_string()));
        assert!(failed.contains(&"max-entries".to_string()));
    }

    #[test]
    fn ascending_order_fails() {
        let r = report(vec![ranked("a", 10), ranked("b", 30)]);
        assert_eq!(failed_rules(&r, &standard_schema()), vec!["descending-order"]);
    }

    #[test]
    fn equal_probabilities_are_still_descending() {
        let r = report(vec![ranked("a", 30), ranked("b", 30)]);
        assert!(failed_rules(&r, &standard_schema()).is_empty());
    }

    #[test]
    fn duplicate_condition_fails() {
        let r = report(vec![ranked("a", 30), ranked("a", 20)]);
        assert_eq!(failed_rules(&r, &standard_schema()), vec!["unique-conditions"]);
    }

    #[test]
    fn probability_over_100_fails() {
        let r = report(vec![ranked("a", 120)]);
        let failed = failed_rules(&r, &standard_schema());
        assert!(failed.contains(&"json-schema".to_string()));
        assert!(failed.contains(&"probability-range".to_string()));
    }

    #[test]
    fn empty_selection_fails_structural_phase() {
        let mut r = report(vec![]);
        r.selection.clear();
        assert_eq!(failed_rules(&r, &standard_schema()), vec!["json-schema"]);
    }

    #[test]
    fn null_schema_skips_structural_phase() {
        let mut schema = standard_schema();
        schema.json_schema = serde_json::Value::Null;
        let mut r = report(vec![]);
        r.selection.clear();
        assert!(failed_rules(&r, &schema).is_empty());
    }

    #[test]
    fn malformed_schema_is_reported_not_raised() {
        let schema = ReportSchema {
            schema_id: "broken".to_string(),
            json_schema: json!({ "type": "not-a-type" }),
            rules: vec![],
        };
        assert_eq!(failed_rules(&report(vec![]), &schema), vec!["json-schema"]);
    }
}
