//! Symptom-overlap condition matcher.
//!
//! `OverlapMatcher` scores each condition by how well its weighted symptom
//! pattern overlaps the selection:
//!
//! - coverage  = weight of pattern symptoms that were selected / total pattern weight
//! - precision = selected symptoms found in the pattern / selected symptoms
//! - relevance = weighted mean of coverage and precision
//! - probability = round(base_probability * relevance), clamped to 0..=100
//!
//! Conditions below `min_probability` or with no overlap at all are dropped.
//! The rest are stably sorted by probability, so ties keep catalog order, and
//! truncated to `MAX_RESULTS`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sahayak_contracts::{
    condition::{Condition, RankedCondition, MAX_RESULTS},
    error::{SahayakError, SahayakResult},
    symptom::SelectionSet,
};

use crate::traits::ConditionMatcher;

/// Tunables for `OverlapMatcher`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of pattern coverage in the relevance mean.
    pub coverage: f64,
    /// Weight of selection precision in the relevance mean.
    pub precision: f64,
    /// Results scoring below this are not reported.
    pub min_probability: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            coverage: 0.7,
            precision: 0.3,
            min_probability: 1,
        }
    }
}

/// Deterministic `ConditionMatcher` over an in-memory condition catalog.
#[derive(Debug, Clone)]
pub struct OverlapMatcher {
    conditions: Vec<Condition>,
    weights: ScoringWeights,
}

impl OverlapMatcher {
    /// Build a matcher over `conditions`, kept in the given (catalog) order.
    ///
    /// Fails with `ConfigError` when both weights are zero or either is
    /// negative, since relevance would be undefined.
    pub fn new(conditions: Vec<Condition>, weights: ScoringWeights) -> SahayakResult<Self> {
        if weights.coverage < 0.0 || weights.precision < 0.0 || weights.coverage + weights.precision <= 0.0 {
            return Err(SahayakError::ConfigError {
                reason: format!(
                    "scoring weights must be non-negative and not both zero (coverage {}, precision {})",
                    weights.coverage, weights.precision
                ),
            });
        }
        Ok(Self { conditions, weights })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Effective probability of `condition` for `selection`.
    ///
    /// Returns 0 when the pattern and the selection share no symptom.
    pub fn score(&self, condition: &Condition, selection: &SelectionSet) -> u8 {
        let total_weight: u32 = condition.pattern.iter().map(|e| u32::from(e.weight)).sum();
        if total_weight == 0 || selection.is_empty() {
            return 0;
        }

        let matched_weight: u32 = condition
            .pattern
            .iter()
            .filter(|e| selection.contains(&e.symptom))
            .map(|e| u32::from(e.weight))
            .sum();
        if matched_weight == 0 {
            return 0;
        }

        let explained = selection
            .iter()
            .filter(|id| condition.pattern.iter().any(|e| &e.symptom == *id))
            .count();

        let coverage = f64::from(matched_weight) / f64::from(total_weight);
        let precision = explained as f64 / selection.len() as f64;
        let ScoringWeights { coverage: wc, precision: wp, .. } = self.weights;
        let relevance = (wc * coverage + wp * precision) / (wc + wp);

        (f64::from(condition.base_probability) * relevance).round().clamp(0.0, 100.0) as u8
    }
}

impl ConditionMatcher for OverlapMatcher {
    fn rank(&self, selection: &SelectionSet) -> SahayakResult<Vec<RankedCondition>> {
        let mut ranked: Vec<RankedCondition> = self
            .conditions
            .iter()
            .filter_map(|condition| {
                let probability = self.score(condition, selection);
                debug!(condition = %condition.key, probability, "scored condition");
                (probability > 0 && probability >= self.weights.min_probability).then(|| RankedCondition {
                    condition: condition.clone(),
                    probability,
                })
            })
            .collect();

        // `sort_by` is stable: equal probabilities keep catalog order.
        ranked.sort_by(|a, b| b.probability.cmp(&a.probability));
        ranked.truncate(MAX_RESULTS);
        Ok(ranked)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use sahayak_contracts::{
        condition::{Condition, PatternEntry, MAX_RESULTS},
        error::SahayakError,
        locale::Localized,
        symptom::SelectionSet,
    };

    use super::{OverlapMatcher, ScoringWeights};
    use crate::traits::ConditionMatcher;

    fn condition(key: &str, base: u8, pattern: &[(&str, u8)]) -> Condition {
        Condition {
            key: key.to_string(),
            name: Localized::text(key, key),
            base_probability: base,
            description: Localized::text("", ""),
            recommendations: Localized::lines(&[], &[]),
            specialists: vec![],
            pattern: pattern.iter().map(|(s, w)| PatternEntry::new(s, *w)).collect(),
        }
    }

    fn matcher(conditions: Vec<Condition>) -> OverlapMatcher {
        OverlapMatcher::new(conditions, ScoringWeights::default()).unwrap()
    }

    #[test]
    fn full_overlap_scores_base_probability() {
        let m = matcher(vec![condition("cold", 85, &[("cough", 2), ("fever", 1)])]);
        let selection: SelectionSet = ["cough", "fever"].into_iter().collect();
        assert_eq!(m.score(&m.conditions()[0], &selection), 85);
    }

    #[test]
    fn partial_overlap_blends_coverage_and_precision() {
        // coverage 2/4 = 0.5, precision 1/2 = 0.5 → relevance 0.5 → 40.
        let m = matcher(vec![condition("flu", 80, &[("fever", 2), ("chills", 2)])]);
        let selection: SelectionSet = ["fever", "rash"].into_iter().collect();
        assert_eq!(m.score(&m.conditions()[0], &selection), 40);
    }

    #[test]
    fn no_overlap_is_excluded() {
        let m = matcher(vec![
            condition("cold", 85, &[("cough", 1)]),
            condition("migraine", 80, &[("headache", 1)]),
        ]);
        let selection: SelectionSet = ["cough"].into_iter().collect();
        let ranked = m.rank(&selection).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].condition.key, "cold");
    }

    #[test]
    fn results_are_sorted_descending_and_capped() {
        let m = matcher(vec![
            condition("a", 20, &[("x", 1)]),
            condition("b", 90, &[("x", 1)]),
            condition("c", 50, &[("x", 1)]),
            condition("d", 70, &[("x", 1)]),
            condition("e", 10, &[("x", 1)]),
        ]);
        let selection: SelectionSet = ["x"].into_iter().collect();
        let ranked = m.rank(&selection).unwrap();

        assert_eq!(ranked.len(), MAX_RESULTS);
        let keys: Vec<&str> = ranked.iter().map(|r| r.condition.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "d", "c"]);
        assert!(ranked.windows(2).all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let m = matcher(vec![
            condition("first", 60, &[("x", 1)]),
            condition("second", 60, &[("x", 1)]),
            condition("third", 60, &[("x", 1)]),
        ]);
        let selection: SelectionSet = ["x"].into_iter().collect();
        let keys: Vec<String> = m
            .rank(&selection)
            .unwrap()
            .into_iter()
            .map(|r| r.condition.key)
            .collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let m = matcher(vec![
            condition("cold", 85, &[("cough", 2), ("sore-throat", 3)]),
            condition("flu", 70, &[("fever", 3), ("cough", 2)]),
        ]);
        let selection: SelectionSet = ["fever", "cough", "sore-throat"].into_iter().collect();
        let first = m.rank(&selection).unwrap();
        let second = m.rank(&selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn min_probability_filters_weak_matches() {
        let weights = ScoringWeights {
            min_probability: 50,
            ..ScoringWeights::default()
        };
        let m = OverlapMatcher::new(
            vec![condition("weak", 40, &[("x", 1)]), condition("strong", 90, &[("x", 1)])],
            weights,
        )
        .unwrap();
        let selection: SelectionSet = ["x"].into_iter().collect();
        let ranked = m.rank(&selection).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].condition.key, "strong");
    }

    #[test]
    fn zero_weights_are_rejected() {
        let weights = ScoringWeights {
            coverage: 0.0,
            precision: 0.0,
            min_probability: 1,
        };
        let err = OverlapMatcher::new(vec![], weights).unwrap_err();
        assert!(matches!(err, SahayakError::ConfigError { .. }));
    }
}
