//! The symptom analysis pipeline.
//!
//! Every analysis runs the same sequence:
//!
//!   Validate → Gate → Latency → Matcher::rank → Verify → Deliver
//!
//! Validation happens before the gate is touched, so an invalid submission
//! (empty selection, unknown id) neither reaches the matcher nor cancels a
//! valid request already in flight.

use std::{collections::HashSet, time::Duration};

use chrono::Utc;
use tracing::{debug, info, warn};

use sahayak_contracts::{
    condition::MatchReport,
    error::{SahayakError, SahayakResult},
    symptom::{SelectionSet, Symptom, SymptomId},
    verify::ReportSchema,
};

use crate::{
    gate::RequestGate,
    traits::{ConditionMatcher, ReportVerifier},
};

/// Default simulated inference latency.
pub const DEFAULT_ANALYSIS_LATENCY: Duration = Duration::from_millis(2000);

/// Drives one matcher behind validation, a request gate, and a verifier.
///
/// Share one pipeline per session (behind an `Arc` when tasks are spawned) so
/// that all analyses for that session go through the same gate.
pub struct AnalysisPipeline {
    matcher: Box<dyn ConditionMatcher>,
    verifier: Box<dyn ReportVerifier>,
    schema: ReportSchema,
    known: HashSet<SymptomId>,
    latency: Duration,
    gate: RequestGate,
}

impl AnalysisPipeline {
    /// Create a pipeline that accepts the ids in `symptoms`.
    pub fn new(
        matcher: Box<dyn ConditionMatcher>,
        verifier: Box<dyn ReportVerifier>,
        schema: ReportSchema,
        symptoms: &[Symptom],
        latency: Duration,
    ) -> Self {
        Self {
            matcher,
            verifier,
            schema,
            known: symptoms.iter().map(|s| s.id.clone()).collect(),
            latency,
            gate: RequestGate::new("analysis"),
        }
    }

    /// Reject selections the matcher must never see.
    ///
    /// - empty → `InvalidInput`
    /// - any id outside the catalog → `UnknownSymptom`
    pub fn validate(&self, selection: &SelectionSet) -> SahayakResult<()> {
        if selection.is_empty() {
            return Err(SahayakError::InvalidInput {
                reason: "select at least one symptom before analysis".to_string(),
            });
        }
        if let Some(unknown) = selection.iter().find(|id| !self.known.contains(*id)) {
            return Err(SahayakError::UnknownSymptom { id: unknown.to_string() });
        }
        Ok(())
    }

    /// Analyze `selection` and return a verified, ranked report.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` / `UnknownSymptom` from validation
    /// - `Superseded` if another analysis starts before this one finishes
    /// - `VerificationFailed` if the matcher output breaks the report schema
    pub async fn analyze(&self, selection: &SelectionSet) -> SahayakResult<MatchReport> {
        if let Err(e) = self.validate(selection) {
            warn!(error = %e, "analysis request rejected");
            return Err(e);
        }

        let mut ticket = self.gate.begin();
        debug!(
            generation = ticket.id(),
            symptoms = selection.len(),
            latency_ms = self.latency.as_millis() as u64,
            "analysis waiting on simulated latency"
        );
        ticket.wait(self.latency).await?;

        let results = self.matcher.rank(selection)?;
        let report = MatchReport {
            selection: selection.to_vec(),
            results,
            generated_at: Utc::now(),
        };

        let verification = self.verifier.verify(&report, &self.schema)?;
        if !verification.passed {
            let summary = verification
                .failures
                .iter()
                .map(|f| format!("[{}] {}", f.rule_id, f.message))
                .collect::<Vec<_>>()
                .join("; ");
            warn!(failures = %summary, "match report failed verification");
            return Err(SahayakError::VerificationFailed { reason: summary });
        }

        ticket.ensure_current()?;
        info!(
            generation = ticket.id(),
            conditions = ?report.condition_keys(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Supersede the in-flight analysis, if any.
    pub fn cancel(&self) {
        self.gate.cancel();
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use sahayak_contracts::{
        condition::{Condition, MatchReport, RankedCondition},
        error::{SahayakError, SahayakResult},
        locale::Localized,
        symptom::{SelectionSet, Symptom, SymptomCategory, SymptomId},
        verify::{ReportSchema, VerificationFailure, VerificationReport},
    };

    use super::AnalysisPipeline;
    use crate::traits::{ConditionMatcher, ReportVerifier};

    const LATENCY: Duration = Duration::from_secs(2);

    // ── Mock helpers ─────────────────────────────────────────────────────────

    fn symptom(id: &str) -> Symptom {
        Symptom {
            id: SymptomId::new(id),
            label: Localized::text(id, id),
            category: SymptomCategory::General,
        }
    }

    fn condition(key: &str) -> Condition {
        Condition {
            key: key.to_string(),
            name: Localized::text(key, key),
            base_probability: 50,
            description: Localized::text("", ""),
            recommendations: Localized::lines(&[], &[]),
            specialists: vec![],
            pattern: vec![],
        }
    }

    fn empty_schema() -> ReportSchema {
        ReportSchema {
            schema_id: "test-schema-v1".to_string(),
            json_schema: serde_json::Value::Null,
            rules: vec![],
        }
    }

    /// A matcher that counts calls and echoes one condition per selected id.
    struct MockMatcher {
        calls: Arc<Mutex<u32>>,
    }

    impl MockMatcher {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl ConditionMatcher for MockMatcher {
        fn rank(&self, selection: &SelectionSet) -> SahayakResult<Vec<RankedCondition>> {
            *self.calls.lock().unwrap() += 1;
            Ok(selection
                .iter()
                .map(|id| RankedCondition {
                    condition: condition(id.as_str()),
                    probability: 50,
                })
                .collect())
        }
    }

    /// A verifier that can be configured to pass or fail.
    struct MockVerifier {
        pass: bool,
    }

    impl ReportVerifier for MockVerifier {
        fn verify(&self, _report: &MatchReport, _schema: &ReportSchema) -> SahayakResult<VerificationReport> {
            if self.pass {
                Ok(VerificationReport {
                    passed: true,
                    failures: vec![],
                })
            } else {
                Ok(VerificationReport {
                    passed: false,
                    failures: vec![VerificationFailure {
                        rule_id: "max-entries".to_string(),
                        message: "report has 5 entries".to_string(),
                    }],
                })
            }
        }
    }

    fn pipeline(matcher: MockMatcher, pass: bool) -> AnalysisPipeline {
        AnalysisPipeline::new(
            Box::new(matcher),
            Box::new(MockVerifier { pass }),
            empty_schema(),
            &[symptom("fever"), symptom("cough"), symptom("rash")],
            LATENCY,
        )
    }

    // ── Test cases ───────────────────────────────────────────────────────────

    /// An empty selection is rejected and the matcher is never invoked.
    #[tokio::test(start_paused = true)]
    async fn empty_selection_never_reaches_matcher() {
        let matcher = MockMatcher::new();
        let calls = matcher.calls.clone();
        let p = pipeline(matcher, true);

        let err = p.analyze(&SelectionSet::new()).await.unwrap_err();

        assert!(matches!(err, SahayakError::InvalidInput { .. }));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_symptom_is_rejected() {
        let matcher = MockMatcher::new();
        let calls = matcher.calls.clone();
        let p = pipeline(matcher, true);

        let selection: SelectionSet = ["fever", "purple-spots"].into_iter().collect();
        let err = p.analyze(&selection).await.unwrap_err();

        match err {
            SahayakError::UnknownSymptom { id } => assert_eq!(id, "purple-spots"),
            other => panic!("expected UnknownSymptom, got {other:?}"),
        }
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn analysis_takes_at_least_the_configured_latency() {
        let p = pipeline(MockMatcher::new(), true);
        let selection: SelectionSet = ["fever"].into_iter().collect();

        let early = tokio::time::timeout(LATENCY - Duration::from_millis(1), p.analyze(&selection)).await;
        assert!(early.is_err(), "analysis resolved before its latency elapsed");

        let started = tokio::time::Instant::now();
        let report = p.analyze(&selection).await.unwrap();
        assert!(started.elapsed() >= LATENCY);
        assert_eq!(report.condition_keys(), vec!["fever"]);
    }

    /// Starting a second analysis supersedes the first; only the newest
    /// result is delivered.
    #[tokio::test(start_paused = true)]
    async fn newer_analysis_supersedes_older() {
        let matcher = MockMatcher::new();
        let calls = matcher.calls.clone();
        let p = pipeline(matcher, true);

        let old: SelectionSet = ["fever"].into_iter().collect();
        let new: SelectionSet = ["cough"].into_iter().collect();

        let (old_result, new_result) = tokio::join!(p.analyze(&old), async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            p.analyze(&new).await
        });

        assert!(matches!(old_result, Err(SahayakError::Superseded { .. })));
        assert_eq!(new_result.unwrap().condition_keys(), vec!["cough"]);
        assert_eq!(*calls.lock().unwrap(), 1, "superseded request must not reach the matcher");
    }

    /// An invalid submission does not disturb an analysis already in flight.
    #[tokio::test(start_paused = true)]
    async fn invalid_submission_does_not_cancel_in_flight() {
        let p = pipeline(MockMatcher::new(), true);
        let valid: SelectionSet = ["rash"].into_iter().collect();

        let (valid_result, invalid_result) = tokio::join!(p.analyze(&valid), async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            p.analyze(&SelectionSet::new()).await
        });

        assert!(valid_result.is_ok());
        assert!(matches!(invalid_result, Err(SahayakError::InvalidInput { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_supersedes_in_flight_analysis() {
        let p = pipeline(MockMatcher::new(), true);
        let selection: SelectionSet = ["fever"].into_iter().collect();

        let (result, _) = tokio::join!(p.analyze(&selection), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            p.cancel();
        });

        assert!(matches!(result, Err(SahayakError::Superseded { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_verification_surfaces_as_error() {
        let p = pipeline(MockMatcher::new(), false);
        let selection: SelectionSet = ["fever"].into_iter().collect();

        let err = p.analyze(&selection).await.unwrap_err();
        match err {
            SahayakError::VerificationFailed { reason } => assert!(reason.contains("max-entries")),
            other => panic!("expected VerificationFailed, got {other:?}"),
        }
    }
}
