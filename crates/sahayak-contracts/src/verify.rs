//! Match-report verification schema and report types.
//!
//! A `MatchReport` is checked against a `ReportSchema` before it reaches a
//! screen. Only a passing `VerificationReport` lets the result be displayed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structural and semantic constraints on a serialized `MatchReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Identifier for this schema (e.g. "match-report-v1").
    pub schema_id: String,
    /// JSON Schema document for the serialized report. `Null` disables the
    /// structural phase.
    pub json_schema: Value,
    /// Ranking rules evaluated after structural validation.
    pub rules: Vec<ReportRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRule {
    /// Identifier referenced in failure messages.
    pub rule_id: String,
    pub description: String,
    pub kind: ReportRuleKind,
}

/// The ranking checks the verifier knows how to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportRuleKind {
    /// No more than `max` results.
    MaxEntries { max: usize },
    /// Every probability lies within `min..=max`.
    ProbabilityRange { min: u8, max: u8 },
    /// Probabilities never increase from one entry to the next.
    DescendingOrder,
    /// No condition key appears twice.
    UniqueConditions,
}

/// The result of running a `ReportSchema` against one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if every check passed.
    pub passed: bool,
    /// All failures collected in this run. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    pub rule_id: String,
    pub message: String,
}
