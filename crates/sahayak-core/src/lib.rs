//! # sahayak-core
//!
//! The decision logic of the Sahayak health assistant.
//!
//! This crate provides:
//! - The collaborator traits (`ConditionMatcher`, `ImageRecognizer`,
//!   `ReportVerifier`, `LocationProvider`, `Dialer`, `KeyValueStore`)
//! - `OverlapMatcher`, the symptom-overlap condition ranker
//! - `RequestGate`, which keeps at most one request in flight per operation
//! - `AnalysisPipeline` and `RecognitionPipeline`, the async entry points the
//!   screens call
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sahayak_core::{AnalysisPipeline, OverlapMatcher, ScoringWeights};
//!
//! let matcher = OverlapMatcher::new(conditions, ScoringWeights::default())?;
//! let pipeline = AnalysisPipeline::new(Box::new(matcher), verifier, schema, &symptoms, latency);
//! let report = pipeline.analyze(&selection).await?;
//! ```

pub mod analysis;
pub mod gate;
pub mod matcher;
pub mod recognition;
pub mod traits;

pub use analysis::AnalysisPipeline;
pub use gate::{RequestGate, RequestTicket};
pub use matcher::{OverlapMatcher, ScoringWeights};
pub use recognition::RecognitionPipeline;
