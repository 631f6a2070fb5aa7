//! # sahayak-verify
//!
//! Match report verification for the Sahayak health assistant.
//!
//! [`SchemaReportVerifier`] implements
//! [`sahayak_core::traits::ReportVerifier`]. [`standard_schema`] is the schema
//! the assistant checks every report against: at most three results, every
//! probability in 0..=100, highest first, no duplicates.
//!
//! ```rust,ignore
//! use sahayak_verify::{standard_schema, SchemaReportVerifier};
//!
//! let pipeline = AnalysisPipeline::new(
//!     Box::new(matcher),
//!     Box::new(SchemaReportVerifier::new()),
//!     standard_schema(),
//!     &symptoms,
//!     latency,
//! );
//! ```

pub mod engine;

pub use engine::{standard_schema, SchemaReportVerifier};
