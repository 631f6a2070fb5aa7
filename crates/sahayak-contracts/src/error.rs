//! Error types shared by every Sahayak crate.
//!
//! All fallible operations return `SahayakResult<T>`. Most variants degrade to
//! an empty or default screen state at the UI layer rather than aborting.

use thiserror::Error;

/// The unified error type for the assistant.
#[derive(Debug, Error)]
pub enum SahayakError {
    /// The caller submitted input that can never succeed (e.g. an empty
    /// symptom selection or an empty image).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A symptom identifier that is not in the catalog reached the analysis
    /// pipeline.
    #[error("unknown symptom '{id}'")]
    UnknownSymptom { id: String },

    /// The image recognizer could not classify the submitted image.
    #[error("recognition failed: {reason}")]
    RecognitionFailure { reason: String },

    /// Device geolocation was denied or timed out.
    ///
    /// Screens handle this by falling back to the default coordinates; it is
    /// never shown to the user.
    #[error("location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    /// A record looked up by identifier does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: String, id: String },

    /// A newer request on the same gate replaced this one before it finished.
    #[error("{operation} request superseded by a newer request")]
    Superseded { operation: String },

    /// A match report failed its structural or semantic checks.
    #[error("result verification failed: {reason}")]
    VerificationFailed { reason: String },

    /// A configuration value is missing or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The key-value store could not read or write, or held unreadable data.
    #[error("storage failure: {reason}")]
    StorageFailure { reason: String },

    /// A screen was requested while nobody is signed in.
    #[error("no user is signed in")]
    NotSignedIn,
}

/// Convenience alias used throughout the Sahayak crates.
pub type SahayakResult<T> = Result<T, SahayakError>;
