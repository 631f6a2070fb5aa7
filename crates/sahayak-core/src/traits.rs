//! Collaborator traits at the edges of the assistant.
//!
//! - `ConditionMatcher`: symptom-to-condition inference
//! - `ImageRecognizer` : medicine identification from a photo
//! - `ReportVerifier`  : checks a match report before it is displayed
//! - `LocationProvider`: device geolocation
//! - `Dialer`          : hands a number to the platform dialer
//! - `KeyValueStore`   : optional persistence behind get/put/delete
//!
//! The pipelines in this crate own boxed trait objects and call them in a
//! fixed order. Local stand-ins live in `sahayak-catalog` and `sahayak-app`;
//! a deployment swaps in real services without touching the screens.

use sahayak_contracts::{
    condition::{MatchReport, RankedCondition},
    error::SahayakResult,
    facility::Coordinates,
    medicine::{ImagePayload, Medicine},
    symptom::SelectionSet,
    verify::{ReportSchema, VerificationReport},
};

/// Ranks conditions by their relevance to a set of symptoms.
pub trait ConditionMatcher: Send + Sync {
    /// Score every known condition against `selection` and return them
    /// highest probability first.
    ///
    /// Callers guarantee `selection` is non-empty and contains only catalog
    /// ids. Implementations must be pure: the same selection yields the same
    /// ranking. Truncation to `MAX_RESULTS` is the implementation's job.
    fn rank(&self, selection: &SelectionSet) -> SahayakResult<Vec<RankedCondition>>;
}

/// Identifies a medicine from a photo.
pub trait ImageRecognizer: Send + Sync {
    /// Return the medicine shown in `image`, or
    /// `SahayakError::RecognitionFailure` when it cannot be classified.
    fn recognize(&self, image: &ImagePayload) -> SahayakResult<Medicine>;
}

/// The last gate before a match report reaches a screen.
pub trait ReportVerifier: Send + Sync {
    /// Check `report` against `schema` and collect every failure.
    fn verify(&self, report: &MatchReport, schema: &ReportSchema) -> SahayakResult<VerificationReport>;
}

/// Device position source.
pub trait LocationProvider: Send + Sync {
    /// Current position, or `SahayakError::LocationUnavailable` on denial or
    /// timeout.
    fn current_position(&self) -> SahayakResult<Coordinates>;
}

/// Platform telephony.
pub trait Dialer: Send + Sync {
    /// Dispatch a `tel:` URI. The number part is always ASCII digits.
    fn dial(&self, tel_uri: &str) -> SahayakResult<()>;
}

/// A narrow string key-value store.
///
/// Nothing in the assistant requires persistence; this is the seam a
/// deployment would use to keep reminders or preferences across restarts.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> SahayakResult<Option<String>>;

    fn put(&self, key: &str, value: String) -> SahayakResult<()>;

    /// Remove `key`. Returns true if it was present.
    fn delete(&self, key: &str) -> SahayakResult<bool>;
}
