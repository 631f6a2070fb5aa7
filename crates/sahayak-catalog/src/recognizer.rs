//! Offline stand-in for a vision model.
//!
//! `HintRecognizer` identifies a medicine from the name of the uploaded file:
//! `paracetamol_strip.jpg` or `IMG-Acetaminophen.png` both resolve to
//! Paracetamol 500mg. Anything else is a `RecognitionFailure`.

use tracing::debug;

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    medicine::{ImagePayload, Medicine},
};
use sahayak_core::traits::ImageRecognizer;

pub struct HintRecognizer {
    /// (hint, medicine) pairs; hints are lowercase ASCII alphanumerics.
    hints: Vec<(String, Medicine)>,
}

impl HintRecognizer {
    /// Build hints from each medicine's brand name (first word) and generic
    /// name.
    pub fn new(medicines: Vec<Medicine>) -> Self {
        let mut hints = Vec::new();
        for medicine in medicines {
            let brand = medicine.name.en.split_whitespace().next().map(normalize).unwrap_or_default();
            let generic = normalize(&medicine.generic_name.en);
            for hint in [brand, generic] {
                if !hint.is_empty() && !hints.iter().any(|(h, _): &(String, Medicine)| *h == hint) {
                    hints.push((hint, medicine.clone()));
                }
            }
        }
        Self { hints }
    }
}

impl ImageRecognizer for HintRecognizer {
    fn recognize(&self, image: &ImagePayload) -> SahayakResult<Medicine> {
        let label = normalize(&image.file_name);
        let found = self
            .hints
            .iter()
            .find(|(hint, _)| label.contains(hint.as_str()))
            .map(|(hint, medicine)| {
                debug!(file = %image.file_name, hint = %hint, "recognizer hint matched");
                medicine.clone()
            });

        found.ok_or_else(|| SahayakError::RecognitionFailure {
            reason: format!("could not identify a medicine in '{}'", image.file_name),
        })
    }
}

/// Lowercase and drop everything but ASCII letters and digits.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
