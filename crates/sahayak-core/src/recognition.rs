//! The medicine recognition pipeline.
//!
//! Same shape as the analysis pipeline, minus verification: reject empty
//! images, claim the gate, wait out the simulated latency, then ask the
//! injected `ImageRecognizer`.

use std::time::Duration;

use tracing::{info, warn};

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    medicine::{ImagePayload, Medicine},
};

use crate::{gate::RequestGate, traits::ImageRecognizer};

/// Default simulated recognition latency.
pub const DEFAULT_RECOGNITION_LATENCY: Duration = Duration::from_millis(2500);

pub struct RecognitionPipeline {
    recognizer: Box<dyn ImageRecognizer>,
    latency: Duration,
    gate: RequestGate,
}

impl RecognitionPipeline {
    pub fn new(recognizer: Box<dyn ImageRecognizer>, latency: Duration) -> Self {
        Self {
            recognizer,
            latency,
            gate: RequestGate::new("recognition"),
        }
    }

    /// Identify the medicine in `image`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for an empty payload
    /// - `Superseded` if another identification starts first
    /// - `RecognitionFailure` from the recognizer
    pub async fn identify(&self, image: &ImagePayload) -> SahayakResult<Medicine> {
        if image.is_empty() {
            warn!(file = %image.file_name, "empty image submitted for identification");
            return Err(SahayakError::InvalidInput {
                reason: "upload or take a picture of the medicine".to_string(),
            });
        }

        let mut ticket = self.gate.begin();
        ticket.wait(self.latency).await?;

        let medicine = self.recognizer.recognize(image);
        ticket.ensure_current()?;

        match &medicine {
            Ok(m) => info!(file = %image.file_name, medicine = %m.key, "medicine identified"),
            Err(e) => warn!(file = %image.file_name, error = %e, "medicine not recognized"),
        }
        medicine
    }

    /// Supersede the in-flight identification, if any.
    pub fn cancel(&self) {
        self.gate.cancel();
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sahayak_contracts::{
        error::{SahayakError, SahayakResult},
        locale::Localized,
        medicine::{ImagePayload, Medicine},
    };

    use super::RecognitionPipeline;
    use crate::traits::ImageRecognizer;

    /// Recognizes anything whose file name starts with "known".
    struct PrefixRecognizer;

    impl ImageRecognizer for PrefixRecognizer {
        fn recognize(&self, image: &ImagePayload) -> SahayakResult<Medicine> {
            if !image.file_name.starts_with("known") {
                return Err(SahayakError::RecognitionFailure {
                    reason: "no match".to_string(),
                });
            }
            Ok(Medicine {
                key: "test-med".to_string(),
                name: Localized::text("Test", "परीक्षण"),
                generic_name: Localized::text("Test", "परीक्षण"),
                uses: Localized::lines(&[], &[]),
                dosage: Localized::text("", ""),
                side_effects: Localized::lines(&[], &[]),
                warnings: Localized::lines(&[], &[]),
                photo_url: String::new(),
            })
        }
    }

    fn pipeline() -> RecognitionPipeline {
        RecognitionPipeline::new(Box::new(PrefixRecognizer), Duration::from_millis(2500))
    }

    #[tokio::test(start_paused = true)]
    async fn empty_image_is_invalid_input() {
        let err = pipeline()
            .identify(&ImagePayload::new("known.jpg", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, SahayakError::InvalidInput { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn recognized_image_returns_medicine() {
        let medicine = pipeline()
            .identify(&ImagePayload::new("known.jpg", vec![1, 2, 3]))
            .await
            .unwrap();
        assert_eq!(medicine.key, "test-med");
    }

    #[tokio::test(start_paused = true)]
    async fn unrecognized_image_is_recognition_failure() {
        let err = pipeline()
            .identify(&ImagePayload::new("blurry.jpg", vec![1]))
            .await
            .unwrap_err();
        assert!(matches!(err, SahayakError::RecognitionFailure { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn second_upload_supersedes_first() {
        let p = pipeline();
        let first = ImagePayload::new("known-a.jpg", vec![1]);
        let second = ImagePayload::new("known-b.jpg", vec![2]);

        let (a, b) = tokio::join!(p.identify(&first), async {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            p.identify(&second).await
        });

        assert!(matches!(a, Err(SahayakError::Superseded { .. })));
        assert!(b.is_ok());
    }
}
