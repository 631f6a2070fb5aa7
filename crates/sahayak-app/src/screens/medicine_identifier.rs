//! Medicine identifier screen state.

use std::sync::Arc;

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    locale::Locale,
    medicine::{ImagePayload, Medicine},
};
use sahayak_core::RecognitionPipeline;

use crate::strings::t;

#[derive(Debug, Clone, Default)]
pub enum RecognitionState {
    #[default]
    Idle,
    Analyzing,
    Identified(Medicine),
    Failed(String),
}

pub struct MedicineIdentifierScreen {
    pipeline: Arc<RecognitionPipeline>,
    image_name: Option<String>,
    state: RecognitionState,
}

impl MedicineIdentifierScreen {
    pub fn new(pipeline: Arc<RecognitionPipeline>) -> Self {
        Self {
            pipeline,
            image_name: None,
            state: RecognitionState::Idle,
        }
    }

    pub fn pipeline(&self) -> Arc<RecognitionPipeline> {
        Arc::clone(&self.pipeline)
    }

    /// File name of the last submitted image.
    pub fn image_name(&self) -> Option<&str> {
        self.image_name.as_deref()
    }

    pub fn state(&self) -> &RecognitionState {
        &self.state
    }

    /// Mark the screen as waiting on a recognition started elsewhere. A new
    /// image replaces the previous result.
    pub fn begin_identification(&mut self, image: &ImagePayload) -> SahayakResult<()> {
        if image.is_empty() {
            return Err(SahayakError::InvalidInput {
                reason: "upload or take a picture of the medicine".to_string(),
            });
        }
        self.image_name = Some(image.file_name.clone());
        self.state = RecognitionState::Analyzing;
        Ok(())
    }

    pub fn apply_identification(&mut self, outcome: &SahayakResult<Medicine>) {
        match outcome {
            Ok(medicine) => self.state = RecognitionState::Identified(medicine.clone()),
            Err(SahayakError::Superseded { .. }) => {}
            Err(e) => self.state = RecognitionState::Failed(e.to_string()),
        }
    }

    pub async fn identify(&mut self, image: ImagePayload) -> SahayakResult<Medicine> {
        self.begin_identification(&image)?;
        let outcome = self.pipeline.identify(&image).await;
        self.apply_identification(&outcome);
        outcome
    }

    pub fn reset(&mut self) {
        self.pipeline.cancel();
        self.image_name = None;
        self.state = RecognitionState::Idle;
    }

    /// The identified medicine as labelled sections in `locale`, or `None`
    /// when nothing has been identified.
    pub fn details(&self, locale: Locale) -> Option<Vec<(&'static str, Vec<String>)>> {
        let RecognitionState::Identified(m) = &self.state else {
            return None;
        };
        Some(vec![
            (t(locale, "medicine.name"), vec![m.name.get(locale).clone()]),
            (t(locale, "medicine.generic_name"), vec![m.generic_name.get(locale).clone()]),
            (t(locale, "medicine.uses"), m.uses.get(locale).clone()),
            (t(locale, "medicine.dosage"), vec![m.dosage.get(locale).clone()]),
            (t(locale, "medicine.side_effects"), m.side_effects.get(locale).clone()),
            (t(locale, "medicine.warnings"), m.warnings.get(locale).clone()),
        ])
    }
}
