//! Crop prediction service
//!
//! Turns one form submission into a `PredictionOutcome`. Nothing escapes this
//! boundary as an error: bad input becomes `InvalidInput`, pipeline failures
//! are logged and become `ProcessingFailed`.

use shared::{validate_crop_form, CropForm, PredictionOutcome};

use crate::inference::CropPipeline;

/// Prediction service wrapping the loaded inference pipeline
#[derive(Clone)]
pub struct PredictionService {
    pipeline: CropPipeline,
}

impl PredictionService {
    pub fn new(pipeline: CropPipeline) -> Self {
        Self { pipeline }
    }

    /// Validate the form, then scale, classify and map the label
    pub fn predict(&self, form: &CropForm) -> PredictionOutcome {
        let features = match validate_crop_form(form) {
            Ok(features) => features,
            Err(e) => {
                tracing::debug!("Rejected form input: {}", e);
                return PredictionOutcome::InvalidInput;
            }
        };

        match self.pipeline.run(&features) {
            Ok(label) => {
                let outcome = PredictionOutcome::from_label(label);
                match outcome {
                    PredictionOutcome::Recommended { crop } => {
                        tracing::debug!("Recommended {} (label {})", crop, label);
                    }
                    _ => {
                        tracing::warn!("Classifier returned unknown crop code {}", label);
                    }
                }
                outcome
            }
            Err(e) => {
                tracing::error!("Error during prediction: {} (input {:?})", e, features);
                PredictionOutcome::ProcessingFailed
            }
        }
    }
}
