//! Prediction outcomes and the messages shown for them

use super::crop::Crop;

/// Shown when any form field is missing or not a finite number
pub const INVALID_INPUT_MESSAGE: &str = "Error: Please enter valid numbers for all input fields.";

/// Shown when scaling or classification fails
pub const PROCESSING_FAILED_MESSAGE: &str =
    "Error: Could not process the prediction. Please check server logs.";

/// Result of handling one form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    /// The classifier returned a known crop label
    Recommended { crop: Crop },
    /// The classifier returned a label missing from the crop table
    UnknownCode { code: i64 },
    /// At least one form field failed to parse
    InvalidInput,
    /// Scaling or classification failed
    ProcessingFailed,
}

impl PredictionOutcome {
    /// Map a raw classifier label to an outcome
    pub fn from_label(code: i64) -> Self {
        match Crop::from_code(code) {
            Some(crop) => PredictionOutcome::Recommended { crop },
            None => PredictionOutcome::UnknownCode { code },
        }
    }

    /// Text rendered into the result area of the page
    pub fn message(&self) -> String {
        match self {
            PredictionOutcome::Recommended { crop } => format!(
                "Prediction: {} is the best crop to cultivate in these conditions.",
                crop
            ),
            PredictionOutcome::UnknownCode { code } => format!(
                "Prediction: Sorry, the model returned an unknown crop code ({}).",
                code
            ),
            PredictionOutcome::InvalidInput => INVALID_INPUT_MESSAGE.to_string(),
            PredictionOutcome::ProcessingFailed => PROCESSING_FAILED_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
