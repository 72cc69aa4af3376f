//! Validation of untrusted form input
//!
//! Values must parse as numbers. No range checks are applied: the model
//! accepts any finite measurement.

use thiserror::Error;

use crate::models::CropForm;
use crate::types::{Feature, FeatureVector, FEATURE_COUNT};

/// Why a single form field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is missing")]
    Missing(Feature),

    #[error("{0} is not a number")]
    NotANumber(Feature),

    #[error("{0} must be a finite number")]
    NotFinite(Feature),
}

/// Parse one measurement. Surrounding whitespace is ignored.
///
/// NaN and infinities parse but are rejected: the scaler and classifier
/// cannot order them against their bounds and thresholds.
pub fn parse_measurement(feature: Feature, raw: Option<&str>) -> Result<f64, FieldError> {
    let raw = raw.ok_or(FieldError::Missing(feature))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::NotANumber(feature))?;
    if !value.is_finite() {
        return Err(FieldError::NotFinite(feature));
    }
    Ok(value)
}

/// Parse all seven fields into a feature vector, stopping at the first bad one
pub fn validate_crop_form(form: &CropForm) -> Result<FeatureVector, FieldError> {
    let mut values = [0.0; FEATURE_COUNT];
    for feature in Feature::ALL {
        values[feature.index()] = parse_measurement(feature, form.field(feature))?;
    }
    Ok(FeatureVector::new(values))
}
