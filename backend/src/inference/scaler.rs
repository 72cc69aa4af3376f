//! Fitted min-max feature scaler

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::{FeatureVector, ScaledFeatures, FEATURE_COUNT};

use super::{artifact, FeatureScaler};
use crate::error::{ArtifactError, InferenceError};

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// On-disk form of a fitted scaler.
///
/// A fitted scikit-learn `MinMaxScaler` exports as its `data_min_`,
/// `data_max_` and `feature_range` attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Per-feature minimum seen during training
    pub data_min: Vec<f64>,
    /// Per-feature maximum seen during training
    pub data_max: Vec<f64>,
    /// Target range, `[0, 1]` unless stated otherwise
    #[serde(default = "default_feature_range")]
    pub feature_range: (f64, f64),
}

/// Min-max scaler with bounds fixed at training time.
///
/// Bounds are checked when the scaler is built, so `transform` never
/// divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    data_min: [f64; FEATURE_COUNT],
    data_max: [f64; FEATURE_COUNT],
    range_min: f64,
    range_max: f64,
}

impl MinMaxScaler {
    /// Scaler mapping `data_min..=data_max` onto `[0, 1]`
    pub fn new(
        data_min: [f64; FEATURE_COUNT],
        data_max: [f64; FEATURE_COUNT],
    ) -> Result<Self, String> {
        Self::from_params(MinMaxScalerParams {
            data_min: data_min.to_vec(),
            data_max: data_max.to_vec(),
            feature_range: default_feature_range(),
        })
    }

    /// Load a scaler artifact. Any problem with the file is an `ArtifactError`.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let params: MinMaxScalerParams = artifact::read_json(path)?;
        Self::from_params(params).map_err(|reason| ArtifactError::invalid(path, reason))
    }

    /// Validate fitted parameters
    pub fn from_params(params: MinMaxScalerParams) -> Result<Self, String> {
        let data_min = to_bounds("data_min", &params.data_min)?;
        let data_max = to_bounds("data_max", &params.data_max)?;

        for index in 0..FEATURE_COUNT {
            if data_max[index] <= data_min[index] {
                return Err(format!(
                    "feature {} has an empty range (min {}, max {})",
                    index, data_min[index], data_max[index]
                ));
            }
        }

        let (range_min, range_max) = params.feature_range;
        if !range_min.is_finite() || !range_max.is_finite() || range_max <= range_min {
            return Err(format!(
                "feature_range ({}, {}) must be finite and increasing",
                range_min, range_max
            ));
        }

        Ok(Self {
            data_min,
            data_max,
            range_min,
            range_max,
        })
    }

    pub fn data_min(&self) -> &[f64; FEATURE_COUNT] {
        &self.data_min
    }

    pub fn data_max(&self) -> &[f64; FEATURE_COUNT] {
        &self.data_max
    }
}

fn to_bounds(name: &str, values: &[f64]) -> Result<[f64; FEATURE_COUNT], String> {
    let bounds: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
        format!(
            "{} has {} values, expected {}",
            name,
            values.len(),
            FEATURE_COUNT
        )
    })?;
    if let Some(index) = bounds.iter().position(|v| !v.is_finite()) {
        return Err(format!("{}[{}] is not finite", name, index));
    }
    Ok(bounds)
}

impl FeatureScaler for MinMaxScaler {
    fn transform(&self, features: &FeatureVector) -> Result<ScaledFeatures, InferenceError> {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (index, value) in features.values().iter().enumerate() {
            let unit = (value - self.data_min[index]) / (self.data_max[index] - self.data_min[index]);
            let value = self.range_min + unit * (self.range_max - self.range_min);
            // Extreme inputs can overflow even with valid bounds
            if !value.is_finite() {
                return Err(InferenceError::NonFiniteScaledValue { index, value });
            }
            scaled[index] = value;
        }
        Ok(ScaledFeatures::new(scaled))
    }
}
