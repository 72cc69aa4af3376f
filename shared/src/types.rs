//! Feature vector types shared by the form layer and the inference pipeline

/// Number of measurements the model is trained on
pub const FEATURE_COUNT: usize = 7;

/// Soil and climate measurements, in the order the model expects them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl Feature {
    /// All features in model input order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Nitrogen,
        Feature::Phosphorus,
        Feature::Potassium,
        Feature::Temperature,
        Feature::Humidity,
        Feature::Ph,
        Feature::Rainfall,
    ];

    /// Position of this feature in the model input vector
    pub fn index(&self) -> usize {
        match self {
            Feature::Nitrogen => 0,
            Feature::Phosphorus => 1,
            Feature::Potassium => 2,
            Feature::Temperature => 3,
            Feature::Humidity => 4,
            Feature::Ph => 5,
            Feature::Rainfall => 6,
        }
    }

    /// Name of the HTML form field carrying this feature.
    ///
    /// "Phosporus" is misspelled on purpose: existing forms post it that way.
    pub fn form_field(&self) -> &'static str {
        match self {
            Feature::Nitrogen => "Nitrogen",
            Feature::Phosphorus => "Phosporus",
            Feature::Potassium => "Potassium",
            Feature::Temperature => "Temperature",
            Feature::Humidity => "Humidity",
            Feature::Ph => "Ph",
            Feature::Rainfall => "Rainfall",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Nitrogen => write!(f, "Nitrogen"),
            Feature::Phosphorus => write!(f, "Phosphorus"),
            Feature::Potassium => write!(f, "Potassium"),
            Feature::Temperature => write!(f, "Temperature"),
            Feature::Humidity => write!(f, "Humidity"),
            Feature::Ph => write!(f, "pH"),
            Feature::Rainfall => write!(f, "Rainfall"),
        }
    }
}

/// Raw measurements as submitted by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// Measurements after min-max scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFeatures([f64; FEATURE_COUNT]);

impl ScaledFeatures {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}
