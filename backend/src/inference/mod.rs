//! Inference pipeline: min-max scaling followed by crop classification
//!
//! Both stages sit behind capability traits so the request path only sees
//! `transform` and `predict`. The fitted artifacts are loaded once at startup
//! and shared read-only between requests.

pub mod artifact;
pub mod classifier;
pub mod scaler;

use std::sync::Arc;

use serde::Serialize;
use shared::{FeatureVector, ScaledFeatures};

use crate::config::ArtifactConfig;
use crate::error::{ArtifactError, InferenceError};

pub use classifier::TreeEnsembleClassifier;
pub use scaler::MinMaxScaler;

/// Maps raw measurements onto the range the classifier was trained on
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<ScaledFeatures, InferenceError>;
}

/// Maps scaled measurements to a raw crop label
pub trait CropClassifier: Send + Sync {
    fn predict(&self, features: &ScaledFeatures) -> Result<i64, InferenceError>;

    /// Shape of the loaded model, for health reporting
    fn summary(&self) -> ClassifierSummary {
        ClassifierSummary::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassifierSummary {
    pub classes: usize,
    pub estimators: usize,
}

/// Scaler and classifier wired together
#[derive(Clone)]
pub struct CropPipeline {
    scaler: Arc<dyn FeatureScaler>,
    classifier: Arc<dyn CropClassifier>,
}

impl CropPipeline {
    pub fn new(scaler: Arc<dyn FeatureScaler>, classifier: Arc<dyn CropClassifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Load both artifacts. Either one failing aborts the load.
    pub fn load(artifacts: &ArtifactConfig) -> Result<Self, ArtifactError> {
        let scaler = MinMaxScaler::load(&artifacts.scaler_path)?;
        tracing::debug!("Loaded scaler from {}", artifacts.scaler_path.display());

        let classifier = TreeEnsembleClassifier::load(&artifacts.model_path)?;
        tracing::debug!(
            "Loaded classifier from {} ({} classes, {} estimators)",
            artifacts.model_path.display(),
            classifier.classes().len(),
            classifier.n_estimators()
        );

        Ok(Self::new(Arc::new(scaler), Arc::new(classifier)))
    }

    /// Scale then classify one feature vector
    pub fn run(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict(&scaled)
    }

    pub fn summary(&self) -> ClassifierSummary {
        self.classifier.summary()
    }
}
