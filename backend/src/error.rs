//! Error handling for the Crop Recommendation service
//!
//! Per-request failures never reach the client as raw errors: validation and
//! inference problems are turned into page messages by the prediction
//! service. `AppError` covers what is left (the page itself failing to render).

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure to load a persisted model artifact. Fatal at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl ArtifactError {
    pub fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ArtifactError::Invalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failure while scaling or classifying a single request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("scaled value for feature {index} is not finite ({value})")]
    NonFiniteScaledValue { index: usize, value: f64 },

    #[error("classifier input for feature {index} is not a finite f32 ({value})")]
    NonFiniteInput { index: usize, value: f64 },

    #[error("classifier produced no class probabilities")]
    EmptyVote,
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal server error occurred",
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
