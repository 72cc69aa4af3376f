//! Shared types and models for the Crop Recommendation service
//!
//! This crate holds the pure domain pieces: the feature vector, the crop
//! label map, prediction outcomes and form validation. It does no I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
