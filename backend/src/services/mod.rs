//! Business logic services for the Crop Recommendation service

pub mod prediction;

pub use prediction::PredictionService;
