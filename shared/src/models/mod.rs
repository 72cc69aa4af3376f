//! Domain models for the Crop Recommendation service

mod crop;
mod form;
mod prediction;

pub use crop::*;
pub use form::*;
pub use prediction::*;
