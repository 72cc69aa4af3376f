//! HTTP request handlers

pub mod health;
pub mod prediction;

pub use health::*;
pub use prediction::*;
