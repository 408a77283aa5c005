//! Domain layer for marketlens
//!
//! This module contains the scoring domain models, the read-only ports the
//! services depend on, and reference-data errors.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ReferenceDataError, ReferenceResult};
