//! Reference data infrastructure
//!
//! Benchmark tiers, industry weights and psychology weights:
//! - Built-in tables
//! - YAML/JSON file loading
//! - Load-once global catalog

mod builtin;
pub mod catalog;
pub mod loader;

pub use catalog::{ReferenceData, ReferenceFile};
pub use loader::ReferenceLoader;
