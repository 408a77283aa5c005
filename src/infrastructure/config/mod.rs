//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment: built-in defaults, project
//! YAML files, then `MARKETLENS_*` environment overrides.

pub mod loader;

pub use loader::{CONFIG_DIR, ConfigError, ConfigLoader, ENV_PREFIX};
