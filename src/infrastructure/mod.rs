//! Infrastructure layer module
//!
//! This module contains the adapters around the pure scoring core:
//! - Configuration management
//! - Logging infrastructure
//! - Reference data loading
//!
//! The reference catalog satisfies the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod reference;
