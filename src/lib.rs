//! Marketlens - marketing diagnostics scoring engine
//!
//! Turns raw marketing metrics into percentile tiers and weighted 0-100
//! industry scores, combines channel scores, and predicts conversion rate
//! from a five-factor psychological profile.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, reference-data ports and errors
//! - **Service Layer** (`services`): pure scoring computations and the
//!   [`ScoringEngine`] facade
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging
//!   and reference-data loading
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use marketlens::{MetricValue, ScoringEngine};
//!
//! let engine = ScoringEngine::with_defaults();
//! let result = engine.aggregate("ecommerce", &[MetricValue::new("conversion_rate", 3.4)]);
//! assert_eq!(result.total_score, 75);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    BenchmarkKey, BenchmarkTier, ChannelScoreResult, Config, CvrPrediction, Factor,
    IndustryScoreResult, MetricDirection, MetricValue, PredictorConfig, PsychologicalProfile,
    TierKind,
};
pub use domain::{ReferenceDataError, ReferenceResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::reference::{ReferenceData, ReferenceLoader};
pub use services::ScoringEngine;
