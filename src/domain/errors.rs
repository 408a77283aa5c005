//! Domain errors for marketlens.
//!
//! Scoring and prediction never fail; these errors only surface while
//! loading and validating reference data.

use thiserror::Error;

use super::models::{BenchmarkKey, MetricDirection};

/// Errors raised while loading or validating reference tables.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse reference data: {0}")]
    Parse(String),

    #[error("Benchmark series {0} has no tiers")]
    EmptySeries(BenchmarkKey),

    #[error("Benchmark series {key} is not ordered best-first for {}: {reason}", .direction.as_str())]
    MisorderedSeries {
        key: BenchmarkKey,
        direction: MetricDirection,
        reason: String,
    },

    #[error("Duplicate benchmark series: {0}")]
    DuplicateSeries(BenchmarkKey),

    #[error("Industry {industry}: weight for {item} must be positive, got {weight}")]
    NonPositiveWeight {
        industry: String,
        item: String,
        weight: f64,
    },

    #[error("Industry {industry}: psychology weight for {factor} must be non-negative, got {weight}")]
    NegativePsychologyWeight {
        industry: String,
        factor: String,
        weight: f64,
    },

    #[error("Duplicate industry: {0}")]
    DuplicateIndustry(String),

    #[error("Reference data already initialized")]
    AlreadyInitialized,
}

impl From<serde_yaml::Error> for ReferenceDataError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ReferenceDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type ReferenceResult<T> = Result<T, ReferenceDataError>;
