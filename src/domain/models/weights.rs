//! Industry weight configuration.
//!
//! Weights are relative. They are never required to sum to 1 or 100;
//! normalization happens at aggregation time over whatever subset of
//! metrics or channels the caller actually supplied.

use serde::{Deserialize, Serialize};

use super::benchmark::MetricDirection;

/// Relative importance of one metric for an industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricWeightConfig {
    /// Key callers use when supplying values (e.g. `conversion_rate`)
    pub metric_key: String,
    /// Human readable name
    pub name: String,
    /// Channel whose benchmark series scores this metric
    pub channel: String,
    /// Relative weight, must be positive
    pub weight: f64,
    /// What the metric measures; quoted in recommendations
    pub description: String,
    #[serde(default)]
    pub direction: MetricDirection,
}

impl MetricWeightConfig {
    pub fn new(
        metric_key: impl Into<String>,
        name: impl Into<String>,
        channel: impl Into<String>,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            metric_key: metric_key.into(),
            name: name.into(),
            channel: channel.into(),
            weight,
            description: description.into(),
            direction: MetricDirection::HigherIsBetter,
        }
    }

    /// Mark the metric as lower-is-better.
    pub fn lower_is_better(mut self) -> Self {
        self.direction = MetricDirection::LowerIsBetter;
        self
    }
}

/// Relative importance of one marketing channel for an industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelWeightConfig {
    pub channel: String,
    /// 1 = most important
    pub priority: u32,
    pub weight: f64,
    pub description: String,
}

impl ChannelWeightConfig {
    pub fn new(
        channel: impl Into<String>,
        priority: u32,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            priority,
            weight,
            description: description.into(),
        }
    }
}

/// Metric and channel weights for one industry vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryWeights {
    pub industry: String,
    pub display_name: String,
    #[serde(default)]
    pub metrics: Vec<MetricWeightConfig>,
    #[serde(default)]
    pub channels: Vec<ChannelWeightConfig>,
}

impl IndustryWeights {
    pub fn metric(&self, metric_key: &str) -> Option<&MetricWeightConfig> {
        self.metrics.iter().find(|m| m.metric_key == metric_key)
    }

    pub fn channel(&self, channel: &str) -> Option<&ChannelWeightConfig> {
        self.channels.iter().find(|c| c.channel == channel)
    }
}

/// Divide each weight by the sum of the given weights.
///
/// Returns all zeros when the sum is not positive so callers never see
/// NaN from an empty or degenerate subset.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}
