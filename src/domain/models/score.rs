//! Score inputs and derived score results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::benchmark::TierKind;

/// Primitive value attached to a metric as extra metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// One caller-supplied metric reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub metric_key: String,
    pub value: f64,
    /// Carried through untouched; never scored
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl MetricValue {
    pub fn new(metric_key: impl Into<String>, value: f64) -> Self {
        Self {
            metric_key: metric_key.into(),
            value,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Per-metric contribution to an industry score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryScoreBreakdown {
    pub metric: String,
    pub name: String,
    pub value: f64,
    /// Tier-derived score, 0-100
    pub score: u8,
    /// Configured (relative) weight
    pub weight: f64,
    /// Weight after normalization over the scored subset
    pub normalized_weight: f64,
    pub weighted_score: f64,
    pub tier: TierKind,
    pub percentile: u8,
    pub label: String,
}

/// Composite score for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryScoreResult {
    pub industry: String,
    pub total_score: u8,
    pub breakdown: Vec<IndustryScoreBreakdown>,
    pub top_strengths: Vec<IndustryScoreBreakdown>,
    /// Worst first
    pub top_weaknesses: Vec<IndustryScoreBreakdown>,
    pub recommendations: Vec<String>,
}

impl IndustryScoreResult {
    /// Well-formed result for an industry with nothing scorable.
    pub fn empty(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            total_score: 0,
            breakdown: Vec::new(),
            top_strengths: Vec::new(),
            top_weaknesses: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}

/// Per-channel contribution to the channel composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelScoreBreakdown {
    pub channel: String,
    pub score: f64,
    /// Configured priority; `None` for channels the industry does not weight
    pub priority: Option<u32>,
    pub weight: f64,
    pub normalized_weight: f64,
    pub weighted_score: f64,
}

/// Simple and priority-weighted channel composites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelScoreResult {
    pub industry: String,
    /// Unweighted mean of every supplied channel score
    pub total_channel_score: f64,
    /// Mean weighted by normalized channel weights
    pub weighted_channel_score: f64,
    /// `total_channel_score - weighted_channel_score`
    pub divergence: f64,
    pub breakdown: Vec<ChannelScoreBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_value_parses_flat_metadata() {
        let json = r#"{"metric_key":"ranking","value":3,"metadata":{"keyword":"dentist","mobile":true,"volume":1200}}"#;
        let metric: MetricValue = serde_json::from_str(json).unwrap();

        assert_eq!(metric.value, 3.0);
        assert_eq!(
            metric.metadata.get("keyword"),
            Some(&MetadataValue::Text("dentist".to_string()))
        );
        assert_eq!(metric.metadata.get("mobile"), Some(&MetadataValue::Bool(true)));
        assert_eq!(
            metric.metadata.get("volume"),
            Some(&MetadataValue::Number(1200.0))
        );
    }

    #[test]
    fn test_metadata_omitted_when_empty() {
        let json = serde_json::to_string(&MetricValue::new("ctr", 1.5)).unwrap();
        assert!(!json.contains("metadata"));
    }

    #[test]
    fn test_empty_result() {
        let result = IndustryScoreResult::empty("saas");
        assert!(result.is_empty());
        assert_eq!(result.total_score, 0);
        assert!(result.recommendations.is_empty());
    }
}
