//! Benchmark domain model.
//!
//! A benchmark is the ordered set of percentile tiers for one
//! (industry-channel, metric) pair. Tiers are immutable reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentile bucket a metric value can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Top1,
    Top10,
    Top25,
    Median,
    Bottom25,
}

impl TierKind {
    /// All tiers, best first.
    pub const ALL: [Self; 5] = [
        Self::Top1,
        Self::Top10,
        Self::Top25,
        Self::Median,
        Self::Bottom25,
    ];

    /// Fixed tier-to-score mapping.
    ///
    /// Percentile buckets are compressed to five discrete scores rather
    /// than interpolated between thresholds.
    pub const fn score(self) -> u8 {
        match self {
            Self::Top1 => 95,
            Self::Top10 => 85,
            Self::Top25 => 75,
            Self::Median => 60,
            Self::Bottom25 => 40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top1 => "top1",
            Self::Top10 => "top10",
            Self::Top25 => "top25",
            Self::Median => "median",
            Self::Bottom25 => "bottom25",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top1" => Some(Self::Top1),
            "top10" => Some(Self::Top10),
            "top25" => Some(Self::Top25),
            "median" => Some(Self::Median),
            "bottom25" => Some(Self::Bottom25),
            _ => None,
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a larger raw value is better or worse for a metric.
///
/// Higher-is-better series are stored with descending thresholds,
/// lower-is-better series (bounce rate, CPM, CPC) with ascending ones.
/// In both cases the best tier comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDirection {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

impl MetricDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HigherIsBetter => "higher_is_better",
            Self::LowerIsBetter => "lower_is_better",
        }
    }
}

/// One percentile threshold within a benchmark series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTier {
    /// Bucket this threshold opens
    pub tier: TierKind,
    /// Percentile the threshold corresponds to (0-99)
    pub percentile: u8,
    /// Raw metric threshold
    pub value: f64,
    /// Display label, e.g. "Top 10%"
    pub label: String,
}

impl BenchmarkTier {
    pub fn new(tier: TierKind, percentile: u8, value: f64, label: impl Into<String>) -> Self {
        Self {
            tier,
            percentile,
            value,
            label: label.into(),
        }
    }

    /// Score implied by landing in this tier.
    pub fn score(&self) -> u8 {
        self.tier.score()
    }
}

/// Identifies one benchmark series: `<industry>.<channel>` plus metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BenchmarkKey {
    pub series: String,
    pub metric: String,
}

impl BenchmarkKey {
    /// Series name shared by every industry for a channel.
    pub const GENERIC_SERIES_PREFIX: &'static str = "all";

    pub fn new(series: impl Into<String>, metric: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            metric: metric.into(),
        }
    }

    /// Key for an industry-specific series.
    pub fn for_industry(industry: &str, channel: &str, metric: &str) -> Self {
        Self::new(format!("{industry}.{channel}"), metric)
    }

    /// Key for the cross-industry fallback series of a channel.
    pub fn generic(channel: &str, metric: &str) -> Self {
        Self::new(format!("{}.{channel}", Self::GENERIC_SERIES_PREFIX), metric)
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.series, self.metric)
    }
}

/// Benchmark tiers for one key, best tier first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    pub series: String,
    pub metric: String,
    pub tiers: Vec<BenchmarkTier>,
}

impl BenchmarkSeries {
    pub fn key(&self) -> BenchmarkKey {
        BenchmarkKey::new(self.series.clone(), self.metric.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_scores_are_fixed() {
        let scores: Vec<u8> = TierKind::ALL.iter().map(|t| t.score()).collect();
        assert_eq!(scores, vec![95, 85, 75, 60, 40]);
    }

    #[test]
    fn test_tier_kind_roundtrips_through_str() {
        for tier in TierKind::ALL {
            assert_eq!(TierKind::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(TierKind::from_str("TOP10"), Some(TierKind::Top10));
        assert_eq!(TierKind::from_str("top5"), None);
    }

    #[test]
    fn test_tier_kind_serde_names() {
        let json = serde_json::to_string(&TierKind::Bottom25).unwrap();
        assert_eq!(json, "\"bottom25\"");
    }

    #[test]
    fn test_benchmark_keys() {
        let key = BenchmarkKey::for_industry("ecommerce", "ga4", "conversion_rate");
        assert_eq!(key.series, "ecommerce.ga4");
        assert_eq!(key.to_string(), "ecommerce.ga4/conversion_rate");

        let generic = BenchmarkKey::generic("youtube", "view_rate");
        assert_eq!(generic.series, "all.youtube");
    }

    #[test]
    fn test_direction_defaults_to_higher_is_better() {
        assert_eq!(MetricDirection::default(), MetricDirection::HigherIsBetter);
    }
}
