use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::models::{normalize_weights, ChannelScoreBreakdown, ChannelScoreResult};
use crate::domain::ports::IndustryWeightRepository;

/// Combines per-channel scores into a simple and a priority-weighted composite.
///
/// Both composites are returned so callers can spot divergence: a simple
/// mean well below the weighted score means low-priority channels are
/// dragging the average down.
pub struct ChannelAggregator {
    weights: Arc<dyn IndustryWeightRepository>,
}

impl ChannelAggregator {
    pub fn new(weights: Arc<dyn IndustryWeightRepository>) -> Self {
        Self { weights }
    }

    /// Aggregate channel scores for an industry
    ///
    /// Channels without a configured weight count toward the simple mean
    /// only. Unknown industries get a weighted score of 0.
    #[instrument(skip(self, channel_scores), fields(channel_count = channel_scores.len()))]
    pub fn aggregate_channels(
        &self,
        industry: &str,
        channel_scores: &BTreeMap<String, f64>,
    ) -> ChannelScoreResult {
        let total_channel_score = if channel_scores.is_empty() {
            0.0
        } else {
            channel_scores.values().sum::<f64>() / channel_scores.len() as f64
        };

        let config = self.weights.industry(industry);
        if config.is_none() {
            debug!(industry, "no weight configuration for industry");
        }

        let configured: Vec<(&str, f64, u32, f64)> = channel_scores
            .iter()
            .filter_map(|(channel, score)| {
                config
                    .and_then(|c| c.channel(channel))
                    .map(|w| (channel.as_str(), *score, w.priority, w.weight))
            })
            .collect();
        let normalized = normalize_weights(&configured.iter().map(|c| c.3).collect::<Vec<_>>());

        let mut breakdown: Vec<ChannelScoreBreakdown> = configured
            .iter()
            .zip(&normalized)
            .map(|(&(channel, score, priority, weight), &normalized_weight)| ChannelScoreBreakdown {
                channel: channel.to_string(),
                score,
                priority: Some(priority),
                weight,
                normalized_weight,
                weighted_score: score * normalized_weight,
            })
            .collect();

        let weighted_channel_score: f64 = breakdown.iter().map(|b| b.weighted_score).sum();

        for (channel, score) in channel_scores {
            if !configured.iter().any(|c| c.0 == channel) {
                breakdown.push(ChannelScoreBreakdown {
                    channel: channel.clone(),
                    score: *score,
                    priority: None,
                    weight: 0.0,
                    normalized_weight: 0.0,
                    weighted_score: 0.0,
                });
            }
        }

        // Configured channels by priority, unconfigured last; name breaks ties
        breakdown.sort_by(|a, b| {
            (a.priority.is_none(), a.priority, &a.channel)
                .cmp(&(b.priority.is_none(), b.priority, &b.channel))
        });

        let total_channel_score = round1(total_channel_score);
        let weighted_channel_score = round1(weighted_channel_score);

        ChannelScoreResult {
            industry: industry.to_string(),
            total_channel_score,
            weighted_channel_score,
            divergence: round1(total_channel_score - weighted_channel_score),
            breakdown,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ChannelWeightConfig, IndustryWeights};
    use crate::infrastructure::reference::ReferenceData;

    fn aggregator() -> ChannelAggregator {
        let industry = IndustryWeights {
            industry: "test".to_string(),
            display_name: "Test".to_string(),
            metrics: vec![],
            channels: vec![
                ChannelWeightConfig::new("search_ads", 1, 60.0, "intent"),
                ChannelWeightConfig::new("instagram", 2, 20.0, "awareness"),
            ],
        };
        let data = ReferenceData::from_parts(vec![], vec![industry], vec![]).unwrap();
        ChannelAggregator::new(Arc::new(data))
    }

    fn scores(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_scores() {
        let result = aggregator().aggregate_channels("test", &BTreeMap::new());
        assert_eq!(result.total_channel_score, 0.0);
        assert_eq!(result.weighted_channel_score, 0.0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_weighted_vs_simple_mean() {
        let result = aggregator().aggregate_channels(
            "test",
            &scores(&[("search_ads", 80.0), ("instagram", 40.0), ("email", 30.0)]),
        );

        assert_eq!(result.total_channel_score, 50.0);
        // 80 * 0.75 + 40 * 0.25
        assert_eq!(result.weighted_channel_score, 70.0);
        assert_eq!(result.divergence, -20.0);

        let order: Vec<&str> = result.breakdown.iter().map(|b| b.channel.as_str()).collect();
        assert_eq!(order, vec!["search_ads", "instagram", "email"]);
        assert_eq!(result.breakdown[2].priority, None);
    }

    #[test]
    fn test_unknown_industry_keeps_simple_mean() {
        let result = aggregator().aggregate_channels("nope", &scores(&[("search_ads", 70.0)]));
        assert_eq!(result.total_channel_score, 70.0);
        assert_eq!(result.weighted_channel_score, 0.0);
        assert_eq!(result.breakdown.len(), 1);
    }
}
