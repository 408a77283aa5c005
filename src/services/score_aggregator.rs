use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::models::{
    normalize_weights, BenchmarkTier, IndustryScoreBreakdown, IndustryScoreResult,
    MetricValue, MetricWeightConfig,
};
use crate::domain::ports::{BenchmarkRepository, IndustryWeightRepository};
use crate::services::{RecommendationBuilder, TierResolver};

/// Number of strengths and weaknesses reported.
pub const RANKED_METRICS: usize = 3;

/// Combines per-metric tier scores into one weighted industry score.
///
/// Never fails: unknown industries, unweighted metrics and metrics without
/// a benchmark series are left out of the result, and an empty scored set
/// yields a zero score.
///
/// # Examples
///
/// ```no_run
/// use marketlens::domain::models::MetricValue;
/// use marketlens::infrastructure::reference::ReferenceData;
/// use marketlens::services::ScoreAggregator;
///
/// let data = ReferenceData::global();
/// let aggregator = ScoreAggregator::new(data.clone(), data.clone());
/// let result = aggregator.aggregate("ecommerce", &[MetricValue::new("conversion_rate", 3.2)]);
/// println!("{}", result.total_score);
/// ```
pub struct ScoreAggregator {
    benchmarks: Arc<dyn BenchmarkRepository>,
    weights: Arc<dyn IndustryWeightRepository>,
    resolver: TierResolver,
    recommendations: RecommendationBuilder,
}

struct ScoredMetric<'a> {
    config: &'a MetricWeightConfig,
    value: f64,
    tier: &'a BenchmarkTier,
}

impl ScoreAggregator {
    pub fn new(
        benchmarks: Arc<dyn BenchmarkRepository>,
        weights: Arc<dyn IndustryWeightRepository>,
    ) -> Self {
        Self {
            benchmarks,
            weights,
            resolver: TierResolver::new(),
            recommendations: RecommendationBuilder::new(),
        }
    }

    /// Score an industry from raw metric readings
    ///
    /// # Steps:
    /// 1. Look up each metric's weight; skip metrics without one
    /// 2. Resolve the tier and map it to the fixed tier score
    /// 3. Normalize weights over the metrics actually scored
    /// 4. Sum weighted scores, round and clamp to 0-100
    /// 5. Rank strengths and weaknesses
    /// 6. Build recommendations
    ///
    /// When the same metric key appears more than once, the last reading wins.
    #[instrument(skip(self, metrics), fields(metric_count = metrics.len()))]
    pub fn aggregate(&self, industry: &str, metrics: &[MetricValue]) -> IndustryScoreResult {
        let Some(config) = self.weights.industry(industry) else {
            debug!(industry, "no weight configuration for industry");
            return IndustryScoreResult::empty(industry);
        };

        let mut scored: Vec<ScoredMetric<'_>> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for metric in metrics {
            let Some(weight) = config.metric(&metric.metric_key) else {
                debug!(metric = %metric.metric_key, "metric has no configured weight, skipping");
                continue;
            };
            let Some(tiers) = self.benchmarks.tiers_for(industry, &weight.channel, &weight.metric_key)
            else {
                debug!(metric = %metric.metric_key, channel = %weight.channel, "no benchmark series, skipping");
                continue;
            };
            let Some(tier) = self.resolver.resolve_directed(tiers, metric.value, weight.direction) else {
                continue;
            };

            let entry = ScoredMetric {
                config: weight,
                value: metric.value,
                tier,
            };
            match positions.get(metric.metric_key.as_str()) {
                Some(&index) => scored[index] = entry,
                None => {
                    positions.insert(metric.metric_key.as_str(), scored.len());
                    scored.push(entry);
                }
            }
        }

        if scored.is_empty() {
            return IndustryScoreResult::empty(industry);
        }

        let raw_weights: Vec<f64> = scored.iter().map(|s| s.config.weight).collect();
        let normalized = normalize_weights(&raw_weights);

        let breakdown: Vec<IndustryScoreBreakdown> = scored
            .iter()
            .zip(normalized)
            .map(|(s, normalized_weight)| {
                let score = s.tier.score();
                IndustryScoreBreakdown {
                    metric: s.config.metric_key.clone(),
                    name: s.config.name.clone(),
                    value: s.value,
                    score,
                    weight: s.config.weight,
                    normalized_weight,
                    weighted_score: f64::from(score) * normalized_weight,
                    tier: s.tier.tier,
                    percentile: s.tier.percentile,
                    label: s.tier.label.clone(),
                }
            })
            .collect();

        let total: f64 = breakdown.iter().map(|b| b.weighted_score).sum();
        let total_score = total.round().clamp(0.0, 100.0) as u8;

        let (top_strengths, top_weaknesses) = rank(&breakdown);
        let recommendations = self.recommendations.build(industry, &breakdown, |key| {
            config.metric(key).map(|m| m.description.as_str())
        });

        debug!(industry, total_score, scored = breakdown.len(), "industry score aggregated");

        IndustryScoreResult {
            industry: industry.to_string(),
            total_score,
            breakdown,
            top_strengths,
            top_weaknesses,
            recommendations,
        }
    }
}

/// Top scores (best first) and bottom scores (worst first).
///
/// Stable sorts keep input order among equal scores.
fn rank(
    breakdown: &[IndustryScoreBreakdown],
) -> (Vec<IndustryScoreBreakdown>, Vec<IndustryScoreBreakdown>) {
    let mut descending = breakdown.to_vec();
    descending.sort_by(|a, b| b.score.cmp(&a.score));
    let strengths = descending.iter().take(RANKED_METRICS).cloned().collect();

    let mut ascending = breakdown.to_vec();
    ascending.sort_by_key(|b| b.score);
    let weaknesses = ascending.into_iter().take(RANKED_METRICS).collect();

    (strengths, weaknesses)
}
