//! Common test utilities for integration tests
//!
//! Shared fixtures for building small reference tables and profiles.

#![allow(dead_code)]

use std::sync::Arc;

use marketlens::domain::models::{
    BenchmarkKey, BenchmarkSeries, BenchmarkTier, ChannelWeightConfig, IndustryWeights,
    MetricWeightConfig, PredictorConfig, PsychologicalProfile, TierKind,
};
use marketlens::{ReferenceData, ScoringEngine};

/// Channel every fixture metric is benchmarked on
pub const FIXTURE_CHANNEL: &str = "web";

/// Five descending tiers, best first.
pub fn tiers(values: [f64; 5]) -> Vec<BenchmarkTier> {
    TierKind::ALL
        .iter()
        .zip([99, 90, 75, 50, 25])
        .zip(values)
        .map(|((&tier, percentile), value)| {
            BenchmarkTier::new(tier, percentile, value, format!("{tier} band"))
        })
        .collect()
}

/// Generic series for `metric` with thresholds 50/40/30/20/10.
pub fn series(metric: &str) -> BenchmarkSeries {
    let key = BenchmarkKey::generic(FIXTURE_CHANNEL, metric);
    BenchmarkSeries {
        series: key.series,
        metric: key.metric,
        tiers: tiers([50.0, 40.0, 30.0, 20.0, 10.0]),
    }
}

/// Reference data with one industry ("fixture") weighting the given metrics.
pub fn fixture_reference(weights: &[(&str, f64)], channels: &[(&str, u32, f64)]) -> Arc<ReferenceData> {
    let industry = IndustryWeights {
        industry: "fixture".to_string(),
        display_name: "Fixture".to_string(),
        metrics: weights
            .iter()
            .map(|(key, weight)| {
                MetricWeightConfig::new(*key, *key, FIXTURE_CHANNEL, *weight, format!("{key} work"))
            })
            .collect(),
        channels: channels
            .iter()
            .map(|(channel, priority, weight)| {
                ChannelWeightConfig::new(*channel, *priority, *weight, format!("{channel} reach"))
            })
            .collect(),
    };

    let data = ReferenceData::from_parts(
        weights.iter().map(|(key, _)| series(key)).collect(),
        vec![industry],
        vec![],
    )
    .expect("fixture reference data should validate");
    Arc::new(data)
}

pub fn fixture_engine(weights: &[(&str, f64)], channels: &[(&str, u32, f64)]) -> ScoringEngine {
    ScoringEngine::new(fixture_reference(weights, channels), PredictorConfig::default())
}

/// Built-in tables with default predictor constants.
pub fn builtin_engine() -> ScoringEngine {
    let data = ReferenceData::builtin().expect("built-in reference data should validate");
    ScoringEngine::new(Arc::new(data), PredictorConfig::default())
}

/// Profile sitting exactly on every ideal point.
pub fn ideal_profile() -> PsychologicalProfile {
    PsychologicalProfile::new(8.0, 2.0, 8.5, 7.0, 3.0)
}

/// Profile tripping every bottleneck threshold.
pub fn stressed_profile() -> PsychologicalProfile {
    PsychologicalProfile::new(4.0, 8.0, 4.0, 3.0, 9.0)
}
