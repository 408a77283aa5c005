use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::models::{
    BenchmarkTier, ChannelScoreResult, CvrPrediction, IndustryScoreResult, IndustryWeights,
    MetricValue, PredictorConfig, PsychologicalProfile,
};
use crate::domain::ports::{BenchmarkRepository, IndustryWeightRepository};
use crate::infrastructure::reference::ReferenceData;
use crate::services::{
    ChannelAggregator, IndustryPsychologyAdjuster, PsychologyCvrPredictor, ScoreAggregator,
    TierResolver,
};

/// Entry point wiring every scoring service over one set of reference data.
///
/// Cheap to clone and safe to share across threads; all state is
/// immutable after construction.
#[derive(Clone)]
pub struct ScoringEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    reference: Arc<ReferenceData>,
    resolver: TierResolver,
    scores: ScoreAggregator,
    channels: ChannelAggregator,
    adjuster: IndustryPsychologyAdjuster,
    predictor: PsychologyCvrPredictor,
}

impl ScoringEngine {
    pub fn new(reference: Arc<ReferenceData>, predictor: PredictorConfig) -> Self {
        let inner = EngineInner {
            resolver: TierResolver::new(),
            scores: ScoreAggregator::new(reference.clone(), reference.clone()),
            channels: ChannelAggregator::new(reference.clone()),
            adjuster: IndustryPsychologyAdjuster::new(reference.clone()),
            predictor: PsychologyCvrPredictor::with_config(predictor),
            reference,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Engine over the built-in reference tables and default constants.
    pub fn with_defaults() -> Self {
        Self::new(ReferenceData::global(), PredictorConfig::default())
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.inner.reference
    }

    pub fn aggregate(&self, industry: &str, metrics: &[MetricValue]) -> IndustryScoreResult {
        self.inner.scores.aggregate(industry, metrics)
    }

    pub fn aggregate_channels(
        &self,
        industry: &str,
        channel_scores: &BTreeMap<String, f64>,
    ) -> ChannelScoreResult {
        self.inner.channels.aggregate_channels(industry, channel_scores)
    }

    /// Resolve one metric reading to its tier for an industry
    ///
    /// `None` when the industry does not weight the metric or no series exists.
    pub fn resolve(&self, industry: &str, metric_key: &str, value: f64) -> Option<&BenchmarkTier> {
        let reference = &self.inner.reference;
        let config = reference.industry(industry)?.metric(metric_key)?;
        let tiers = reference.tiers_for(industry, &config.channel, &config.metric_key)?;
        self.inner.resolver.resolve_directed(tiers, value, config.direction)
    }

    /// Predict from a profile that is already on the industry-adjusted scale
    pub fn predict(&self, profile: &PsychologicalProfile, baseline_cvr: f64) -> CvrPrediction {
        self.inner.predictor.predict(profile, baseline_cvr)
    }

    /// Adjust a raw profile for the industry, then predict
    pub fn predict_for_industry(
        &self,
        profile: &PsychologicalProfile,
        industry: &str,
        baseline_cvr: f64,
    ) -> CvrPrediction {
        let adjusted = self.inner.adjuster.adjust(profile, industry);
        self.inner.predictor.predict(&adjusted, baseline_cvr)
    }

    pub fn adjust_profile(&self, profile: &PsychologicalProfile, industry: &str) -> PsychologicalProfile {
        self.inner.adjuster.adjust(profile, industry)
    }

    pub fn industries(&self) -> Vec<&IndustryWeights> {
        self.inner.reference.industries()
    }
}
