pub mod benchmark;
pub mod config;
pub mod psychology;
pub mod score;
pub mod weights;

pub use benchmark::{BenchmarkKey, BenchmarkSeries, BenchmarkTier, MetricDirection, TierKind};
pub use config::{BottleneckThresholds, Config, LoggingConfig, PredictorConfig, ReferenceConfig};
pub use psychology::{
    ActionItem, ActionPriority, CvrPrediction, Difficulty, Factor, FactorImpact, FactorValues,
    IndustryPsychologyWeights, PsychologicalProfile, NO_BOTTLENECK,
};
pub use score::{
    ChannelScoreBreakdown, ChannelScoreResult, IndustryScoreBreakdown, IndustryScoreResult,
    MetadataValue, MetricValue,
};
pub use weights::{normalize_weights, ChannelWeightConfig, IndustryWeights, MetricWeightConfig};
