//! Scoring services
//!
//! Pure, synchronous computations over immutable reference data:
//! - TierResolver: raw value to percentile tier
//! - ScoreAggregator / ChannelAggregator: weighted composites
//! - PsychologyCvrPredictor / IndustryPsychologyAdjuster: CVR prediction
//! - ScoringEngine: facade wiring all of the above

pub mod channel_aggregator;
pub mod cvr_predictor;
pub mod engine;
pub mod psychology_adjuster;
pub mod recommendations;
pub mod score_aggregator;
pub mod tier_resolver;

pub use channel_aggregator::ChannelAggregator;
pub use cvr_predictor::PsychologyCvrPredictor;
pub use engine::ScoringEngine;
pub use psychology_adjuster::IndustryPsychologyAdjuster;
pub use recommendations::RecommendationBuilder;
pub use score_aggregator::ScoreAggregator;
pub use tier_resolver::TierResolver;
