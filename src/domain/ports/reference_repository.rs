use crate::domain::models::{BenchmarkKey, BenchmarkTier, FactorValues, IndustryWeights};

/// Port for benchmark tier lookup
///
/// Implementations hold immutable reference data loaded once at startup,
/// so lookups are synchronous and borrow from the repository.
///
/// # Examples
///
/// ```no_run
/// use marketlens::domain::ports::BenchmarkRepository;
///
/// fn has_ga4_cvr(repo: &dyn BenchmarkRepository) -> bool {
///     repo.tiers_for("ecommerce", "ga4", "conversion_rate").is_some()
/// }
/// ```
pub trait BenchmarkRepository: Send + Sync {
    /// Tiers stored under an exact key, best tier first
    fn series(&self, key: &BenchmarkKey) -> Option<&[BenchmarkTier]>;

    /// Tiers for a metric of an industry's channel
    ///
    /// Falls back to the cross-industry series of the channel when the
    /// industry has no series of its own.
    fn tiers_for(&self, industry: &str, channel: &str, metric: &str) -> Option<&[BenchmarkTier]> {
        self.series(&BenchmarkKey::for_industry(industry, channel, metric))
            .or_else(|| self.series(&BenchmarkKey::generic(channel, metric)))
    }
}

/// Port for per-industry metric and channel weights
pub trait IndustryWeightRepository: Send + Sync {
    /// Weights configured for an industry, if any
    fn industry(&self, industry: &str) -> Option<&IndustryWeights>;

    /// Every configured industry, in a stable order
    fn industries(&self) -> Vec<&IndustryWeights>;
}

/// Port for per-industry psychology factor weights
pub trait PsychologyWeightRepository: Send + Sync {
    fn psychology_weights(&self, industry: &str) -> Option<&FactorValues>;
}
