use crate::domain::errors::{ReferenceDataError, ReferenceResult};
use crate::domain::models::{BenchmarkKey, BenchmarkTier, MetricDirection};

/// Resolves raw metric values to benchmark tiers.
///
/// Stateless; tiers are always supplied best-first by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierResolver;

impl TierResolver {
    pub fn new() -> Self {
        Self
    }

    /// Find the tier a value falls into.
    ///
    /// Walks the tiers in stored (descending) order and returns the first
    /// whose threshold is at or below `value`. Values below every threshold,
    /// including negatives, resolve to the last tier. Returns `None` only
    /// for an empty series.
    pub fn resolve_tier<'a>(&self, tiers: &'a [BenchmarkTier], value: f64) -> Option<&'a BenchmarkTier> {
        tiers
            .iter()
            .find(|tier| tier.value <= value)
            .or_else(|| tiers.last())
    }

    /// Resolve against a series whose best-first order follows `direction`.
    ///
    /// Lower-is-better series are stored ascending, so the first tier whose
    /// threshold is at or above `value` wins.
    pub fn resolve_directed<'a>(
        &self,
        tiers: &'a [BenchmarkTier],
        value: f64,
        direction: MetricDirection,
    ) -> Option<&'a BenchmarkTier> {
        match direction {
            MetricDirection::HigherIsBetter => self.resolve_tier(tiers, value),
            MetricDirection::LowerIsBetter => tiers
                .iter()
                .find(|tier| tier.value >= value)
                .or_else(|| tiers.last()),
        }
    }

    /// Check that a series is non-empty and ordered best-first.
    ///
    /// Percentiles must strictly descend. Thresholds must not increase for
    /// higher-is-better series and must not decrease for lower-is-better.
    pub fn validate_series(
        &self,
        key: &BenchmarkKey,
        tiers: &[BenchmarkTier],
        direction: MetricDirection,
    ) -> ReferenceResult<()> {
        if tiers.is_empty() {
            return Err(ReferenceDataError::EmptySeries(key.clone()));
        }

        for pair in tiers.windows(2) {
            let (better, worse) = (&pair[0], &pair[1]);

            if better.percentile <= worse.percentile {
                return Err(ReferenceDataError::MisorderedSeries {
                    key: key.clone(),
                    direction,
                    reason: format!(
                        "percentile {} ({}) is not above {} ({})",
                        better.percentile, better.tier, worse.percentile, worse.tier
                    ),
                });
            }

            let ordered = match direction {
                MetricDirection::HigherIsBetter => better.value >= worse.value,
                MetricDirection::LowerIsBetter => better.value <= worse.value,
            };
            if !ordered {
                return Err(ReferenceDataError::MisorderedSeries {
                    key: key.clone(),
                    direction,
                    reason: format!(
                        "threshold {} ({}) is out of order with {} ({})",
                        better.value, better.tier, worse.value, worse.tier
                    ),
                });
            }
        }

        Ok(())
    }
}
