use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info};

use super::builtin;
use crate::domain::errors::{ReferenceDataError, ReferenceResult};
use crate::domain::models::{
    BenchmarkKey, BenchmarkSeries, BenchmarkTier, Factor, FactorValues, IndustryPsychologyWeights,
    IndustryWeights, MetricDirection,
};
use crate::domain::ports::{BenchmarkRepository, IndustryWeightRepository, PsychologyWeightRepository};
use crate::services::TierResolver;

/// Global reference data singleton
static REFERENCE_DATA: OnceLock<Arc<ReferenceData>> = OnceLock::new();

/// Serialized shape of a reference data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceFile {
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkSeries>,
    #[serde(default)]
    pub industries: Vec<IndustryWeights>,
    #[serde(default)]
    pub psychology: Vec<IndustryPsychologyWeights>,
}

/// Immutable benchmark, weight and psychology tables.
///
/// Built once (from the built-in tables or a file) and shared behind `Arc`.
/// Implements every reference port.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    benchmarks: HashMap<BenchmarkKey, Vec<BenchmarkTier>>,
    industries: Vec<IndustryWeights>,
    industry_index: HashMap<String, usize>,
    psychology: HashMap<String, FactorValues>,
}

impl ReferenceData {
    /// Index and validate reference tables
    pub fn from_parts(
        benchmarks: Vec<BenchmarkSeries>,
        industries: Vec<IndustryWeights>,
        psychology: Vec<IndustryPsychologyWeights>,
    ) -> ReferenceResult<Self> {
        let data = Self::index(benchmarks, industries, psychology)?;
        data.validate()?;
        debug!(
            series = data.benchmarks.len(),
            industries = data.industries.len(),
            "reference data indexed"
        );
        Ok(data)
    }

    pub fn from_file(file: ReferenceFile) -> ReferenceResult<Self> {
        Self::from_parts(file.benchmarks, file.industries, file.psychology)
    }

    /// Built-in tables shipped with the crate
    pub fn builtin() -> ReferenceResult<Self> {
        Self::from_parts(builtin::benchmarks(), builtin::industries(), builtin::psychology())
    }

    /// Install file-loaded data as the global catalog (call once at startup)
    pub fn init_global(data: Self) -> ReferenceResult<Arc<Self>> {
        let data = Arc::new(data);
        REFERENCE_DATA
            .set(data.clone())
            .map_err(|_| ReferenceDataError::AlreadyInitialized)?;
        info!(industries = data.industries.len(), "reference data installed");
        Ok(data)
    }

    /// Global catalog, initialized from the built-in tables on first use
    pub fn global() -> Arc<Self> {
        REFERENCE_DATA
            .get_or_init(|| {
                let data = Self::index(builtin::benchmarks(), builtin::industries(), builtin::psychology())
                    .unwrap_or_else(|err| {
                        error!(error = %err, "built-in reference data is invalid");
                        Self::empty()
                    });
                Arc::new(data)
            })
            .clone()
    }

    pub fn empty() -> Self {
        Self {
            benchmarks: HashMap::new(),
            industries: Vec::new(),
            industry_index: HashMap::new(),
            psychology: HashMap::new(),
        }
    }

    /// Export back to the file shape, series sorted by key
    pub fn to_file(&self) -> ReferenceFile {
        let mut benchmarks: Vec<BenchmarkSeries> = self
            .benchmarks
            .iter()
            .map(|(key, tiers)| BenchmarkSeries {
                series: key.series.clone(),
                metric: key.metric.clone(),
                tiers: tiers.clone(),
            })
            .collect();
        benchmarks.sort_by(|a, b| (&a.series, &a.metric).cmp(&(&b.series, &b.metric)));

        let mut psychology: Vec<IndustryPsychologyWeights> = self
            .psychology
            .iter()
            .map(|(industry, weights)| IndustryPsychologyWeights {
                industry: industry.clone(),
                weights: *weights,
            })
            .collect();
        psychology.sort_by(|a, b| a.industry.cmp(&b.industry));

        ReferenceFile {
            benchmarks,
            industries: self.industries.clone(),
            psychology,
        }
    }

    pub fn series_count(&self) -> usize {
        self.benchmarks.len()
    }

    fn index(
        benchmarks: Vec<BenchmarkSeries>,
        industries: Vec<IndustryWeights>,
        psychology: Vec<IndustryPsychologyWeights>,
    ) -> ReferenceResult<Self> {
        let mut data = Self::empty();

        for series in benchmarks {
            let key = series.key();
            if data.benchmarks.insert(key.clone(), series.tiers).is_some() {
                return Err(ReferenceDataError::DuplicateSeries(key));
            }
        }

        for industry in industries {
            if data.industry_index.contains_key(&industry.industry) {
                return Err(ReferenceDataError::DuplicateIndustry(industry.industry));
            }
            data.industry_index
                .insert(industry.industry.clone(), data.industries.len());
            data.industries.push(industry);
        }

        for entry in psychology {
            if data.psychology.insert(entry.industry.clone(), entry.weights).is_some() {
                return Err(ReferenceDataError::DuplicateIndustry(entry.industry));
            }
        }

        Ok(data)
    }

    /// Check weights and tier ordering
    ///
    /// A series is checked in the direction of the metrics that score
    /// against it. Series no metric references only need to be ordered in
    /// one of the two directions.
    pub fn validate(&self) -> ReferenceResult<()> {
        let resolver = TierResolver::new();
        let mut directions: HashMap<BenchmarkKey, MetricDirection> = HashMap::new();

        for industry in &self.industries {
            for metric in &industry.metrics {
                if metric.weight.is_nan() || metric.weight <= 0.0 {
                    return Err(ReferenceDataError::NonPositiveWeight {
                        industry: industry.industry.clone(),
                        item: metric.metric_key.clone(),
                        weight: metric.weight,
                    });
                }

                let specific =
                    BenchmarkKey::for_industry(&industry.industry, &metric.channel, &metric.metric_key);
                let key = if self.benchmarks.contains_key(&specific) {
                    specific
                } else {
                    BenchmarkKey::generic(&metric.channel, &metric.metric_key)
                };
                if let Some(tiers) = self.benchmarks.get(&key) {
                    resolver.validate_series(&key, tiers, metric.direction)?;
                    directions.insert(key, metric.direction);
                }
            }

            for channel in &industry.channels {
                if channel.weight.is_nan() || channel.weight <= 0.0 {
                    return Err(ReferenceDataError::NonPositiveWeight {
                        industry: industry.industry.clone(),
                        item: channel.channel.clone(),
                        weight: channel.weight,
                    });
                }
            }
        }

        for (key, tiers) in &self.benchmarks {
            if directions.contains_key(key) {
                continue;
            }
            resolver
                .validate_series(key, tiers, MetricDirection::HigherIsBetter)
                .or_else(|_| resolver.validate_series(key, tiers, MetricDirection::LowerIsBetter))?;
        }

        for (industry, weights) in &self.psychology {
            for factor in Factor::ALL {
                let weight = weights.get(factor);
                if weight.is_nan() || weight < 0.0 {
                    return Err(ReferenceDataError::NegativePsychologyWeight {
                        industry: industry.clone(),
                        factor: factor.to_string(),
                        weight,
                    });
                }
            }
        }

        Ok(())
    }
}

impl BenchmarkRepository for ReferenceData {
    fn series(&self, key: &BenchmarkKey) -> Option<&[BenchmarkTier]> {
        self.benchmarks.get(key).map(Vec::as_slice)
    }
}

impl IndustryWeightRepository for ReferenceData {
    fn industry(&self, industry: &str) -> Option<&IndustryWeights> {
        self.industry_index
            .get(industry)
            .and_then(|&index| self.industries.get(index))
    }

    fn industries(&self) -> Vec<&IndustryWeights> {
        self.industries.iter().collect()
    }
}

impl PsychologyWeightRepository for ReferenceData {
    fn psychology_weights(&self, industry: &str) -> Option<&FactorValues> {
        self.psychology.get(industry)
    }
}
