//! `marketlens tier`: resolve one metric reading to its benchmark tier.

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

use super::require_industry;
use crate::cli::display::{colorize_score, output, CommandOutput, DetailView};
use crate::domain::models::{BenchmarkTier, MetricDirection};
use crate::services::ScoringEngine;

#[derive(Args, Debug)]
pub struct TierArgs {
    /// Industry key
    pub industry: String,

    /// Metric key, e.g. conversion_rate
    pub metric: String,

    /// Raw metric value
    #[arg(allow_hyphen_values = true)]
    pub value: f64,
}

pub fn execute(args: TierArgs, engine: &ScoringEngine, json: bool) -> Result<()> {
    let industry = require_industry(engine, &args.industry)?;
    let config = industry.metric(&args.metric).ok_or_else(|| {
        let known: Vec<&str> = industry
            .metrics
            .iter()
            .map(|m| m.metric_key.as_str())
            .collect();
        anyhow!(
            "Industry '{}' does not weight metric '{}'. Weighted metrics: {}",
            args.industry,
            args.metric,
            known.join(", ")
        )
    })?;
    let direction = config.direction;

    let tier = engine
        .resolve(&args.industry, &args.metric, args.value)
        .cloned()
        .ok_or_else(|| anyhow!("No benchmark series for {}/{}", args.industry, args.metric))?;

    output(
        &TierOutput {
            industry: args.industry,
            metric: args.metric,
            value: args.value,
            direction,
            score: tier.score(),
            tier,
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TierOutput {
    pub industry: String,
    pub metric: String,
    pub value: f64,
    pub direction: MetricDirection,
    pub score: u8,
    pub tier: BenchmarkTier,
}

impl CommandOutput for TierOutput {
    fn to_human(&self) -> String {
        DetailView::new(&format!("{} / {}", self.industry, self.metric))
            .field("Value", self.value.to_string())
            .field("Tier", format!("{} ({})", self.tier.label, self.tier.tier))
            .field("Percentile", self.tier.percentile.to_string())
            .field("Threshold", self.tier.value.to_string())
            .field("Score", colorize_score(f64::from(self.score)).to_string())
            .field("Direction", self.direction.as_str())
            .render()
    }
}
