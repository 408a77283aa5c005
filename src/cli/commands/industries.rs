//! `marketlens industries`: list industries or show one industry's weights.

use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use super::require_industry;
use crate::cli::display::{list_table, number_cell, output, render_list, CommandOutput};
use crate::domain::models::{normalize_weights, IndustryWeights};
use crate::services::ScoringEngine;

#[derive(Args, Debug)]
pub struct IndustriesArgs {
    /// Show metric and channel weights for one industry
    pub industry: Option<String>,
}

pub fn execute(args: IndustriesArgs, engine: &ScoringEngine, json: bool) -> Result<()> {
    match args.industry {
        Some(key) => {
            let industry = require_industry(engine, &key)?;
            output(&IndustryDetailOutput::from(industry), json);
        }
        None => {
            let industries = engine
                .industries()
                .into_iter()
                .map(IndustrySummary::from)
                .collect();
            output(&IndustryListOutput { industries }, json);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct IndustrySummary {
    pub industry: String,
    pub display_name: String,
    pub metrics: usize,
    pub channels: usize,
}

impl From<&IndustryWeights> for IndustrySummary {
    fn from(weights: &IndustryWeights) -> Self {
        Self {
            industry: weights.industry.clone(),
            display_name: weights.display_name.clone(),
            metrics: weights.metrics.len(),
            channels: weights.channels.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndustryListOutput {
    pub industries: Vec<IndustrySummary>,
}

impl CommandOutput for IndustryListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "name", "metrics", "channels"]);
        for industry in &self.industries {
            table.add_row(vec![
                Cell::new(&industry.industry),
                Cell::new(&industry.display_name),
                number_cell(industry.metrics.to_string()),
                number_cell(industry.channels.to_string()),
            ]);
        }
        render_list(("industry", "industries"), &table, self.industries.len())
    }
}

#[derive(Debug, Serialize)]
pub struct IndustryDetailOutput {
    #[serde(flatten)]
    pub weights: IndustryWeights,
}

impl From<&IndustryWeights> for IndustryDetailOutput {
    fn from(weights: &IndustryWeights) -> Self {
        Self {
            weights: weights.clone(),
        }
    }
}

impl CommandOutput for IndustryDetailOutput {
    fn to_human(&self) -> String {
        let weights = &self.weights;

        let metric_shares =
            normalize_weights(&weights.metrics.iter().map(|m| m.weight).collect::<Vec<_>>());
        let mut metrics = list_table(&["metric", "channel", "share", "direction", "description"]);
        for (metric, share) in weights.metrics.iter().zip(metric_shares) {
            metrics.add_row(vec![
                Cell::new(&metric.metric_key),
                Cell::new(&metric.channel),
                number_cell(format!("{:.1}%", share * 100.0)),
                Cell::new(metric.direction.as_str()),
                Cell::new(&metric.description),
            ]);
        }

        let mut channels = list_table(&["priority", "channel", "weight", "description"]);
        for channel in &weights.channels {
            channels.add_row(vec![
                number_cell(channel.priority.to_string()),
                Cell::new(&channel.channel),
                number_cell(format!("{}", channel.weight)),
                Cell::new(&channel.description),
            ]);
        }

        [
            format!("{} ({})", console::style(&weights.display_name).bold(), weights.industry),
            String::new(),
            render_list(("metric", "metrics"), &metrics, weights.metrics.len()),
            String::new(),
            render_list(("channel", "channels"), &channels, weights.channels.len()),
        ]
        .join("\n")
    }
}
