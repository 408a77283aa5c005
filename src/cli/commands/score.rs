//! `marketlens score`: industry composite from raw metric readings.

use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{parse_key_value, require_industry};
use crate::cli::display::{
    colorize_score, list_table, number_cell, output, render_list, score_cell, section_header,
    CommandOutput,
};
use crate::domain::models::{IndustryScoreBreakdown, IndustryScoreResult, MetricValue};
use crate::services::ScoringEngine;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Industry key (see `marketlens industries`)
    pub industry: String,

    /// Metric reading as KEY=VALUE; repeatable, later readings win
    #[arg(
        short,
        long = "metric",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        allow_hyphen_values = true
    )]
    pub metrics: Vec<(String, f64)>,

    /// YAML or JSON file of readings: a key-to-value map or a list of records
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MetricsFile {
    Records(Vec<MetricValue>),
    Map(BTreeMap<String, f64>),
}

/// Read metric records from a file (JSON parses as YAML).
pub fn read_metrics_file(path: &Path) -> Result<Vec<MetricValue>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metrics file {}", path.display()))?;
    let parsed: MetricsFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse metrics file {}", path.display()))?;

    Ok(match parsed {
        MetricsFile::Records(records) => records,
        MetricsFile::Map(map) => map
            .into_iter()
            .map(|(key, value)| MetricValue::new(key, value))
            .collect(),
    })
}

/// File readings first, then flags, so flags override on duplicate keys.
fn collect_metrics(args: &ScoreArgs) -> Result<Vec<MetricValue>> {
    let mut metrics = match &args.file {
        Some(path) => read_metrics_file(path)?,
        None => Vec::new(),
    };
    metrics.extend(
        args.metrics
            .iter()
            .map(|(key, value)| MetricValue::new(key.clone(), *value)),
    );

    if metrics.is_empty() {
        bail!("No metrics given. Pass --metric KEY=VALUE or --file PATH");
    }
    Ok(metrics)
}

pub fn execute(args: ScoreArgs, engine: &ScoringEngine, json: bool) -> Result<()> {
    let industry = require_industry(engine, &args.industry)?;
    let display_name = industry.display_name.clone();
    let metrics = collect_metrics(&args)?;
    debug!(industry = %args.industry, readings = metrics.len(), "scoring metrics");

    let result = engine.aggregate(&args.industry, &metrics);
    output(
        &ScoreOutput {
            display_name,
            result,
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    #[serde(skip)]
    pub display_name: String,
    #[serde(flatten)]
    pub result: IndustryScoreResult,
}

fn ranked_line(entry: &IndustryScoreBreakdown) -> String {
    format!("  {} ({}, {})", entry.name, entry.score, entry.label)
}

impl CommandOutput for ScoreOutput {
    fn to_human(&self) -> String {
        let result = &self.result;
        if result.is_empty() {
            return format!(
                "No scorable metrics for {}. Check the metric keys with `marketlens industries {}`.",
                self.display_name, result.industry
            );
        }

        let mut table = list_table(&["metric", "value", "tier", "score", "weight", "points"]);
        for entry in &result.breakdown {
            table.add_row(vec![
                Cell::new(&entry.name),
                number_cell(format!("{}", entry.value)),
                Cell::new(&entry.label),
                score_cell(f64::from(entry.score), 0),
                number_cell(format!("{:.1}%", entry.normalized_weight * 100.0)),
                number_cell(format!("{:.1}", entry.weighted_score)),
            ]);
        }

        let mut lines = vec![
            format!(
                "{} score: {}/100",
                self.display_name,
                colorize_score(f64::from(result.total_score))
            ),
            String::new(),
            render_list(("metric", "metrics"), &table, result.breakdown.len()),
        ];

        lines.push(section_header("Strengths"));
        lines.extend(result.top_strengths.iter().map(ranked_line));
        lines.push(section_header("Weaknesses"));
        lines.extend(result.top_weaknesses.iter().map(ranked_line));

        if !result.recommendations.is_empty() {
            lines.push(section_header("Recommendations"));
            lines.extend(
                result
                    .recommendations
                    .iter()
                    .enumerate()
                    .map(|(i, rec)| format!("  {}. {rec}", i + 1)),
            );
        }

        lines.join("\n")
    }
}
