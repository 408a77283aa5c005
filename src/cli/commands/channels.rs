//! `marketlens channels`: simple and priority-weighted channel composites.

use anyhow::{bail, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{parse_key_value, require_industry};
use crate::cli::display::{
    colorize_delta, colorize_score, list_table, number_cell, output, render_list, score_cell,
    CommandOutput,
};
use crate::domain::models::ChannelScoreResult;
use crate::services::ScoringEngine;

#[derive(Args, Debug)]
pub struct ChannelsArgs {
    /// Industry key (see `marketlens industries`)
    pub industry: String,

    /// Channel score (0-100) as CHANNEL=SCORE; repeatable
    #[arg(
        short,
        long = "score",
        value_name = "CHANNEL=SCORE",
        value_parser = parse_key_value,
        required = true
    )]
    pub scores: Vec<(String, f64)>,
}

pub fn execute(args: ChannelsArgs, engine: &ScoringEngine, json: bool) -> Result<()> {
    require_industry(engine, &args.industry)?;
    if args.scores.is_empty() {
        bail!("No channel scores given. Pass --score CHANNEL=SCORE");
    }

    let scores: BTreeMap<String, f64> = args.scores.into_iter().collect();
    let result = engine.aggregate_channels(&args.industry, &scores);
    output(&ChannelsOutput { result }, json);
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ChannelsOutput {
    #[serde(flatten)]
    pub result: ChannelScoreResult,
}

impl CommandOutput for ChannelsOutput {
    fn to_human(&self) -> String {
        let result = &self.result;
        let mut table = list_table(&["channel", "priority", "score", "weight", "points"]);
        for entry in &result.breakdown {
            table.add_row(vec![
                Cell::new(&entry.channel),
                number_cell(entry.priority.map_or_else(|| "-".to_string(), |p| p.to_string())),
                score_cell(entry.score, 1),
                number_cell(format!("{:.1}%", entry.normalized_weight * 100.0)),
                number_cell(format!("{:.1}", entry.weighted_score)),
            ]);
        }

        [
            format!(
                "Channel score: {} (weighted {}, divergence {})",
                colorize_score(result.total_channel_score),
                colorize_score(result.weighted_channel_score),
                colorize_delta(format!("{:+.1}", result.divergence), result.divergence)
            ),
            String::new(),
            render_list(("channel", "channels"), &table, result.breakdown.len()),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output_marks_unweighted_channels() {
        let engine = ScoringEngine::with_defaults();
        let scores = BTreeMap::from([
            ("search_ads".to_string(), 80.0),
            ("tiktok".to_string(), 50.0),
        ]);
        let human = ChannelsOutput {
            result: engine.aggregate_channels("ecommerce", &scores),
        }
        .to_human();

        assert!(human.contains("Channel score"));
        assert!(human.contains("search_ads"));
        assert!(human.contains("tiktok"));
        assert!(human.contains('-'));
    }

    #[test]
    fn test_json_output_fields() {
        let engine = ScoringEngine::with_defaults();
        let scores = BTreeMap::from([("naver_place".to_string(), 70.0)]);
        let json = ChannelsOutput {
            result: engine.aggregate_channels("local_business", &scores),
        }
        .to_json();

        assert_eq!(json["industry"], "local_business");
        assert_eq!(json["total_channel_score"], 70.0);
        assert!(json["breakdown"].is_array());
    }
}
