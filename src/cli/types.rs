//! CLI type definitions
//!
//! clap structures for the top-level command line.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::channels::ChannelsArgs;
use super::commands::industries::IndustriesArgs;
use super::commands::predict::PredictArgs;
use super::commands::score::ScoreArgs;
use super::commands::tier::TierArgs;

#[derive(Parser, Debug)]
#[command(name = "marketlens")]
#[command(about = "Marketlens - benchmark scoring and CVR prediction", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file (defaults to .marketlens/config.yaml)
    #[arg(short, long, global = true, value_name = "PATH", env = "MARKETLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reference data file (YAML or JSON); overrides the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score raw metrics into a weighted 0-100 industry score
    Score(ScoreArgs),

    /// Combine per-channel scores into simple and weighted composites
    Channels(ChannelsArgs),

    /// Predict conversion rate from a psychological profile
    Predict(PredictArgs),

    /// Resolve one metric value to its benchmark tier
    Tier(TierArgs),

    /// List industries, or show one industry's weights
    Industries(IndustriesArgs),
}
