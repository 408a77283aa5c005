//! Marketlens CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use marketlens::cli::{self, Cli};
use marketlens::infrastructure::logging::{LogConfig, LoggerImpl};
use marketlens::{ConfigLoader, ReferenceData, ReferenceLoader, ScoringEngine};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        cli::handle_error(&err, json);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let config = ConfigLoader::load_optional(cli.config.as_deref())?;

    let mut log_config = LogConfig::from_settings(&config.logging)?;
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    let _logger = LoggerImpl::init(&log_config)?;

    let reference = match cli.reference.or(config.reference.path) {
        Some(path) => ReferenceLoader::load_from_file(&path)
            .with_context(|| format!("Failed to load reference data from {}", path.display()))?,
        None => ReferenceData::builtin().context("Built-in reference data is invalid")?,
    };
    let reference: Arc<ReferenceData> = ReferenceData::init_global(reference)?;

    let engine = ScoringEngine::new(reference, config.predictor);
    cli::dispatch(cli.command, &engine, json)
}
