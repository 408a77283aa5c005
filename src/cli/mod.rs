//! Command-line interface
//!
//! Thin operator surface over [`ScoringEngine`](crate::services::ScoringEngine).

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands};

use crate::services::ScoringEngine;

/// Run the parsed subcommand against an engine.
pub fn dispatch(command: Commands, engine: &ScoringEngine, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Score(args) => commands::score::execute(args, engine, json),
        Commands::Channels(args) => commands::channels::execute(args, engine, json),
        Commands::Predict(args) => commands::predict::execute(args, engine, json),
        Commands::Tier(args) => commands::tier::execute(args, engine, json),
        Commands::Industries(args) => commands::industries::execute(args, engine, json),
    }
}

/// Print an error in the requested format and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&format!("{err:#}")));
    }
    std::process::exit(1);
}
