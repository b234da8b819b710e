// ABOUTME: Morsel CLI - command-line front end for the food health scoring engine
// ABOUTME: Scores scan payloads, personalizes against goal profiles, and inspects engine config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs
//!
//! Usage:
//! ```bash
//! # Score a scanned product
//! morsel-cli analyze scan.json
//!
//! # Score against a goal profile, machine-readable output
//! morsel-cli analyze scan.json --goals goals.json --json
//!
//! # Re-score a whole history export after a goal change
//! morsel-cli analyze history.json --goals goals.json
//!
//! # Inspect one ingredient lexicon
//! morsel-cli lexicons --table seed_oils
//!
//! # Show the active scoring thresholds
//! morsel-cli thresholds
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use morsel::logging;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "morsel-cli",
    about = "Morsel food scoring CLI",
    long_about = "Command-line tool for scoring scanned food products, personalizing scores against goal profiles, and inspecting the engine's lexicons and thresholds."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine config YAML override
    #[arg(long, global = true)]
    engine_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score one scan payload or a batch of them
    Analyze {
        /// Path to a scan payload JSON file (one object, or an array)
        input: PathBuf,

        /// Path to a goal profile JSON file
        #[arg(long)]
        goals: Option<PathBuf>,

        /// Emit reports as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Wrap each report in a persistable scan record (implies JSON output)
        #[arg(long)]
        record: bool,
    },

    /// Print the ingredient lexicons the engine matches against
    Lexicons {
        /// Print a single table (e.g. "seed_oils", "whole_foods")
        #[arg(long)]
        table: Option<String>,
    },

    /// Print the active nutrition thresholds and composite tuning
    Thresholds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging_config = logging::LoggingConfig::from_env();
    if cli.verbose {
        logging_config.level = "debug".into();
    }
    logging_config.init()?;

    let config = morsel::config::load_engine_config(cli.engine_config.as_deref())?;
    info!("Engine config ready");

    match cli.command {
        Command::Analyze {
            input,
            goals,
            json,
            record,
        } => {
            commands::analyze::run(&input, goals.as_deref(), json, record, &config)?;
        }
        Command::Lexicons { table } => {
            commands::lexicons::run(table.as_deref(), &config)?;
        }
        Command::Thresholds => {
            commands::thresholds::run(&config);
        }
    }

    Ok(())
}
