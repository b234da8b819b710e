// ABOUTME: Analyze command for morsel-cli
// ABOUTME: Reads scan payloads from disk, scores them, and prints reports or scan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use morsel::{analysis, ingest, EngineConfig, UserGoals};
use tracing::{info, warn};

use crate::helpers::display;

/// Score every payload in the input file and print the results
pub fn run(
    input: &Path,
    goals_path: Option<&Path>,
    json: bool,
    record: bool,
    config: &EngineConfig,
) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read scan payload from {}", input.display()))?;
    let payloads = ingest::parse_payloads(&raw)?;
    if payloads.is_empty() {
        println!("Nothing to analyze: the input batch is empty.");
        return Ok(());
    }

    let goals = load_goals(goals_path)?;
    if goals.as_ref().is_some_and(UserGoals::is_empty) {
        warn!("goal profile has no recognized goals; reports will not be personalized");
    }

    info!(
        scans = payloads.len(),
        personalized = goals.is_some(),
        "analyzing payloads"
    );

    if record {
        let records = payloads
            .iter()
            .map(|payload| analysis::record(payload, goals.as_ref(), config))
            .collect::<Result<Vec<_>, _>>()
            .context("scan records need a product name on every payload")?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let reports = analysis::analyze_batch(&payloads, goals.as_ref(), config);
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (payload, report) in payloads.iter().zip(&reports) {
            display::print_report(payload.display_name(), report);
        }
    }

    Ok(())
}

fn load_goals(path: Option<&Path>) -> Result<Option<UserGoals>> {
    path.map(|path| {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read goal profile from {}", path.display()))?;
        Ok(ingest::parse_goals(&raw)?)
    })
    .transpose()
}
