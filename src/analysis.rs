// ABOUTME: Scan analysis orchestration: scoring, classification, and personalization in one call
// ABOUTME: Batch analysis fans out over rayon; every call stays a pure function of its inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Analysis orchestration.
//!
//! One entry point per call shape: [`analyze`] for a single scan,
//! [`analyze_batch`] for re-scoring a user's history after a goal change.
//! Both compose the engine's pure passes; neither holds state between calls.

use morsel_core::models::{AnalysisReport, ScanPayload, ScanRecord, UserGoals};
use morsel_intelligence::config::EngineConfig;
use morsel_intelligence::{calculate_health_score, classify_ingredients, personalize_score};
use rayon::prelude::*;

use crate::PayloadError;

/// Run the full analysis for one scan.
///
/// Personalization runs only when a goal profile is supplied *and* has at
/// least one axis set; an all-`None` profile behaves exactly like no profile,
/// so the report carries no personal fields either way.
#[must_use]
pub fn analyze(
    payload: &ScanPayload,
    goals: Option<&UserGoals>,
    config: &EngineConfig,
) -> AnalysisReport {
    let base = calculate_health_score(
        &payload.nutrition,
        &payload.ingredients,
        &payload.additives,
        payload.is_organic,
        config,
    );
    let assessments = classify_ingredients(&payload.ingredients, payload.is_organic, &config.lexicons);
    let personal = goals.filter(|profile| !profile.is_empty()).map(|profile| {
        personalize_score(
            base.score,
            &payload.nutrition,
            &payload.ingredients,
            &payload.additives,
            profile,
            config,
        )
    });

    tracing::debug!(
        product = %payload.display_name(),
        score = base.score,
        grade = %base.grade,
        personalized = personal.is_some(),
        "scan analyzed"
    );

    AnalysisReport::assemble(base, assessments, personal)
}

/// Analyze a batch of scans against one goal profile.
///
/// Used when a goal change invalidates a whole scan history. Scans are
/// independent, so the batch fans out across the rayon thread pool; output
/// order matches input order.
#[must_use]
pub fn analyze_batch(
    payloads: &[ScanPayload],
    goals: Option<&UserGoals>,
    config: &EngineConfig,
) -> Vec<AnalysisReport> {
    payloads
        .par_iter()
        .map(|payload| analyze(payload, goals, config))
        .collect()
}

/// Analyze a scan and wrap it into a persistable [`ScanRecord`].
///
/// The one place the lenient pipeline gets strict: a record needs a product
/// name.
pub fn record(
    payload: &ScanPayload,
    goals: Option<&UserGoals>,
    config: &EngineConfig,
) -> Result<ScanRecord, PayloadError> {
    let report = analyze(payload, goals, config);
    ScanRecord::from_scan(payload, report)
}
