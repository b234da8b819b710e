// ABOUTME: Main library entry point for the Morsel food scoring platform
// ABOUTME: Wires payload ingestion, the scoring engine, and configuration loading together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

#![deny(unsafe_code)]

//! # Morsel
//!
//! Scan a food label, get an honest answer. Morsel turns the nutrition
//! facts, ingredient list, and organic claim captured by the mobile scanner
//! into a 0-100 health score with human-readable reasons, per-ingredient
//! assessments, and optional goal-based personalization.
//!
//! ## Features
//!
//! - **Deterministic scoring**: the same scan always produces the same
//!   score; no clocks, no randomness, no hidden state
//! - **Lenient ingestion**: OCR output with missing or mistyped fields
//!   degrades to neutral values instead of failing the scan
//! - **Goal personalization**: vegan, keto, gluten-free, and friends adjust
//!   the score per user without touching the objective base
//! - **Tunable rules**: thresholds and word lists load from YAML overrides,
//!   validated before use
//!
//! ## Quick Start
//!
//! ```rust
//! use morsel::analysis::analyze;
//! use morsel::ingest::parse_payload;
//! use morsel::EngineConfig;
//!
//! # fn main() -> Result<(), morsel::PayloadError> {
//! let payload = parse_payload(
//!     r#"{"name":"Rolled Oats","sugar":1,"fiber":4,"ingredients":["oats"]}"#,
//! )?;
//! let config = EngineConfig::default();
//! let report = analyze(&payload, None, &config);
//! println!("{} scores {}", payload.display_name(), report.score);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace splits along change frequency:
//! - **morsel-core**: wire-facing data model, changes rarely
//! - **morsel-intelligence**: the pure rule engine
//! - **morsel** (this crate): ingestion, orchestration, config loading,
//!   logging, and the CLI

/// Scan analysis orchestration: base score, classification, personalization
pub mod analysis;

/// Engine configuration loading from YAML overrides
pub mod config;

/// Payload parsing from raw scanner JSON
pub mod ingest;

/// Logging configuration and structured logging setup
pub mod logging;

pub use morsel_core::errors::PayloadError;
pub use morsel_core::models::{
    AnalysisReport, BodyGoal, DietGoal, Grade, HealthGoal, IngredientAssessment,
    IngredientCategory, LifeGoal, Motivation, NutritionFacts, PersonalizationResult, ScanPayload,
    ScanRecord, ScoreBreakdown, ScoreFlag, ScoringResult, UserGoals,
};
pub use morsel_intelligence::config::{CompositeTuning, EngineConfig, NutritionThresholds};
pub use morsel_intelligence::lexicons::Lexicons;
