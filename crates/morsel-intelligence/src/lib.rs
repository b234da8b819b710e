// ABOUTME: Health scoring rule engine: nutrition bands, additive screens, classification, personalization
// ABOUTME: Every entry point is a pure function of its inputs; configuration is passed in, never global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

#![deny(unsafe_code)]

//! # Morsel Intelligence
//!
//! The scoring brain of the Morsel platform. Given a scanned product's
//! nutrition facts, ingredient list, and organic claim, this crate produces
//! the 0-100 health score, per-ingredient assessments, and goal-personalized
//! adjustments the app renders.
//!
//! ## Design
//!
//! - **Pure**: no I/O, no clocks, no global state. Identical inputs always
//!   produce identical outputs, so results are safe to cache and replay.
//! - **Data-driven**: the word lists that drive classification live in
//!   [`Lexicons`] as plain tables, injected through [`EngineConfig`] rather
//!   than baked into control flow.
//! - **Accumulative**: every matching rule fires and contributes its delta,
//!   reason, and flag; there are no early returns hiding later rules.
//!
//! ## Modules
//!
//! - **config**: [`EngineConfig`] with thresholds, composite tuning, lexicons
//! - **lexicons**: curated word tables and their matching rules
//! - **nutrition**: banded scoring of the macronutrient profile
//! - **additives**: risk screening of ingredient and additive lists
//! - **classifier**: per-ingredient category assessments
//! - **composite**: the full base-score pipeline
//! - **personalization**: goal-profile adjustments on top of a base score

/// Additive and ingredient risk screening
pub mod additives;

/// Per-ingredient classification against the lexicons
pub mod classifier;

/// The composite health score pipeline
pub mod composite;

/// Engine configuration: thresholds, tuning, lexicons
pub mod config;

/// Fixed rule constants (goal deltas, score bounds)
pub mod constants;

/// Curated word tables and matching
pub mod lexicons;

/// Banded nutrition scoring
pub mod nutrition;

/// Goal-based score adjustment
pub mod personalization;

pub use additives::{screen_additives, AdditiveScreen};
pub use classifier::{classify_ingredient, classify_ingredients};
pub use composite::calculate_health_score;
pub use config::{CompositeTuning, ConfigError, EngineConfig, NutritionThresholds};
pub use lexicons::Lexicons;
pub use nutrition::{score_nutrition, NutritionScore};
pub use personalization::personalize_score;
