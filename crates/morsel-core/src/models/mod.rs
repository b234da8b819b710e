// ABOUTME: Core data models for the Morsel scoring engine
// ABOUTME: Re-exports scan payloads, nutrition facts, goal profiles, and score result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Data models shared across the Morsel workspace.
//!
//! Everything here is a plain value type: no I/O, no clocks, no hidden state.
//! The scoring engine consumes these and produces more of them, which keeps
//! every analysis replayable from its inputs.

/// Lenient deserialization helpers shared by the wire-facing models
pub(crate) mod de;

/// Per-serving nutrition facts with lenient numeric coercion
pub mod nutrition;

/// User goal profile and its closed goal vocabularies
pub mod goals;

/// Score results: grades, flags, breakdowns, personalization
pub mod score;

/// Per-ingredient assessment categories and notes
pub mod ingredient;

/// Scan payloads from the mobile app and immutable scan records
pub mod scan;

/// The combined analysis report returned to callers
pub mod report;

pub use goals::{BodyGoal, DietGoal, GoalValue, HealthGoal, LifeGoal, Motivation, UserGoals};
pub use ingredient::{IngredientAssessment, IngredientCategory};
pub use nutrition::NutritionFacts;
pub use report::AnalysisReport;
pub use scan::{ScanPayload, ScanRecord};
pub use score::{Grade, PersonalizationResult, ScoreBreakdown, ScoreFlag, ScoringResult};
