// ABOUTME: Core types for the Morsel food health scoring engine
// ABOUTME: Foundation crate with scan payloads, goal profiles, score results, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

#![deny(unsafe_code)]

//! # Morsel Core
//!
//! Foundation crate providing the shared data model for the Morsel food health
//! scoring engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Payload-level error handling (`PayloadError`)
//! - **models**: Scan payloads, nutrition facts, goal profiles, and score results
//!
//! All wire-facing types round-trip through `serde` using the camelCase field
//! names the mobile app emits, and deserialization is deliberately lenient:
//! a scanned label with missing or mistyped fields degrades to neutral values
//! instead of failing the scan.

/// Payload-level error handling for scan ingestion
pub mod errors;

/// Core data models (`ScanPayload`, `NutritionFacts`, `UserGoals`, score results)
pub mod models;

pub use errors::PayloadError;
pub use models::{
    AnalysisReport, Grade, IngredientAssessment, IngredientCategory, NutritionFacts,
    PersonalizationResult, ScanPayload, ScanRecord, ScoreBreakdown, ScoreFlag, ScoringResult,
    UserGoals,
};
