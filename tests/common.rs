// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides logging setup, scan payload fixtures, and goal profile helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Morsel Labs
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `morsel`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use morsel::{BodyGoal, DietGoal, HealthGoal, ScanPayload, UserGoals};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a scan payload from inline JSON; fixtures are trusted input
pub fn payload(json: &str) -> ScanPayload {
    init_test_logging();
    serde_json::from_str(json).unwrap()
}

/// A clean single-serving oat porridge: whole-food first ingredient, low
/// sugar, decent protein and fiber. Scores 81.5 under default config.
pub fn oat_porridge() -> ScanPayload {
    payload(
        r#"{
            "name": "Overnight Oat Porridge",
            "brand": "Morning Fields",
            "servingSize": "60g",
            "calories": 120,
            "protein": 10,
            "carbs": 20,
            "fat": 2.5,
            "saturatedFat": 1,
            "fiber": 5,
            "sugar": 2,
            "sodium": 50,
            "ingredients": ["oats", "water"],
            "additives": [],
            "isOrganic": false
        }"#,
    )
}

/// A heavily processed chocolate bar: fifteen ingredients, dyes, added
/// sugars. Clamps to 0 under default config.
pub fn candy_bar() -> ScanPayload {
    payload(
        r#"{
            "name": "Choco Crunch Bar",
            "brand": "SnackWorks",
            "servingSize": "1 bar (55g)",
            "calories": 450,
            "protein": 2,
            "carbs": 55,
            "fat": 20,
            "saturatedFat": 8,
            "fiber": 0,
            "sugar": 25,
            "sodium": 600,
            "ingredients": [
                "enriched flour",
                "sugar",
                "palm fat",
                "cocoa mass",
                "whey powder",
                "emulsifier",
                "red dye 40",
                "salt",
                "glucose syrup",
                "artificial flavor",
                "soy protein",
                "skim milk powder",
                "corn starch",
                "stabilizer",
                "caramel color"
            ],
            "additives": [],
            "isOrganic": false
        }"#,
    )
}

/// Goal profile with only a diet goal set
pub fn diet_profile(goal: DietGoal) -> UserGoals {
    UserGoals {
        diet_goal: Some(goal),
        ..UserGoals::default()
    }
}

/// Goal profile with only a health goal set
pub fn health_profile(goal: HealthGoal) -> UserGoals {
    UserGoals {
        health_goal: Some(goal),
        ..UserGoals::default()
    }
}

/// Goal profile with only a body goal set
pub fn body_profile(goal: BodyGoal) -> UserGoals {
    UserGoals {
        body_goal: Some(goal),
        ..UserGoals::default()
    }
}
