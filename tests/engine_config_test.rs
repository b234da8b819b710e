// ABOUTME: Integration tests for YAML engine-config overrides flowing into scoring
// ABOUTME: Overrides merge onto shipped defaults and are validated before the engine sees them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use morsel::analysis::analyze;
use morsel::config::{load_engine_config, ConfigLoadError};
use morsel::{EngineConfig, Grade, IngredientCategory, ScoreFlag};

fn load_yaml(contents: &str) -> Result<EngineConfig, ConfigLoadError> {
    common::init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    load_engine_config(Some(file.path()))
}

#[test]
fn absent_path_yields_the_shipped_defaults() {
    let config = load_engine_config(None).unwrap();
    assert_eq!(config, EngineConfig::default());

    let report = analyze(&common::oat_porridge(), None, &config);
    assert!((report.score - 81.5).abs() < f64::EPSILON);
}

#[test]
fn base_score_override_shifts_every_scan() {
    let config = load_yaml("composite:\n  base_score: 50\n").unwrap();
    let report = analyze(&common::oat_porridge(), None, &config);

    // Ten points off the base pushes the porridge out of the top tier.
    assert!((report.score - 71.5).abs() < f64::EPSILON);
    assert_eq!(report.grade, Grade::Good);
}

#[test]
fn whole_food_table_override_replaces_the_table_wholesale() {
    let config = load_yaml("lexicons:\n  whole_foods:\n    - quinoa\n").unwrap();
    let report = analyze(&common::oat_porridge(), None, &config);

    // Oats no longer count as a whole food: the first-ingredient bonus is
    // gone and the classifier falls back to the positional note.
    assert!((report.score - 75.5).abs() < f64::EPSILON);
    assert!(!report.flags.contains(&ScoreFlag::WholeFoodFirst));
    assert_eq!(
        report.ingredient_flags[0].category,
        IngredientCategory::Unclassified
    );

    // Only the overridden table changed; the others keep their defaults.
    assert!(config.lexicons.is_high_risk_additive("aspartame"));
}

#[test]
fn organic_bonus_override_still_clamps_at_one_hundred() {
    let config = load_yaml("composite:\n  organic_bonus: 20\n").unwrap();
    let mut payload = common::oat_porridge();
    payload.is_organic = true;

    let report = analyze(&payload, None, &config);
    assert!((report.score - 100.0).abs() < f64::EPSILON);
    assert!((report.breakdown.organic_score - 20.0).abs() < f64::EPSILON);
}

#[test]
fn misordered_sugar_bands_are_rejected() {
    let result = load_yaml("thresholds:\n  sugar_moderate_g: 12.0\n");
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigLoadError::Invalid(_)));
    assert!(err.to_string().contains("sugar bands"));
}

#[test]
fn malformed_yaml_is_reported_as_yaml() {
    let result = load_yaml("thresholds: [not, a, map]\n");
    assert!(matches!(result, Err(ConfigLoadError::Yaml(_))));
}

#[test]
fn missing_file_error_names_the_path() {
    common::init_test_logging();
    let missing = Path::new("/nonexistent/morsel-engine.yaml");
    let err = load_engine_config(Some(missing)).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/morsel-engine.yaml"));
}
