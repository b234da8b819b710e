// ABOUTME: Integration tests for hostile scanner output and the record contract
// ABOUTME: Lenient coercion keeps messy labels scoreable; only structural failures are fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use morsel::analysis::{analyze, record};
use morsel::ingest::{parse_payload, parse_payloads};
use morsel::{EngineConfig, PayloadError};

#[test]
fn string_quantities_parse_like_numbers() {
    let payload = common::payload(
        r#"{
            "name": "Trail Mix",
            "calories": "250",
            "sugar": " 12.5 ",
            "saturatedFat": "3"
        }"#,
    );
    assert!((payload.nutrition.calories - 250.0).abs() < f64::EPSILON);
    assert!((payload.nutrition.sugar - 12.5).abs() < f64::EPSILON);
    assert!((payload.nutrition.saturated_fat - 3.0).abs() < f64::EPSILON);
}

#[test]
fn mistyped_fields_coerce_to_neutral_values() {
    let payload = common::payload(
        r#"{
            "name": 42,
            "brand": null,
            "calories": null,
            "protein": true,
            "carbs": {"value": 20},
            "ingredients": "oats, water",
            "additives": null,
            "isOrganic": 1
        }"#,
    );

    assert_eq!(payload.name, None);
    assert_eq!(payload.display_name(), "Unknown product");
    assert!(payload.nutrition.calories.abs() < f64::EPSILON);
    assert!(payload.nutrition.protein.abs() < f64::EPSILON);
    assert!(payload.nutrition.carbs.abs() < f64::EPSILON);
    assert!(payload.ingredients.is_empty());
    assert!(payload.additives.is_empty());
    assert!(!payload.is_organic);
}

#[test]
fn negative_quantities_read_as_absent() {
    let payload = common::payload(
        r#"{
            "name": "Mislabeled Bar",
            "sugar": -5,
            "sodium": "-200"
        }"#,
    );
    assert!(payload.nutrition.sugar.abs() < f64::EPSILON);
    assert!(payload.nutrition.sodium.abs() < f64::EPSILON);

    // With every quantity neutralized the scan scores like an empty label.
    let report = analyze(&payload, None, &EngineConfig::default());
    assert!((report.score - 68.0).abs() < f64::EPSILON);
}

#[test]
fn list_entries_that_are_not_strings_are_dropped() {
    let payload = common::payload(
        r#"{
            "name": "Oat Drink",
            "ingredients": ["oats", 42, null, "  water  ", ""]
        }"#,
    );
    assert_eq!(payload.ingredients, vec!["oats", "water"]);

    let report = analyze(&payload, None, &EngineConfig::default());
    assert!(report
        .reasons
        .iter()
        .any(|reason| reason == "First ingredient is a whole food (oats)"));
}

#[test]
fn organic_flag_tolerates_scanner_string_forms() {
    for (raw, expected) in [
        (r#"{"isOrganic": true}"#, true),
        (r#"{"isOrganic": "TRUE "}"#, true),
        (r#"{"isOrganic": "false"}"#, false),
        (r#"{"isOrganic": "yes"}"#, false),
        (r#"{"isOrganic": 1}"#, false),
    ] {
        assert_eq!(common::payload(raw).is_organic, expected, "input: {raw}");
    }
}

#[test]
fn lone_objects_and_arrays_share_one_entry_point() {
    let single = parse_payloads(r#"{"name": "Solo Snack"}"#).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].name.as_deref(), Some("Solo Snack"));

    let batch = parse_payloads(r#"[{"name": "First"}, {"name": "Second"}]"#).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].name.as_deref(), Some("First"));
    assert_eq!(batch[1].name.as_deref(), Some("Second"));
}

#[test]
fn malformed_json_is_the_only_fatal_parse_error() {
    common::init_test_logging();
    assert!(matches!(
        parse_payload("{not json"),
        Err(PayloadError::Json(_))
    ));

    // Structurally valid but content-free input still parses.
    let payload = parse_payload("{}").unwrap();
    assert_eq!(payload, morsel::ScanPayload::default());
}

#[test]
fn records_demand_a_product_name() {
    let config = EngineConfig::default();

    let nameless = common::payload("{}");
    assert!(matches!(
        record(&nameless, None, &config),
        Err(PayloadError::MissingField("name"))
    ));

    let blank = common::payload(r#"{"name": "   "}"#);
    assert!(matches!(
        record(&blank, None, &config),
        Err(PayloadError::MissingField("name"))
    ));

    let named = record(&common::oat_porridge(), None, &config).unwrap();
    assert_eq!(named.name, "Overnight Oat Porridge");
}

#[test]
fn two_records_of_one_scan_differ_only_in_identity() {
    let config = EngineConfig::default();
    let payload = common::oat_porridge();

    let first = record(&payload, None, &config).unwrap();
    let second = record(&payload, None, &config).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, second.name);
    assert_eq!(first.report, second.report);
}

#[test]
fn records_serialize_with_the_app_wire_names() {
    let config = EngineConfig::default();
    let scan = record(&common::oat_porridge(), None, &config).unwrap();
    let json = serde_json::to_value(&scan).unwrap();

    assert!(json.get("id").is_some());
    assert_eq!(json["name"], "Overnight Oat Porridge");
    assert_eq!(json["servingSize"], "60g");
    assert!(json.get("analyzedAt").is_some());
    assert!(json["report"].get("scoreBreakdown").is_some());

    // The scan never had a barcode, so the key stays off the wire entirely.
    assert!(json.get("barcode").is_none());
}
