// ABOUTME: JSON ingestion for scan payloads and goal profiles coming off the app wire
// ABOUTME: Accepts a single object or an array of objects; field-level repair lives in the models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Payload ingestion.
//!
//! The scanner app ships whatever its OCR and barcode lookups produced, so
//! the only hard failure here is JSON that does not parse at all. Wrong types,
//! missing fields, and junk entries are repaired field by field during
//! deserialization (see `morsel_core::models`).

use morsel_core::models::{ScanPayload, UserGoals};
use morsel_core::PayloadError;

/// Parse a single scan payload from a JSON object.
pub fn parse_payload(raw: &str) -> Result<ScanPayload, PayloadError> {
    let payload = serde_json::from_str(raw)?;
    Ok(payload)
}

/// Parse one or many scan payloads.
///
/// A JSON array parses as a batch; a lone object parses as a batch of one.
/// The array shape is tried first because a payload object can never
/// deserialize from a sequence.
pub fn parse_payloads(raw: &str) -> Result<Vec<ScanPayload>, PayloadError> {
    match serde_json::from_str::<Vec<ScanPayload>>(raw) {
        Ok(batch) => Ok(batch),
        Err(_) => parse_payload(raw).map(|payload| vec![payload]),
    }
}

/// Parse a goal profile from a JSON object.
///
/// Unknown goal values on any axis collapse to `None` rather than failing,
/// so a profile saved by a newer app version still parses here.
pub fn parse_goals(raw: &str) -> Result<UserGoals, PayloadError> {
    let goals = serde_json::from_str(raw)?;
    Ok(goals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morsel_core::models::{BodyGoal, DietGoal};

    #[test]
    fn single_object_parses() {
        let payload = parse_payload(r#"{"name": "Granola", "sugar": 12}"#).unwrap();
        assert_eq!(payload.display_name(), "Granola");
        assert!((payload.nutrition.sugar - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_json_is_the_only_hard_failure() {
        let err = parse_payload("{not json").unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
    }

    #[test]
    fn array_parses_as_batch() {
        let batch = parse_payloads(r#"[{"name": "a"}, {"name": "b"}, {"name": "c"}]"#).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[2].display_name(), "c");
    }

    #[test]
    fn lone_object_parses_as_batch_of_one() {
        let batch = parse_payloads(r#"{"name": "solo", "calories": "250"}"#).unwrap();
        assert_eq!(batch.len(), 1);
        assert!((batch[0].nutrition.calories - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_array_is_an_empty_batch() {
        assert!(parse_payloads("[]").unwrap().is_empty());
    }

    #[test]
    fn goals_parse_with_unknown_values_dropped() {
        let goals =
            parse_goals(r#"{"dietGoal": "vegan", "bodyGoal": "lose_weight", "healthGoal": "paleo"}"#)
                .unwrap();
        assert_eq!(goals.diet_goal, Some(DietGoal::Vegan));
        assert_eq!(goals.body_goal, Some(BodyGoal::LoseWeight));
        assert_eq!(goals.health_goal, None);
    }

    #[test]
    fn empty_goal_object_is_an_empty_profile() {
        let goals = parse_goals("{}").unwrap();
        assert!(goals.is_empty());
    }
}
