// ABOUTME: Per-serving nutrition facts with lenient wire deserialization
// ABOUTME: Missing, null, or mistyped label quantities coerce to 0.0 instead of failing the scan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use serde::{Deserialize, Serialize};

use super::de;

/// Per-serving nutrition facts as read off a product label.
///
/// All quantities are per serving: grams for macronutrients, milligrams for
/// sodium, kilocalories for energy. A value of `0.0` means "absent or
/// unreadable" as well as "genuinely zero"; scoring treats both the same,
/// which keeps a half-scanned label from being punished for missing data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionFacts {
    /// Energy per serving (kcal)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub calories: f64,
    /// Protein per serving (g)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub protein: f64,
    /// Total carbohydrate per serving (g)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub carbs: f64,
    /// Total fat per serving (g)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub fat: f64,
    /// Saturated fat per serving (g)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub saturated_fat: f64,
    /// Dietary fiber per serving (g)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub fiber: f64,
    /// Total sugar per serving (g)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub sugar: f64,
    /// Sodium per serving (mg)
    #[serde(deserialize_with = "de::lenient_quantity")]
    pub sodium: f64,
}

impl NutritionFacts {
    /// Return a copy with every quantity forced into the valid range.
    ///
    /// Deserialization already sanitizes wire input; this covers facts built
    /// directly in code so the scoring math never sees negatives or NaN.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            calories: de::sanitize_quantity(self.calories),
            protein: de::sanitize_quantity(self.protein),
            carbs: de::sanitize_quantity(self.carbs),
            fat: de::sanitize_quantity(self.fat),
            saturated_fat: de::sanitize_quantity(self.saturated_fat),
            fiber: de::sanitize_quantity(self.fiber),
            sugar: de::sanitize_quantity(self.sugar),
            sodium: de::sanitize_quantity(self.sodium),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_names() {
        let facts: NutritionFacts = serde_json::from_str(
            r#"{"calories":150,"protein":5,"carbs":27,"fat":3,"saturatedFat":0.5,"fiber":4,"sugar":1,"sodium":10}"#,
        )
        .unwrap();
        assert!((facts.saturated_fat - 0.5).abs() < f64::EPSILON);
        assert!((facts.fiber - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let facts: NutritionFacts = serde_json::from_str(r#"{"sugar":12}"#).unwrap();
        assert!((facts.sugar - 12.0).abs() < f64::EPSILON);
        assert!(facts.protein.abs() < f64::EPSILON);
        assert!(facts.sodium.abs() < f64::EPSILON);
    }

    #[test]
    fn mistyped_fields_coerce_instead_of_failing() {
        let facts: NutritionFacts = serde_json::from_str(
            r#"{"calories":"150","protein":null,"carbs":true,"sugar":"not a number"}"#,
        )
        .unwrap();
        assert!((facts.calories - 150.0).abs() < f64::EPSILON);
        assert!(facts.protein.abs() < f64::EPSILON);
        assert!(facts.carbs.abs() < f64::EPSILON);
        assert!(facts.sugar.abs() < f64::EPSILON);
    }

    #[test]
    fn sanitized_zeroes_negatives_and_non_finite() {
        let facts = NutritionFacts {
            sugar: -3.0,
            sodium: f64::NAN,
            protein: 8.0,
            ..NutritionFacts::default()
        };
        let clean = facts.sanitized();
        assert!(clean.sugar.abs() < f64::EPSILON);
        assert!(clean.sodium.abs() < f64::EPSILON);
        assert!((clean.protein - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let facts = NutritionFacts {
            saturated_fat: 1.5,
            ..NutritionFacts::default()
        };
        let value = serde_json::to_value(facts).unwrap();
        assert!(value.get("saturatedFat").is_some());
        assert!(value.get("saturated_fat").is_none());
    }
}
