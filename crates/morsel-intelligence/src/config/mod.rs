// ABOUTME: Engine configuration: nutrition band thresholds, composite tuning, lexicons
// ABOUTME: Defaults reproduce the shipped scoring rules; validate() guards any override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Engine Configuration
//!
//! Every number the scoring rules compare against or add lives here, so the
//! rule control flow stays fixed while product tunes the curve. `Default`
//! reproduces the shipped behavior exactly; deserialized overrides merge
//! field-by-field on top of those defaults and must pass [`EngineConfig::validate`]
//! before use.

mod error;

use serde::{Deserialize, Serialize};

pub use self::error::ConfigError;
pub use crate::lexicons::Lexicons;

/// Band edges, slopes, and caps for the nutrition scoring pass.
///
/// Penalty rules ramp linearly from their band edge and saturate at the cap;
/// bonus rules mirror that shape. Units follow the label: grams for
/// macronutrients, milligrams for sodium, kilocalories for energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionThresholds {
    /// Sugar above this is the high band: 10.5
    pub sugar_high_g: f64,
    /// Penalty per gram over the high edge: 3.0
    pub sugar_high_rate: f64,
    /// High-band penalty cap: 35.0
    pub sugar_high_cap: f64,
    /// Sugar above this (up to the high edge) is the moderate band: 6.0
    pub sugar_moderate_g: f64,
    /// Penalty per gram over the moderate edge: 2.2
    pub sugar_moderate_rate: f64,
    /// Moderate-band penalty cap: 10.0
    pub sugar_moderate_cap: f64,
    /// Sugar above this (up to the moderate edge) earns the small bonus: 3.0
    pub sugar_modest_g: f64,
    /// Small-bonus amount: 3.0
    pub sugar_modest_bonus: f64,
    /// Bonus when sugar is at or below the modest edge: 8.0
    pub sugar_low_bonus: f64,

    /// Saturated fat at or above this is penalized: 5.0
    pub sat_fat_high_g: f64,
    /// Penalty per gram over the edge: 3.0
    pub sat_fat_rate: f64,
    /// Saturated-fat penalty cap: 15.0
    pub sat_fat_cap: f64,

    /// Sodium at or above this is penalized: 400.0
    pub sodium_high_mg: f64,
    /// Milligrams of sodium per penalty point: 50.0
    pub sodium_divisor: f64,
    /// Sodium penalty cap: 12.0
    pub sodium_cap: f64,
    /// Sodium at or below this earns a reason-only callout: 140.0
    pub sodium_low_mg: f64,

    /// Calories at or above this are penalized: 300.0
    pub calorie_dense_kcal: f64,
    /// Kilocalories per penalty point: 30.0
    pub calorie_divisor: f64,
    /// Calorie penalty cap: 10.0
    pub calorie_cap: f64,

    /// Protein at or above this earns the bonus ramp: 8.0
    pub protein_rich_g: f64,
    /// Bonus per gram over the edge: 2.5
    pub protein_rate: f64,
    /// Protein bonus cap: 20.0
    pub protein_cap: f64,

    /// Fiber at or above this earns the bonus ramp: 4.0
    pub fiber_rich_g: f64,
    /// Bonus per gram over the edge: 2.5
    pub fiber_rate: f64,
    /// Fiber bonus cap: 10.0
    pub fiber_cap: f64,
}

impl Default for NutritionThresholds {
    fn default() -> Self {
        Self {
            sugar_high_g: 10.5,
            sugar_high_rate: 3.0,
            sugar_high_cap: 35.0,
            sugar_moderate_g: 6.0,
            sugar_moderate_rate: 2.2,
            sugar_moderate_cap: 10.0,
            sugar_modest_g: 3.0,
            sugar_modest_bonus: 3.0,
            sugar_low_bonus: 8.0,
            sat_fat_high_g: 5.0,
            sat_fat_rate: 3.0,
            sat_fat_cap: 15.0,
            sodium_high_mg: 400.0,
            sodium_divisor: 50.0,
            sodium_cap: 12.0,
            sodium_low_mg: 140.0,
            calorie_dense_kcal: 300.0,
            calorie_divisor: 30.0,
            calorie_cap: 10.0,
            protein_rich_g: 8.0,
            protein_rate: 2.5,
            protein_cap: 20.0,
            fiber_rich_g: 4.0,
            fiber_rate: 2.5,
            fiber_cap: 10.0,
        }
    }
}

impl NutritionThresholds {
    /// Check ordering and positivity of every band parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sugar_modest_g >= self.sugar_moderate_g
            || self.sugar_moderate_g >= self.sugar_high_g
        {
            return Err(ConfigError::InvalidRange(
                "sugar bands must satisfy modest < moderate < high",
            ));
        }
        if self.sodium_low_mg >= self.sodium_high_mg {
            return Err(ConfigError::InvalidRange(
                "sodium_low_mg must be below sodium_high_mg",
            ));
        }
        let positives = [
            (self.sugar_high_rate, "sugar_high_rate must be positive"),
            (self.sugar_moderate_rate, "sugar_moderate_rate must be positive"),
            (self.sat_fat_rate, "sat_fat_rate must be positive"),
            (self.sodium_divisor, "sodium_divisor must be positive"),
            (self.calorie_divisor, "calorie_divisor must be positive"),
            (self.protein_rate, "protein_rate must be positive"),
            (self.fiber_rate, "fiber_rate must be positive"),
            (self.sugar_high_cap, "sugar_high_cap must be positive"),
            (self.sugar_moderate_cap, "sugar_moderate_cap must be positive"),
            (self.sat_fat_cap, "sat_fat_cap must be positive"),
            (self.sodium_cap, "sodium_cap must be positive"),
            (self.calorie_cap, "calorie_cap must be positive"),
            (self.protein_cap, "protein_cap must be positive"),
            (self.fiber_cap, "fiber_cap must be positive"),
        ];
        for (value, message) in positives {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }
        if self.sugar_modest_bonus < 0.0 || self.sugar_low_bonus < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sugar bonuses must not be negative",
            ));
        }
        Ok(())
    }
}

/// Tuning knobs for the composite pass: base score, structural bonuses and
/// penalties, additive-screen pricing, organic bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeTuning {
    /// Starting score before any rule fires: 60.0
    pub base_score: f64,
    /// Bonus when the first ingredient is a whole food: 6.0
    pub first_ingredient_bonus: f64,
    /// Penalty for a long, processed ingredient list: 8.0
    pub overprocessed_penalty: f64,
    /// List length that must be exceeded for that penalty: 12
    pub overprocessed_min_ingredients: usize,
    /// Penalty per high-risk additive match: 15.0
    pub high_risk_penalty: f64,
    /// Total high-risk penalty cap: 30.0
    pub high_risk_cap: f64,
    /// Penalty per moderate-risk additive match: 8.0
    pub moderate_risk_penalty: f64,
    /// Total moderate-risk penalty cap: 24.0
    pub moderate_risk_cap: f64,
    /// Flat penalty when any seed oil is present: 5.0
    pub seed_oil_penalty: f64,
    /// Bonus for an organic claim: 10.0
    pub organic_bonus: f64,
}

impl Default for CompositeTuning {
    fn default() -> Self {
        Self {
            base_score: 60.0,
            first_ingredient_bonus: 6.0,
            overprocessed_penalty: 8.0,
            overprocessed_min_ingredients: 12,
            high_risk_penalty: 15.0,
            high_risk_cap: 30.0,
            moderate_risk_penalty: 8.0,
            moderate_risk_cap: 24.0,
            seed_oil_penalty: 5.0,
            organic_bonus: 10.0,
        }
    }
}

impl CompositeTuning {
    /// Check every tuning value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.base_score) {
            return Err(ConfigError::ValueOutOfRange(
                "base_score must be within [0, 100]",
            ));
        }
        let amounts = [
            self.first_ingredient_bonus,
            self.overprocessed_penalty,
            self.high_risk_penalty,
            self.high_risk_cap,
            self.moderate_risk_penalty,
            self.moderate_risk_cap,
            self.seed_oil_penalty,
            self.organic_bonus,
        ];
        if amounts.iter().any(|value| *value < 0.0 || !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "composite bonuses and penalties must be non-negative",
            ));
        }
        Ok(())
    }
}

/// The complete engine configuration.
///
/// Construct with `EngineConfig::default()` for shipped behavior, or
/// deserialize a partial override; either way call [`Self::validate`] before
/// handing it to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Nutrition band edges, rates, and caps
    pub thresholds: NutritionThresholds,
    /// Composite pass tuning
    pub composite: CompositeTuning,
    /// Word tables for classification and screening
    pub lexicons: Lexicons,
}

impl EngineConfig {
    /// Validate thresholds, tuning, and lexicons together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.composite.validate()?;
        validate_lexicons(&self.lexicons)
    }
}

fn validate_lexicons(lexicons: &Lexicons) -> Result<(), ConfigError> {
    let tables: [(&[String], &'static str, &'static str); 11] = [
        (
            &lexicons.high_risk_additives,
            "high_risk_additives is empty",
            "high_risk_additives contains a blank entry",
        ),
        (
            &lexicons.moderate_risk_additives,
            "moderate_risk_additives is empty",
            "moderate_risk_additives contains a blank entry",
        ),
        (
            &lexicons.seed_oils,
            "seed_oils is empty",
            "seed_oils contains a blank entry",
        ),
        (
            &lexicons.added_sugars,
            "added_sugars is empty",
            "added_sugars contains a blank entry",
        ),
        (
            &lexicons.natural_sweeteners,
            "natural_sweeteners is empty",
            "natural_sweeteners contains a blank entry",
        ),
        (
            &lexicons.whole_foods,
            "whole_foods is empty",
            "whole_foods contains a blank entry",
        ),
        (
            &lexicons.processing_indicators,
            "processing_indicators is empty",
            "processing_indicators contains a blank entry",
        ),
        (
            &lexicons.refined_indicators,
            "refined_indicators is empty",
            "refined_indicators contains a blank entry",
        ),
        (
            &lexicons.meat_and_fish,
            "meat_and_fish is empty",
            "meat_and_fish contains a blank entry",
        ),
        (
            &lexicons.dairy_egg_honey,
            "dairy_egg_honey is empty",
            "dairy_egg_honey contains a blank entry",
        ),
        (
            &lexicons.gluten_sources,
            "gluten_sources is empty",
            "gluten_sources contains a blank entry",
        ),
    ];
    for (table, empty_message, blank_message) in tables {
        if table.is_empty() {
            return Err(ConfigError::InvalidLexicon(empty_message));
        }
        if table.iter().any(|entry| entry.trim().is_empty()) {
            return Err(ConfigError::InvalidLexicon(blank_message));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn misordered_sugar_bands_fail() {
        let config = EngineConfig {
            thresholds: NutritionThresholds {
                sugar_moderate_g: 11.0,
                ..NutritionThresholds::default()
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn zero_divisor_fails() {
        let config = EngineConfig {
            thresholds: NutritionThresholds {
                sodium_divisor: 0.0,
                ..NutritionThresholds::default()
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn base_score_outside_range_fails() {
        let config = EngineConfig {
            composite: CompositeTuning {
                base_score: 140.0,
                ..CompositeTuning::default()
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn empty_lexicon_fails() {
        let mut config = EngineConfig::default();
        config.lexicons.whole_foods.clear();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid lexicon: whole_foods is empty");
    }

    #[test]
    fn blank_lexicon_entry_fails() {
        let mut config = EngineConfig::default();
        config.lexicons.seed_oils.push("   ".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLexicon(_))
        ));
    }

    #[test]
    fn partial_override_merges_onto_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"thresholds":{"sugar_high_g":12.0}}"#).unwrap();
        assert!((config.thresholds.sugar_high_g - 12.0).abs() < f64::EPSILON);
        assert!((config.thresholds.sugar_high_rate - 3.0).abs() < f64::EPSILON);
        assert!((config.composite.base_score - 60.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }
}
