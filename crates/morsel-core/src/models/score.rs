// ABOUTME: Score result types: grades, rule flags, component breakdowns, personalization
// ABOUTME: Wire shapes use camelCase field names matching what the mobile app renders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-tier consumer grade derived from a 0-100 score.
///
/// The app renders these as colored badges, so the tier vocabulary is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Score below 25
    Poor,
    /// Score in [25, 50)
    Mediocre,
    /// Score in [50, 75)
    Good,
    /// Score of 75 or above
    Excellent,
}

impl Grade {
    /// Bucket a score with the fixed cutoffs 75 / 50 / 25.
    ///
    /// Boundaries belong to the higher tier: a 75.0 is `Excellent`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Excellent
        } else if score >= 50.0 {
            Self::Good
        } else if score >= 25.0 {
            Self::Mediocre
        } else {
            Self::Poor
        }
    }

    /// Wire representation of this grade.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Mediocre => "mediocre",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable token naming a scoring rule that fired.
///
/// Flags are the stable contract the UI keys icons and styling off; the
/// human-readable `reasons` strings may be reworded freely, these may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFlag {
    /// Sugar above the high band edge
    HighSugar,
    /// Sugar in the moderate penalty band
    ModerateSugar,
    /// Sugar in the small-bonus band
    ModestSugar,
    /// Sugar at or below the low band edge
    LowSugar,
    /// Saturated fat at or above threshold
    HighSatFat,
    /// Sodium at or above threshold
    HighSodium,
    /// Sodium at or below the low-sodium callout
    LowSodium,
    /// Calorie-dense serving
    CalorieDense,
    /// Protein bonus fired
    ProteinRich,
    /// Fiber bonus fired
    FiberRich,
    /// First ingredient matched the whole-food lexicon
    WholeFoodFirst,
    /// Long ingredient list with processing indicators
    HighlyProcessed,
    /// One or more high-risk additives present
    HighRiskAdditives,
    /// One or more moderate-risk additives present
    ModerateRiskAdditives,
    /// Refined seed oil present
    SeedOil,
    /// Added sugar present in the ingredient list
    AddedSugar,
    /// Product carries an organic claim
    Organic,
    /// Ingredient and additive lists were both empty
    NoIngredientData,
}

impl ScoreFlag {
    /// Wire representation of this flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighSugar => "high_sugar",
            Self::ModerateSugar => "moderate_sugar",
            Self::ModestSugar => "modest_sugar",
            Self::LowSugar => "low_sugar",
            Self::HighSatFat => "high_sat_fat",
            Self::HighSodium => "high_sodium",
            Self::LowSodium => "low_sodium",
            Self::CalorieDense => "calorie_dense",
            Self::ProteinRich => "protein_rich",
            Self::FiberRich => "fiber_rich",
            Self::WholeFoodFirst => "whole_food_first",
            Self::HighlyProcessed => "highly_processed",
            Self::HighRiskAdditives => "high_risk_additives",
            Self::ModerateRiskAdditives => "moderate_risk_additives",
            Self::SeedOil => "seed_oil",
            Self::AddedSugar => "added_sugar",
            Self::Organic => "organic",
            Self::NoIngredientData => "no_ingredient_data",
        }
    }
}

impl fmt::Display for ScoreFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additive decomposition of a health score.
///
/// `nutrition_score` carries the base plus every nutrition and
/// ingredient-structure rule; `additives_score` and `organic_score` are the
/// additive-screen penalty and organic bonus. The three sum to the raw
/// composite before clamping, so `total_score` may differ from the sum when
/// the raw value left the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Base score plus nutrition and ingredient-structure rule deltas
    pub nutrition_score: f64,
    /// Additive-screen contribution, zero or negative
    pub additives_score: f64,
    /// Organic bonus, zero or positive
    pub organic_score: f64,
    /// Final clamped, rounded score
    pub total_score: f64,
    /// Signed delta applied by personalization, when goals were provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_adjustment: Option<f64>,
    /// Personalized final score, when goals were provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_total: Option<f64>,
}

/// Outcome of the goal-neutral scoring pass.
///
/// Pure function of the scan payload: the same payload always produces an
/// identical result, which is what makes cached and recorded scores safe to
/// reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Final score in [0, 100], a multiple of 0.5
    pub score: f64,
    /// Tier for `score`
    pub grade: Grade,
    /// Human-readable reason per rule fired, in rule order
    pub reasons: Vec<String>,
    /// Machine token per rule fired, in rule order
    pub flags: Vec<ScoreFlag>,
    /// Component decomposition of `score`
    #[serde(rename = "scoreBreakdown")]
    pub breakdown: ScoreBreakdown,
}

/// Outcome of applying a goal profile on top of a base score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationResult {
    /// Personalized score in [0, 100]
    pub score: f64,
    /// Tier for the personalized score
    pub grade: Grade,
    /// One reason per goal rule that fired
    pub reasons: Vec<String>,
    /// `score` minus the base score it was seeded with
    pub adjustment: f64,
}
