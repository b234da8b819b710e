// ABOUTME: Per-ingredient assessment types produced by the classifier
// ABOUTME: Category tokens are a stable UI contract; notes are free-form display text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category bucket an ingredient lands in, first match wins.
///
/// The classifier checks buckets in risk order, so an ingredient that is both
/// an added sugar and a high-risk additive reports as high-risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Matched the high-risk additive lexicon
    HighRiskAdditive,
    /// Matched the seed oil / industrial fat lexicon
    SeedOil,
    /// Matched the moderate-risk additive lexicon
    ModerateRiskAdditive,
    /// Matched the added-sugar lexicon
    AddedSugar,
    /// Matched the whole-food lexicon
    WholeFood,
    /// Unmatched, but plausibly clean given the product's organic claim
    OrganicLean,
    /// Matched nothing; note carries position- and pattern-based guidance
    Unclassified,
}

impl IngredientCategory {
    /// Wire representation of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighRiskAdditive => "high_risk_additive",
            Self::SeedOil => "seed_oil",
            Self::ModerateRiskAdditive => "moderate_risk_additive",
            Self::AddedSugar => "added_sugar",
            Self::WholeFood => "whole_food",
            Self::OrganicLean => "organic_lean",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingredient's classification for the label-detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAssessment {
    /// The ingredient as it appeared on the label, trimmed
    pub ingredient: String,
    /// Bucket it classified into
    pub category: IngredientCategory,
    /// One-line guidance shown under the ingredient
    pub note: String,
}

impl IngredientAssessment {
    /// Build an assessment, trimming the label text.
    #[must_use]
    pub fn new(ingredient: &str, category: IngredientCategory, note: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.trim().to_owned(),
            category,
            note: note.into(),
        }
    }
}
