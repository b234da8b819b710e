// ABOUTME: Per-ingredient classification for the label-detail screen
// ABOUTME: Buckets are checked in risk order; the first matching bucket wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Ingredient classification pass.
//!
//! Each ingredient lands in exactly one category. The check order runs from
//! the most to the least concerning bucket, so an ingredient that is both an
//! added sugar and a high-risk additive reports the scarier truth. Anything
//! unmatched falls through to positional and pattern heuristics that decide
//! how pointed the guidance note should be.

use morsel_core::models::{IngredientAssessment, IngredientCategory};

use crate::constants::classifier::PRIMARY_POSITIONS;
use crate::lexicons::Lexicons;

/// Classify a full ingredient list in label order.
///
/// An empty list yields one placeholder assessment rather than an empty
/// vector, so the UI always has something honest to show.
#[must_use]
pub fn classify_ingredients(
    ingredients: &[String],
    is_organic: bool,
    lexicons: &Lexicons,
) -> Vec<IngredientAssessment> {
    if ingredients.is_empty() {
        return vec![IngredientAssessment::new(
            "unknown",
            IngredientCategory::Unclassified,
            "No ingredient data available",
        )];
    }
    ingredients
        .iter()
        .enumerate()
        .map(|(position, ingredient)| {
            classify_ingredient(ingredient, position, is_organic, lexicons)
        })
        .collect()
}

/// Classify one ingredient given its zero-based label position.
#[must_use]
pub fn classify_ingredient(
    ingredient: &str,
    position: usize,
    is_organic: bool,
    lexicons: &Lexicons,
) -> IngredientAssessment {
    let label = ingredient.trim();

    if lexicons.is_high_risk_additive(label) {
        return IngredientAssessment::new(
            label,
            IngredientCategory::HighRiskAdditive,
            format!("{label} is a high-risk additive linked to adverse health effects"),
        );
    }
    if lexicons.is_seed_oil(label) {
        return IngredientAssessment::new(
            label,
            IngredientCategory::SeedOil,
            "Refined seed oil, high in omega-6 fats",
        );
    }
    if lexicons.is_moderate_risk_additive(label) {
        return IngredientAssessment::new(
            label,
            IngredientCategory::ModerateRiskAdditive,
            "Processed additive, generally fine in moderation",
        );
    }
    if lexicons.is_added_sugar(label) {
        let note = if lexicons.is_natural_sweetener(label) {
            "Natural sweetener, but still an added sugar"
        } else {
            "Refined added sugar"
        };
        return IngredientAssessment::new(label, IngredientCategory::AddedSugar, note);
    }
    if lexicons.is_whole_food(label) {
        return IngredientAssessment::new(
            label,
            IngredientCategory::WholeFood,
            "Recognized whole food",
        );
    }
    if is_organic && !lexicons.looks_refined(label) {
        return IngredientAssessment::new(
            label,
            IngredientCategory::OrganicLean,
            "Unrecognized, but likely minimally processed given the organic certification",
        );
    }

    classify_unmatched(label, position)
}

/// Positional and pattern heuristics for ingredients no lexicon claimed.
fn classify_unmatched(label: &str, position: usize) -> IngredientAssessment {
    let lowered = label.to_lowercase();
    let suspicious = ["modified", "artificial", "enriched"]
        .iter()
        .any(|pattern| lowered.contains(pattern));

    let note = if position < PRIMARY_POSITIONS && !suspicious {
        "Primary ingredient; judge it against your own goals".to_owned()
    } else if lowered.contains("enriched") || lowered.contains("fortified") {
        "Enriched or fortified: nutrients were stripped in processing and added back".to_owned()
    } else if lowered.contains("modified") {
        "Chemically or physically modified from its source food".to_owned()
    } else if lowered.contains("concentrate") || lowered.contains("isolate") {
        "A heavily refined fraction of its source food".to_owned()
    } else {
        "Not recognized; check the label if this ingredient matters to you".to_owned()
    };

    IngredientAssessment::new(label, IngredientCategory::Unclassified, note)
}
