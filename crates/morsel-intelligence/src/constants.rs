// ABOUTME: Fixed rule constants: score bounds, classifier positions, per-goal adjustment deltas
// ABOUTME: Goal deltas are product-defined contract values, not tunables, hence constants not config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Fixed constants of the scoring rules.
//!
//! Unlike the thresholds in [`crate::config`], these values are part of the
//! product contract with the app: goal adjustments are quoted in marketing
//! copy and UI explanations, so changing one is a product decision, not a
//! tuning pass.

/// Bounds of the score domain.
pub mod score_bounds {
    /// Lowest score the engine emits
    pub const MIN_SCORE: f64 = 0.0;

    /// Highest score the engine emits
    pub const MAX_SCORE: f64 = 100.0;
}

/// Positional rules for the ingredient classifier.
pub mod classifier {
    /// List positions treated as primary ingredients (label order is by
    /// abundance, so the first few dominate the product)
    pub const PRIMARY_POSITIONS: usize = 3;
}

/// Score deltas applied per user goal.
///
/// All deltas are positive numbers; the rule decides whether to add or
/// subtract. Within one analysis every matching rule fires and the deltas
/// sum.
pub mod goal_rules {
    /// Whole-foods diet: ingredient count above this is penalized
    pub const WHOLE_FOODS_MAX_INGREDIENTS: usize = 8;
    /// Whole-foods diet: penalty for the long ingredient list
    pub const WHOLE_FOODS_LIST_PENALTY: f64 = 20.0;
    /// Whole-foods diet: penalty when any declared additive is present
    pub const WHOLE_FOODS_ADDITIVE_PENALTY: f64 = 15.0;

    /// Vegan diet: penalty when any animal product is found
    pub const VEGAN_PENALTY: f64 = 40.0;
    /// Vegetarian diet: penalty when meat or fish is found
    pub const VEGETARIAN_PENALTY: f64 = 35.0;
    /// Gluten-free diet: penalty when a gluten source is found
    pub const GLUTEN_FREE_PENALTY: f64 = 30.0;

    /// Keto: carbs above this are disqualifying
    pub const KETO_CARB_LIMIT_G: f64 = 5.0;
    /// Keto: penalty for exceeding the carb limit
    pub const KETO_CARB_PENALTY: f64 = 25.0;
    /// Keto: fat above this earns the bonus
    pub const KETO_FAT_TARGET_G: f64 = 10.0;
    /// Keto: bonus for a fat-forward profile
    pub const KETO_FAT_BONUS: f64 = 15.0;

    /// Low-sugar: sugar above this is penalized
    pub const LOW_SUGAR_LIMIT_G: f64 = 5.0;
    /// Low-sugar: first-step penalty
    pub const LOW_SUGAR_PENALTY: f64 = 20.0;
    /// Low-sugar: sugar above this stacks the heavy penalty
    pub const LOW_SUGAR_HEAVY_G: f64 = 15.0;
    /// Low-sugar: additional heavy penalty
    pub const LOW_SUGAR_HEAVY_PENALTY: f64 = 30.0;

    /// Low-fat: fat above this is penalized
    pub const LOW_FAT_LIMIT_G: f64 = 5.0;
    /// Low-fat: first-step penalty
    pub const LOW_FAT_PENALTY: f64 = 15.0;
    /// Low-fat: fat above this stacks the heavy penalty
    pub const LOW_FAT_HEAVY_G: f64 = 10.0;
    /// Low-fat: additional heavy penalty
    pub const LOW_FAT_HEAVY_PENALTY: f64 = 25.0;

    /// High-protein: protein above this earns the bonus
    pub const HIGH_PROTEIN_TARGET_G: f64 = 15.0;
    /// High-protein: bonus amount
    pub const HIGH_PROTEIN_BONUS: f64 = 20.0;
    /// High-protein: protein below this is penalized
    pub const HIGH_PROTEIN_FLOOR_G: f64 = 5.0;
    /// High-protein: shortfall penalty
    pub const HIGH_PROTEIN_SHORTFALL_PENALTY: f64 = 15.0;

    /// Lose-weight: calories above this are penalized
    pub const LOSE_WEIGHT_CALORIE_LIMIT: f64 = 150.0;
    /// Lose-weight: first-step penalty
    pub const LOSE_WEIGHT_PENALTY: f64 = 15.0;
    /// Lose-weight: calories above this stack the heavy penalty
    pub const LOSE_WEIGHT_HEAVY_CALORIES: f64 = 250.0;
    /// Lose-weight: additional heavy penalty
    pub const LOSE_WEIGHT_HEAVY_PENALTY: f64 = 25.0;

    /// Gain-muscle: protein above this earns the bonus
    pub const GAIN_MUSCLE_PROTEIN_TARGET_G: f64 = 10.0;
    /// Gain-muscle: bonus amount
    pub const GAIN_MUSCLE_BONUS: f64 = 15.0;
    /// Gain-muscle: protein below this is penalized
    pub const GAIN_MUSCLE_PROTEIN_FLOOR_G: f64 = 5.0;
    /// Gain-muscle: shortfall penalty
    pub const GAIN_MUSCLE_SHORTFALL_PENALTY: f64 = 20.0;
}
