// ABOUTME: Goal-profile adjustments applied on top of a base health score
// ABOUTME: Every matching goal rule fires and sums; clamping happens once at the exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Personalization pass.
//!
//! Takes the goal-neutral base score and one user's goal profile and applies
//! the per-goal rules from [`crate::constants::goal_rules`]. Rules across
//! axes are independent and additive: a vegan keto user can lose 40 for milk
//! and gain 15 for fat content in the same pass. Life goal and motivation
//! are carried in the profile but attach no rules.

use morsel_core::models::{
    BodyGoal, DietGoal, Grade, HealthGoal, NutritionFacts, PersonalizationResult, UserGoals,
};

use crate::config::EngineConfig;
use crate::constants::goal_rules;
use crate::constants::score_bounds::{MAX_SCORE, MIN_SCORE};

/// Adjust a base score for one user's goals.
///
/// The returned adjustment is `score - base_score` *after* clamping, so a
/// heavily penalized product near the floor reports the adjustment that was
/// actually applied, not the nominal rule sum.
#[must_use]
pub fn personalize_score(
    base_score: f64,
    facts: &NutritionFacts,
    ingredients: &[String],
    additives: &[String],
    goals: &UserGoals,
    config: &EngineConfig,
) -> PersonalizationResult {
    let facts = facts.sanitized();
    let mut score = base_score;
    let mut reasons = Vec::new();

    if let Some(diet) = goals.diet_goal {
        apply_diet_rules(diet, ingredients, additives, config, &mut score, &mut reasons);
    }
    if let Some(health) = goals.health_goal {
        apply_health_rules(health, &facts, &mut score, &mut reasons);
    }
    if let Some(body) = goals.body_goal {
        apply_body_rules(body, &facts, &mut score, &mut reasons);
    }

    let final_score = score.clamp(MIN_SCORE, MAX_SCORE);
    let adjustment = final_score - base_score;
    let grade = Grade::from_score(final_score);

    tracing::debug!(
        base_score,
        personal_score = final_score,
        adjustment,
        rules_fired = reasons.len(),
        "personalized score computed"
    );

    PersonalizationResult {
        score: final_score,
        grade,
        reasons,
        adjustment,
    }
}

fn apply_diet_rules(
    diet: DietGoal,
    ingredients: &[String],
    additives: &[String],
    config: &EngineConfig,
    score: &mut f64,
    reasons: &mut Vec<String>,
) {
    match diet {
        DietGoal::WholeFoods => {
            if ingredients.len() > goal_rules::WHOLE_FOODS_MAX_INGREDIENTS {
                *score -= goal_rules::WHOLE_FOODS_LIST_PENALTY;
                reasons.push(format!(
                    "Long ingredient list ({} items) for a whole-foods diet",
                    ingredients.len()
                ));
            }
            if !additives.is_empty() {
                *score -= goal_rules::WHOLE_FOODS_ADDITIVE_PENALTY;
                reasons.push("Contains additives, which a whole-foods diet avoids".to_owned());
            }
        }
        DietGoal::Vegan => {
            if let Some(hit) = ingredients
                .iter()
                .find(|ingredient| config.lexicons.is_animal_product(ingredient))
            {
                *score -= goal_rules::VEGAN_PENALTY;
                reasons.push(format!("Not vegan: contains {}", hit.trim()));
            }
        }
        DietGoal::Vegetarian => {
            if let Some(hit) = ingredients
                .iter()
                .find(|ingredient| config.lexicons.is_meat_or_fish(ingredient))
            {
                *score -= goal_rules::VEGETARIAN_PENALTY;
                reasons.push(format!("Not vegetarian: contains {}", hit.trim()));
            }
        }
        DietGoal::GlutenFree => {
            if let Some(hit) = ingredients
                .iter()
                .find(|ingredient| config.lexicons.contains_gluten(ingredient))
            {
                *score -= goal_rules::GLUTEN_FREE_PENALTY;
                reasons.push(format!("Contains gluten ({})", hit.trim()));
            }
        }
        DietGoal::Balanced => {}
    }
}

fn apply_health_rules(
    health: HealthGoal,
    facts: &NutritionFacts,
    score: &mut f64,
    reasons: &mut Vec<String>,
) {
    match health {
        HealthGoal::Keto => {
            if facts.carbs > goal_rules::KETO_CARB_LIMIT_G {
                *score -= goal_rules::KETO_CARB_PENALTY;
                reasons.push(format!("Too many carbs for keto ({:.1}g)", facts.carbs));
            }
            if facts.fat > goal_rules::KETO_FAT_TARGET_G {
                *score += goal_rules::KETO_FAT_BONUS;
                reasons.push(format!("Good fat content for keto ({:.1}g)", facts.fat));
            }
        }
        HealthGoal::LowSugar => {
            if facts.sugar > goal_rules::LOW_SUGAR_LIMIT_G {
                *score -= goal_rules::LOW_SUGAR_PENALTY;
                reasons.push(format!("Too much sugar for your goal ({:.1}g)", facts.sugar));
            }
            if facts.sugar > goal_rules::LOW_SUGAR_HEAVY_G {
                *score -= goal_rules::LOW_SUGAR_HEAVY_PENALTY;
                reasons.push("Sugar content is far beyond a low-sugar goal".to_owned());
            }
        }
        HealthGoal::LowFat => {
            if facts.fat > goal_rules::LOW_FAT_LIMIT_G {
                *score -= goal_rules::LOW_FAT_PENALTY;
                reasons.push(format!("Too much fat for your goal ({:.1}g)", facts.fat));
            }
            if facts.fat > goal_rules::LOW_FAT_HEAVY_G {
                *score -= goal_rules::LOW_FAT_HEAVY_PENALTY;
                reasons.push("Fat content is far beyond a low-fat goal".to_owned());
            }
        }
        HealthGoal::HighProtein => {
            // Independent checks, not an if/else: the conditions do not
            // partition the range and both legs must stay separately tunable.
            if facts.protein > goal_rules::HIGH_PROTEIN_TARGET_G {
                *score += goal_rules::HIGH_PROTEIN_BONUS;
                reasons.push(format!(
                    "High protein supports your goal ({:.1}g)",
                    facts.protein
                ));
            }
            if facts.protein < goal_rules::HIGH_PROTEIN_FLOOR_G {
                *score -= goal_rules::HIGH_PROTEIN_SHORTFALL_PENALTY;
                reasons.push(format!(
                    "Low protein for a high-protein goal ({:.1}g)",
                    facts.protein
                ));
            }
        }
        HealthGoal::Balanced => {}
    }
}

fn apply_body_rules(
    body: BodyGoal,
    facts: &NutritionFacts,
    score: &mut f64,
    reasons: &mut Vec<String>,
) {
    match body {
        BodyGoal::LoseWeight => {
            if facts.calories > goal_rules::LOSE_WEIGHT_CALORIE_LIMIT {
                *score -= goal_rules::LOSE_WEIGHT_PENALTY;
                reasons.push(format!(
                    "Calorie-heavy for a weight-loss goal ({:.0} kcal)",
                    facts.calories
                ));
            }
            if facts.calories > goal_rules::LOSE_WEIGHT_HEAVY_CALORIES {
                *score -= goal_rules::LOSE_WEIGHT_HEAVY_PENALTY;
                reasons.push("Calories are far beyond a weight-loss serving".to_owned());
            }
        }
        BodyGoal::GainMuscle => {
            if facts.protein > goal_rules::GAIN_MUSCLE_PROTEIN_TARGET_G {
                *score += goal_rules::GAIN_MUSCLE_BONUS;
                reasons.push(format!(
                    "Protein supports muscle gain ({:.1}g)",
                    facts.protein
                ));
            }
            if facts.protein < goal_rules::GAIN_MUSCLE_PROTEIN_FLOOR_G {
                *score -= goal_rules::GAIN_MUSCLE_SHORTFALL_PENALTY;
                reasons.push(format!(
                    "Too little protein for muscle gain ({:.1}g)",
                    facts.protein
                ));
            }
        }
        BodyGoal::MaintainWeight => {}
    }
}
