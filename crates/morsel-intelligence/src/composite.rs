// ABOUTME: The composite health score pipeline: base + nutrition + structure + additives + organic
// ABOUTME: Clamping to [0,100] and half-point rounding happen only here, at the exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Composite scoring pass.
//!
//! Starts from the configured base score, folds in the nutrition pass, the
//! ingredient-structure rules, the additive screen, and the organic bonus,
//! then clamps to [0, 100] and rounds to the nearest half point. Intermediate
//! subtotals stay unclamped so the breakdown remains honest for auditing:
//! the three components sum to the raw score, not necessarily to the total.

use morsel_core::models::{Grade, NutritionFacts, ScoreBreakdown, ScoreFlag, ScoringResult};

use crate::additives::screen_additives;
use crate::config::EngineConfig;
use crate::constants::score_bounds::{MAX_SCORE, MIN_SCORE};
use crate::nutrition::score_nutrition;

/// Compute the goal-neutral health score for one scanned product.
///
/// Pure and total: any structurally valid input produces a result, including
/// all-zero facts and empty lists. Facts are sanitized on entry so hostile
/// values (negatives, NaN) score as absent rather than corrupting the math.
#[must_use]
pub fn calculate_health_score(
    facts: &NutritionFacts,
    ingredients: &[String],
    additives: &[String],
    is_organic: bool,
    config: &EngineConfig,
) -> ScoringResult {
    let facts = facts.sanitized();
    let nutrition = score_nutrition(&facts, &config.thresholds);

    let mut reasons = nutrition.reasons;
    let mut flags = nutrition.flags;
    let mut nutrition_score = config.composite.base_score + nutrition.delta;

    if ingredients.is_empty() && additives.is_empty() {
        reasons.push("No ingredient data available".to_owned());
        flags.push(ScoreFlag::NoIngredientData);
    }

    if let Some(first) = ingredients.first() {
        if config.lexicons.is_whole_food(first) {
            nutrition_score += config.composite.first_ingredient_bonus;
            reasons.push(format!("First ingredient is a whole food ({})", first.trim()));
            flags.push(ScoreFlag::WholeFoodFirst);
        }
    }

    if ingredients.len() > config.composite.overprocessed_min_ingredients
        && ingredients
            .iter()
            .any(|ingredient| config.lexicons.is_processing_indicator(ingredient))
    {
        nutrition_score -= config.composite.overprocessed_penalty;
        reasons.push(format!(
            "Highly processed: {} ingredients with processing markers",
            ingredients.len()
        ));
        flags.push(ScoreFlag::HighlyProcessed);
    }

    let screen = screen_additives(ingredients, additives, &config.lexicons);
    let mut additives_score = 0.0;
    if screen.high_risk_count > 0 {
        let penalty = (f64::from(screen.high_risk_count) * config.composite.high_risk_penalty)
            .min(config.composite.high_risk_cap);
        additives_score -= penalty;
        reasons.push(format!(
            "Contains {} high-risk additive{}",
            screen.high_risk_count,
            plural(screen.high_risk_count)
        ));
        flags.push(ScoreFlag::HighRiskAdditives);
    }
    if screen.moderate_risk_count > 0 {
        let penalty = (f64::from(screen.moderate_risk_count)
            * config.composite.moderate_risk_penalty)
            .min(config.composite.moderate_risk_cap);
        additives_score -= penalty;
        reasons.push(format!(
            "Contains {} moderate-risk additive{}",
            screen.moderate_risk_count,
            plural(screen.moderate_risk_count)
        ));
        flags.push(ScoreFlag::ModerateRiskAdditives);
    }
    if screen.has_seed_oil {
        additives_score -= config.composite.seed_oil_penalty;
        reasons.push("Contains refined seed oils".to_owned());
        flags.push(ScoreFlag::SeedOil);
    }
    if screen.has_added_sugar {
        // Reason only: the sugar bands already priced the sugar itself.
        reasons.push("Contains added sugars".to_owned());
        flags.push(ScoreFlag::AddedSugar);
    }

    let organic_score = if is_organic {
        reasons.push("Certified organic".to_owned());
        flags.push(ScoreFlag::Organic);
        config.composite.organic_bonus
    } else {
        0.0
    };

    let raw = nutrition_score + additives_score + organic_score;
    let total = round_to_half(raw.clamp(MIN_SCORE, MAX_SCORE));
    let grade = Grade::from_score(total);

    tracing::debug!(
        nutrition_score,
        additives_score,
        organic_score,
        raw,
        total,
        grade = %grade,
        "composite health score computed"
    );

    ScoringResult {
        score: total,
        grade,
        reasons,
        flags,
        breakdown: ScoreBreakdown {
            nutrition_score,
            additives_score,
            organic_score,
            total_score: total,
            personal_adjustment: None,
            personal_total: None,
        },
    }
}

/// Round to the nearest 0.5 so the UI can render half-point scores.
fn round_to_half(score: f64) -> f64 {
    (score * 2.0).round() / 2.0
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| (*entry).to_string()).collect()
    }

    #[test]
    fn oat_example_scores_eighty_one_and_a_half() {
        let facts = NutritionFacts {
            sugar: 2.0,
            saturated_fat: 1.0,
            sodium: 50.0,
            calories: 120.0,
            protein: 10.0,
            fiber: 5.0,
            ..NutritionFacts::default()
        };
        let result = calculate_health_score(&facts, &list(&["oats", "water"]), &[], false, &config());
        assert!((result.score - 81.5).abs() < f64::EPSILON);
        assert_eq!(result.grade, Grade::Excellent);
        assert!(result.flags.contains(&ScoreFlag::WholeFoodFirst));
        assert!(result.flags.contains(&ScoreFlag::LowSodium));
        assert!((result.breakdown.nutrition_score - 81.5).abs() < f64::EPSILON);
        assert!(result.breakdown.additives_score.abs() < f64::EPSILON);
        assert!(result.breakdown.organic_score.abs() < f64::EPSILON);
    }

    #[test]
    fn heavy_penalties_clamp_to_zero() {
        let facts = NutritionFacts {
            sugar: 25.0,
            saturated_fat: 8.0,
            sodium: 600.0,
            calories: 450.0,
            protein: 2.0,
            fiber: 0.0,
            ..NutritionFacts::default()
        };
        let mut ingredients = list(&[
            "enriched flour",
            "sugar",
            "palm fat",
            "cocoa mass",
            "whey powder",
            "emulsifier",
            "red dye 40",
            "salt",
            "glucose syrup",
            "artificial flavor",
            "soy protein",
            "skim milk powder",
            "corn starch",
            "stabilizer",
        ]);
        ingredients.push("caramel color".to_string());
        assert_eq!(ingredients.len(), 15);

        let result = calculate_health_score(&facts, &ingredients, &[], false, &config());
        assert!(result.score.abs() < f64::EPSILON, "score = {}", result.score);
        assert_eq!(result.grade, Grade::Poor);
        assert!(result.flags.contains(&ScoreFlag::HighlyProcessed));
        assert!(result.flags.contains(&ScoreFlag::HighRiskAdditives));
        // Breakdown components still carry the unclamped story.
        assert!(result.breakdown.nutrition_score < result.breakdown.total_score + 1.0);
    }

    #[test]
    fn empty_lists_flag_missing_data_instead_of_throwing() {
        let result =
            calculate_health_score(&NutritionFacts::default(), &[], &[], false, &config());
        assert!(result.flags.contains(&ScoreFlag::NoIngredientData));
        assert!(result
            .reasons
            .iter()
            .any(|reason| reason == "No ingredient data available"));
        // Base 60 + low sugar 8.
        assert!((result.score - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn organic_bonus_lands_in_its_own_bucket() {
        let result = calculate_health_score(
            &NutritionFacts::default(),
            &list(&["oats"]),
            &[],
            true,
            &config(),
        );
        assert!((result.breakdown.organic_score - 10.0).abs() < f64::EPSILON);
        assert!(result.flags.contains(&ScoreFlag::Organic));
        // 60 + 8 + 6 + 10
        assert!((result.score - 84.0).abs() < f64::EPSILON);
    }

    #[test]
    fn added_sugar_is_reason_only() {
        let base = calculate_health_score(
            &NutritionFacts::default(),
            &list(&["water"]),
            &[],
            false,
            &config(),
        );
        let with_sugar = calculate_health_score(
            &NutritionFacts::default(),
            &list(&["water", "cane juice"]),
            &[],
            false,
            &config(),
        );
        assert!(with_sugar.flags.contains(&ScoreFlag::AddedSugar));
        // Flag and reason fire, score does not move.
        assert!((with_sugar.score - base.score).abs() < f64::EPSILON);
    }

    #[test]
    fn additive_penalties_cap() {
        let ingredients = list(&["aspartame", "bha", "bht", "tbhq", "red 3"]);
        let result =
            calculate_health_score(&NutritionFacts::default(), &ingredients, &[], false, &config());
        // 5 matches x 15 would be 75; cap is 30.
        assert!((result.breakdown.additives_score - (-30.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn long_clean_lists_are_not_flagged_processed() {
        let ingredients: Vec<String> = (0..14).map(|i| format!("vegetable {i}")).collect();
        let result =
            calculate_health_score(&NutritionFacts::default(), &ingredients, &[], false, &config());
        assert!(!result.flags.contains(&ScoreFlag::HighlyProcessed));
    }

    #[test]
    fn thirteen_processed_ingredients_trigger_the_penalty() {
        let mut ingredients: Vec<String> = (0..12).map(|i| format!("thing {i}")).collect();
        ingredients.push("emulsifier".to_string());
        let flagged =
            calculate_health_score(&NutritionFacts::default(), &ingredients, &[], false, &config());
        assert!(flagged.flags.contains(&ScoreFlag::HighlyProcessed));

        // Twelve items is not "more than twelve".
        let twelve: Vec<String> = ingredients[..12].to_vec();
        let unflagged =
            calculate_health_score(&NutritionFacts::default(), &twelve, &[], false, &config());
        assert!(!unflagged.flags.contains(&ScoreFlag::HighlyProcessed));
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let facts = NutritionFacts {
            sugar: 7.3,
            protein: 11.0,
            sodium: 410.0,
            ..NutritionFacts::default()
        };
        let ingredients = list(&["oats", "canola oil", "honey"]);
        let first = calculate_health_score(&facts, &ingredients, &[], true, &config());
        let second = calculate_health_score(&facts, &ingredients, &[], true, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn scores_are_always_half_point_multiples_in_range() {
        let sugars = [0.0, 2.9, 3.1, 6.7, 9.9, 10.6, 14.2, 33.3, 80.0];
        let sodiums = [0.0, 139.0, 411.0, 787.0];
        let proteins = [0.0, 8.2, 13.7, 40.0];
        for sugar in sugars {
            for sodium in sodiums {
                for protein in proteins {
                    let facts = NutritionFacts {
                        sugar,
                        sodium,
                        protein,
                        ..NutritionFacts::default()
                    };
                    let result = calculate_health_score(
                        &facts,
                        &list(&["water", "canola oil"]),
                        &[],
                        false,
                        &config(),
                    );
                    assert!((0.0..=100.0).contains(&result.score));
                    let doubled = result.score * 2.0;
                    assert!(
                        (doubled - doubled.round()).abs() < 1e-9,
                        "score {} is not a half-point multiple",
                        result.score
                    );
                }
            }
        }
    }

    #[test]
    fn reasons_and_flags_stay_in_lockstep_except_notes() {
        // Reason-only rules (low sodium, added sugar, no data) still push a
        // flag, so the two lists always have equal length.
        let result = calculate_health_score(
            &NutritionFacts {
                sodium: 100.0,
                ..NutritionFacts::default()
            },
            &list(&["water", "honey"]),
            &[],
            false,
            &config(),
        );
        assert_eq!(result.reasons.len(), result.flags.len());
    }
}
