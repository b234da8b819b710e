// ABOUTME: Banded scoring of the macronutrient profile
// ABOUTME: Penalties and bonuses ramp linearly from their band edge and saturate at a cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Nutrition scoring pass.
//!
//! Each rule inspects one label quantity against [`NutritionThresholds`] and
//! contributes a signed delta plus a reason and flag. Sugar is the one
//! metric scored as an exclusive band partition (exactly one sugar rule fires
//! per scan); every other metric is an independent rule.

use morsel_core::models::{NutritionFacts, ScoreFlag};

use crate::config::NutritionThresholds;

/// Accumulated outcome of the nutrition pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionScore {
    /// Net signed delta across all fired rules
    pub delta: f64,
    /// One reason per fired rule, in rule order
    pub reasons: Vec<String>,
    /// One flag per fired rule, in rule order
    pub flags: Vec<ScoreFlag>,
}

impl NutritionScore {
    fn apply(&mut self, delta: f64, reason: String, flag: ScoreFlag) {
        self.delta += delta;
        self.reasons.push(reason);
        self.flags.push(flag);
    }

    /// Record a reason and flag without moving the score.
    fn note(&mut self, reason: String, flag: ScoreFlag) {
        self.reasons.push(reason);
        self.flags.push(flag);
    }
}

/// Score the macronutrient profile against the configured bands.
///
/// Pure: identical facts and thresholds always produce an identical outcome.
/// The delta is unclamped; the composite pass owns clamping and rounding.
#[must_use]
pub fn score_nutrition(facts: &NutritionFacts, thresholds: &NutritionThresholds) -> NutritionScore {
    let mut outcome = NutritionScore::default();

    // Sugar bands partition exclusively: high, moderate, modest, low.
    if facts.sugar > thresholds.sugar_high_g {
        let penalty = ((facts.sugar - thresholds.sugar_high_g) * thresholds.sugar_high_rate)
            .min(thresholds.sugar_high_cap);
        outcome.apply(
            -penalty,
            format!("Very high sugar ({:.1}g per serving)", facts.sugar),
            ScoreFlag::HighSugar,
        );
    } else if facts.sugar > thresholds.sugar_moderate_g {
        let penalty = ((facts.sugar - thresholds.sugar_moderate_g)
            * thresholds.sugar_moderate_rate)
            .min(thresholds.sugar_moderate_cap);
        outcome.apply(
            -penalty,
            format!("High sugar ({:.1}g per serving)", facts.sugar),
            ScoreFlag::ModerateSugar,
        );
    } else if facts.sugar > thresholds.sugar_modest_g {
        outcome.apply(
            thresholds.sugar_modest_bonus,
            format!("Moderate sugar ({:.1}g per serving)", facts.sugar),
            ScoreFlag::ModestSugar,
        );
    } else {
        outcome.apply(
            thresholds.sugar_low_bonus,
            format!("Low sugar ({:.1}g per serving)", facts.sugar),
            ScoreFlag::LowSugar,
        );
    }

    if facts.saturated_fat >= thresholds.sat_fat_high_g {
        let penalty = ((facts.saturated_fat - thresholds.sat_fat_high_g) * thresholds.sat_fat_rate)
            .min(thresholds.sat_fat_cap);
        outcome.apply(
            -penalty,
            format!("High saturated fat ({:.1}g)", facts.saturated_fat),
            ScoreFlag::HighSatFat,
        );
    }

    if facts.sodium >= thresholds.sodium_high_mg {
        let penalty = ((facts.sodium - thresholds.sodium_high_mg) / thresholds.sodium_divisor)
            .min(thresholds.sodium_cap);
        outcome.apply(
            -penalty,
            format!("High sodium ({:.0}mg)", facts.sodium),
            ScoreFlag::HighSodium,
        );
    } else if facts.sodium <= thresholds.sodium_low_mg {
        // Callout only; low sodium is table stakes, not a bonus.
        outcome.note(
            format!("Low sodium ({:.0}mg)", facts.sodium),
            ScoreFlag::LowSodium,
        );
    }

    if facts.calories >= thresholds.calorie_dense_kcal {
        let penalty = ((facts.calories - thresholds.calorie_dense_kcal)
            / thresholds.calorie_divisor)
            .min(thresholds.calorie_cap);
        outcome.apply(
            -penalty,
            format!("Calorie dense ({:.0} kcal per serving)", facts.calories),
            ScoreFlag::CalorieDense,
        );
    }

    if facts.protein >= thresholds.protein_rich_g {
        let bonus = ((facts.protein - thresholds.protein_rich_g) * thresholds.protein_rate)
            .min(thresholds.protein_cap);
        outcome.apply(
            bonus,
            format!("Good protein ({:.1}g per serving)", facts.protein),
            ScoreFlag::ProteinRich,
        );
    }

    if facts.fiber >= thresholds.fiber_rich_g {
        let bonus = ((facts.fiber - thresholds.fiber_rich_g) * thresholds.fiber_rate)
            .min(thresholds.fiber_cap);
        outcome.apply(
            bonus,
            format!("Good fiber ({:.1}g per serving)", facts.fiber),
            ScoreFlag::FiberRich,
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> NutritionThresholds {
        NutritionThresholds::default()
    }

    fn facts(sugar: f64, sat_fat: f64, sodium: f64, calories: f64, protein: f64, fiber: f64) -> NutritionFacts {
        NutritionFacts {
            sugar,
            saturated_fat: sat_fat,
            sodium,
            calories,
            protein,
            fiber,
            ..NutritionFacts::default()
        }
    }

    #[test]
    fn zero_facts_earn_only_the_low_sugar_bonus_and_sodium_callout() {
        let outcome = score_nutrition(&NutritionFacts::default(), &thresholds());
        assert!((outcome.delta - 8.0).abs() < f64::EPSILON);
        assert_eq!(
            outcome.flags,
            vec![ScoreFlag::LowSugar, ScoreFlag::LowSodium]
        );
    }

    #[test]
    fn exactly_one_sugar_band_fires() {
        let cases = [
            (0.0, ScoreFlag::LowSugar, 8.0),
            (3.0, ScoreFlag::LowSugar, 8.0),
            (3.1, ScoreFlag::ModestSugar, 3.0),
            (6.0, ScoreFlag::ModestSugar, 3.0),
            (8.0, ScoreFlag::ModerateSugar, -(8.0 - 6.0) * 2.2),
            (10.5, ScoreFlag::ModerateSugar, -(10.5 - 6.0) * 2.2),
            (12.0, ScoreFlag::HighSugar, -(12.0 - 10.5) * 3.0),
            (40.0, ScoreFlag::HighSugar, -35.0), // capped
        ];
        for (sugar, expected_flag, expected_delta) in cases {
            let outcome = score_nutrition(&facts(sugar, 0.0, 200.0, 0.0, 0.0, 0.0), &thresholds());
            let sugar_flags: Vec<_> = outcome
                .flags
                .iter()
                .filter(|flag| {
                    matches!(
                        flag,
                        ScoreFlag::HighSugar
                            | ScoreFlag::ModerateSugar
                            | ScoreFlag::ModestSugar
                            | ScoreFlag::LowSugar
                    )
                })
                .collect();
            assert_eq!(sugar_flags, vec![&expected_flag], "sugar = {sugar}");
            assert!(
                (outcome.delta - expected_delta).abs() < 1e-9,
                "sugar = {sugar}: delta {} != {expected_delta}",
                outcome.delta
            );
        }
    }

    #[test]
    fn moderate_band_penalty_caps_at_ten() {
        // At the top of the moderate band the uncapped penalty would be 9.9.
        let outcome = score_nutrition(&facts(10.4, 0.0, 200.0, 0.0, 0.0, 0.0), &thresholds());
        assert!(outcome.delta < 0.0);
        assert!(outcome.delta >= -10.0);
    }

    #[test]
    fn saturated_fat_ramp_and_cap() {
        let outcome = score_nutrition(&facts(0.0, 5.0, 200.0, 0.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - 8.0).abs() < f64::EPSILON); // +8 sugar, -0 at the edge
        assert!(outcome.flags.contains(&ScoreFlag::HighSatFat));

        let outcome = score_nutrition(&facts(0.0, 20.0, 200.0, 0.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - (8.0 - 15.0)).abs() < f64::EPSILON); // capped at 15
    }

    #[test]
    fn sodium_penalty_is_per_fifty_milligrams() {
        let outcome = score_nutrition(&facts(0.0, 0.0, 600.0, 0.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - (8.0 - 4.0)).abs() < f64::EPSILON);
        assert!(outcome.flags.contains(&ScoreFlag::HighSodium));
        assert!(!outcome.flags.contains(&ScoreFlag::LowSodium));

        let outcome = score_nutrition(&facts(0.0, 0.0, 2000.0, 0.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - (8.0 - 12.0)).abs() < f64::EPSILON); // capped at 12
    }

    #[test]
    fn low_sodium_is_reason_only() {
        let outcome = score_nutrition(&facts(0.0, 0.0, 140.0, 0.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - 8.0).abs() < f64::EPSILON);
        assert!(outcome.flags.contains(&ScoreFlag::LowSodium));
        assert!(outcome
            .reasons
            .iter()
            .any(|reason| reason.contains("Low sodium")));
    }

    #[test]
    fn calorie_density_ramp_and_cap() {
        let outcome = score_nutrition(&facts(0.0, 0.0, 200.0, 450.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - (8.0 - 5.0)).abs() < f64::EPSILON);

        let outcome = score_nutrition(&facts(0.0, 0.0, 200.0, 900.0, 0.0, 0.0), &thresholds());
        assert!((outcome.delta - (8.0 - 10.0)).abs() < f64::EPSILON); // capped at 10
    }

    #[test]
    fn protein_and_fiber_bonuses_ramp_and_cap() {
        let outcome = score_nutrition(&facts(0.0, 0.0, 200.0, 0.0, 10.0, 5.0), &thresholds());
        // +8 sugar, +5 protein, +2.5 fiber
        assert!((outcome.delta - 15.5).abs() < f64::EPSILON);
        assert!(outcome.flags.contains(&ScoreFlag::ProteinRich));
        assert!(outcome.flags.contains(&ScoreFlag::FiberRich));

        let outcome = score_nutrition(&facts(0.0, 0.0, 200.0, 0.0, 50.0, 50.0), &thresholds());
        assert!((outcome.delta - (8.0 + 20.0 + 10.0)).abs() < f64::EPSILON); // both capped
    }

    #[test]
    fn higher_sugar_never_scores_better_in_the_high_band() {
        let mut previous = f64::INFINITY;
        for step in 0..40 {
            let sugar = 10.5 + f64::from(step) * 0.5;
            let outcome = score_nutrition(&facts(sugar, 0.0, 200.0, 0.0, 0.0, 0.0), &thresholds());
            assert!(outcome.delta <= previous, "sugar = {sugar}");
            previous = outcome.delta;
        }
    }

    #[test]
    fn more_protein_never_scores_worse() {
        let mut previous = f64::NEG_INFINITY;
        for step in 0..30 {
            let protein = 8.0 + f64::from(step) * 0.5;
            let outcome =
                score_nutrition(&facts(0.0, 0.0, 200.0, 0.0, protein, 0.0), &thresholds());
            assert!(outcome.delta >= previous, "protein = {protein}");
            previous = outcome.delta;
        }
    }
}
