// ABOUTME: Thresholds command for morsel-cli
// ABOUTME: Prints the nutrition thresholds and composite tuning the engine is running with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use morsel::EngineConfig;

/// Print the active scoring thresholds
pub fn run(config: &EngineConfig) {
    let t = &config.thresholds;
    let c = &config.composite;

    println!("\nNutrition thresholds");
    println!("{}", "=".repeat(60));
    println!("Sugar:");
    println!(
        "   very high  > {:.1}g   -{:.1}/g over, capped at {:.0}",
        t.sugar_high_g, t.sugar_high_rate, t.sugar_high_cap
    );
    println!(
        "   high       > {:.1}g    -{:.1}/g over, capped at {:.0}",
        t.sugar_moderate_g, t.sugar_moderate_rate, t.sugar_moderate_cap
    );
    println!(
        "   moderate   > {:.1}g    +{:.0} bonus",
        t.sugar_modest_g, t.sugar_modest_bonus
    );
    println!("   low        otherwise +{:.0} bonus", t.sugar_low_bonus);
    println!("Saturated fat:");
    println!(
        "   high       >= {:.1}g   -{:.1}/g over, capped at {:.0}",
        t.sat_fat_high_g, t.sat_fat_rate, t.sat_fat_cap
    );
    println!("Sodium:");
    println!(
        "   high       >= {:.0}mg  -1 per {:.0}mg over, capped at {:.0}",
        t.sodium_high_mg, t.sodium_divisor, t.sodium_cap
    );
    println!("   low        <= {:.0}mg  noted, no score change", t.sodium_low_mg);
    println!("Calories:");
    println!(
        "   dense      >= {:.0}    -1 per {:.0} kcal over, capped at {:.0}",
        t.calorie_dense_kcal, t.calorie_divisor, t.calorie_cap
    );
    println!("Protein:");
    println!(
        "   rich       >= {:.1}g   +{:.1}/g over, capped at {:.0}",
        t.protein_rich_g, t.protein_rate, t.protein_cap
    );
    println!("Fiber:");
    println!(
        "   rich       >= {:.1}g   +{:.1}/g over, capped at {:.0}",
        t.fiber_rich_g, t.fiber_rate, t.fiber_cap
    );

    println!("\nComposite tuning");
    println!("{}", "=".repeat(60));
    println!("   Base score:                {:.0}", c.base_score);
    println!("   First-ingredient bonus:    +{:.0}", c.first_ingredient_bonus);
    println!(
        "   Overprocessed penalty:     -{:.0} (lists over {} ingredients)",
        c.overprocessed_penalty, c.overprocessed_min_ingredients
    );
    println!(
        "   High-risk additives:       -{:.0} each, capped at {:.0}",
        c.high_risk_penalty, c.high_risk_cap
    );
    println!(
        "   Moderate-risk additives:   -{:.0} each, capped at {:.0}",
        c.moderate_risk_penalty, c.moderate_risk_cap
    );
    println!("   Seed oil penalty:          -{:.0}", c.seed_oil_penalty);
    println!("   Organic bonus:             +{:.0}", c.organic_bonus);
}
