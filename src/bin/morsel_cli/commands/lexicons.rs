// ABOUTME: Lexicons command for morsel-cli
// ABOUTME: Prints the ingredient lexicon tables the engine matches scan data against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use anyhow::Result;
use morsel::EngineConfig;

/// Print all lexicon tables, or a single named one
pub fn run(table: Option<&str>, config: &EngineConfig) -> Result<()> {
    let lexicons = &config.lexicons;
    let tables: [(&str, &[String]); 11] = [
        ("high_risk_additives", &lexicons.high_risk_additives),
        ("moderate_risk_additives", &lexicons.moderate_risk_additives),
        ("seed_oils", &lexicons.seed_oils),
        ("added_sugars", &lexicons.added_sugars),
        ("natural_sweeteners", &lexicons.natural_sweeteners),
        ("whole_foods", &lexicons.whole_foods),
        ("processing_indicators", &lexicons.processing_indicators),
        ("refined_indicators", &lexicons.refined_indicators),
        ("meat_and_fish", &lexicons.meat_and_fish),
        ("dairy_egg_honey", &lexicons.dairy_egg_honey),
        ("gluten_sources", &lexicons.gluten_sources),
    ];

    if let Some(name) = table {
        let Some((_, entries)) = tables.iter().find(|(table_name, _)| *table_name == name) else {
            let known = tables
                .iter()
                .map(|(table_name, _)| *table_name)
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::bail!("unknown lexicon table '{name}' (known tables: {known})");
        };
        print_table(name, entries);
    } else {
        for (name, entries) in &tables {
            print_table(name, entries);
        }
    }

    Ok(())
}

fn print_table(name: &str, entries: &[String]) {
    println!("\n{name} ({} terms)", entries.len());
    println!("{}", "-".repeat(40));
    for entry in entries {
        println!("  {entry}");
    }
}
