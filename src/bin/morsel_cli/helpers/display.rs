// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs
// ABOUTME: Output formatting helpers for morsel-cli
// ABOUTME: Provides consistent display functions for analysis reports

use morsel::{AnalysisReport, ScoreFlag};

/// Display an analysis report in human-readable form
pub fn print_report(product: &str, report: &AnalysisReport) {
    println!("\n{product}");
    println!("{}", "=".repeat(60));
    println!("Score: {} / 100 ({})", report.score, report.grade);

    if let (Some(score), Some(grade)) = (report.personal_score, report.personal_grade) {
        let adjustment = report.breakdown.personal_adjustment.unwrap_or(0.0);
        println!("For your goals: {score} / 100 ({grade}), adjustment {adjustment:+}");
    }

    println!(
        "Breakdown: nutrition {} | additives {} | organic {}",
        report.breakdown.nutrition_score,
        report.breakdown.additives_score,
        report.breakdown.organic_score
    );

    if !report.flags.is_empty() {
        let flags = report
            .flags
            .iter()
            .copied()
            .map(ScoreFlag::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Flags: {flags}");
    }

    if !report.reasons.is_empty() {
        println!("\nWhy this score:");
        for reason in &report.reasons {
            println!("  • {reason}");
        }
    }

    if let Some(personal_reasons) = &report.personal_reasons {
        if !personal_reasons.is_empty() {
            println!("\nGoal adjustments:");
            for reason in personal_reasons {
                println!("  • {reason}");
            }
        }
    }

    if !report.ingredient_flags.is_empty() {
        println!("\nIngredients:");
        for assessment in &report.ingredient_flags {
            println!(
                "  {} [{}]: {}",
                assessment.ingredient, assessment.category, assessment.note
            );
        }
    }
}
