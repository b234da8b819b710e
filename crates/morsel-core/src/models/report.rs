// ABOUTME: The combined analysis report: base score, ingredient assessments, personalization
// ABOUTME: Personal fields are absent (not null) when no goal profile was supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use serde::{Deserialize, Serialize};

use super::ingredient::IngredientAssessment;
use super::score::{Grade, PersonalizationResult, ScoreBreakdown, ScoreFlag, ScoringResult};

/// Everything one scan analysis produced, in the shape the app consumes.
///
/// The goal-neutral fields are always present. The `personal*` fields and the
/// breakdown's personal extensions appear only when a non-empty goal profile
/// was applied, so goal-free responses are byte-identical to the base scoring
/// output plus ingredient assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Goal-neutral score in [0, 100]
    pub score: f64,
    /// Tier for `score`
    pub grade: Grade,
    /// Human-readable reasons from the base scoring pass
    pub reasons: Vec<String>,
    /// Machine tokens from the base scoring pass
    pub flags: Vec<ScoreFlag>,
    /// Component decomposition, with personal extensions when personalized
    #[serde(rename = "scoreBreakdown")]
    pub breakdown: ScoreBreakdown,
    /// Per-ingredient classification for the label-detail screen
    #[serde(default)]
    pub ingredient_flags: Vec<IngredientAssessment>,
    /// Personalized score, when a goal profile was applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_score: Option<f64>,
    /// Tier for the personalized score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_grade: Option<Grade>,
    /// Goal-rule reasons, separate from the base `reasons`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_reasons: Option<Vec<String>>,
}

impl AnalysisReport {
    /// Assemble a report from the scoring passes.
    ///
    /// When `personal` is present, its adjustment and total are copied into
    /// the breakdown so the app can render both numbers from one object.
    #[must_use]
    pub fn assemble(
        base: ScoringResult,
        ingredient_flags: Vec<IngredientAssessment>,
        personal: Option<PersonalizationResult>,
    ) -> Self {
        let mut breakdown = base.breakdown;
        let (personal_score, personal_grade, personal_reasons) = match personal {
            Some(outcome) => {
                breakdown.personal_adjustment = Some(outcome.adjustment);
                breakdown.personal_total = Some(outcome.score);
                (
                    Some(outcome.score),
                    Some(outcome.grade),
                    Some(outcome.reasons),
                )
            }
            None => (None, None, None),
        };
        Self {
            score: base.score,
            grade: base.grade,
            reasons: base.reasons,
            flags: base.flags,
            breakdown,
            ingredient_flags,
            personal_score,
            personal_grade,
            personal_reasons,
        }
    }

    /// The score the app should lead with: personalized when available.
    #[must_use]
    pub fn effective_score(&self) -> f64 {
        self.personal_score.unwrap_or(self.score)
    }

    /// The grade matching [`Self::effective_score`].
    #[must_use]
    pub fn effective_grade(&self) -> Grade {
        self.personal_grade.unwrap_or(self.grade)
    }
}
