// ABOUTME: Risk screening of ingredient and additive lists against the additive lexicons
// ABOUTME: Tiers are independent scans; one entry can count toward several tiers at once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Additive screening pass.
//!
//! The screen walks the union of the ingredient list and the separately
//! declared additives, testing every entry against each risk table. The
//! tiers are deliberately not mutually exclusive: "partially hydrogenated
//! soybean oil" is both a high-risk additive and a seed oil, and should cost
//! on both axes.

use crate::lexicons::Lexicons;

/// Tallies from screening one product's ingredient and additive lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditiveScreen {
    /// Entries matching the high-risk additive table
    pub high_risk_count: u32,
    /// Entries matching the moderate-risk additive table
    pub moderate_risk_count: u32,
    /// Any entry matched the seed-oil table
    pub has_seed_oil: bool,
    /// Any entry matched the added-sugar table
    pub has_added_sugar: bool,
}

impl AdditiveScreen {
    /// True when nothing in any tier matched.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.high_risk_count == 0
            && self.moderate_risk_count == 0
            && !self.has_seed_oil
            && !self.has_added_sugar
    }
}

/// Screen the combined ingredient and additive lists.
///
/// Each entry counts at most once per tier, however many table terms it
/// happens to contain.
#[must_use]
pub fn screen_additives(
    ingredients: &[String],
    additives: &[String],
    lexicons: &Lexicons,
) -> AdditiveScreen {
    let mut screen = AdditiveScreen::default();
    for entry in ingredients.iter().chain(additives.iter()) {
        if lexicons.is_high_risk_additive(entry) {
            screen.high_risk_count += 1;
        }
        if lexicons.is_moderate_risk_additive(entry) {
            screen.moderate_risk_count += 1;
        }
        if lexicons.is_seed_oil(entry) {
            screen.has_seed_oil = true;
        }
        if lexicons.is_added_sugar(entry) {
            screen.has_added_sugar = true;
        }
    }
    screen
}
