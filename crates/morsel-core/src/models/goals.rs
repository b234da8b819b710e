// ABOUTME: User goal profile captured at onboarding, with closed goal vocabularies
// ABOUTME: Unknown or mistyped goal strings parse to None so personalization skips them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shared behavior of the closed goal vocabularies.
///
/// Goal axes only ever grow by releasing a new app version, so each axis is a
/// closed enum. Parsing is lossy by contract: a value this build does not know
/// reads as `None` and the axis simply contributes no adjustment.
pub trait GoalValue: Sized + Copy {
    /// Parse a goal from its wire string, `None` when unrecognized.
    fn from_str_lossy(value: &str) -> Option<Self>;

    /// The canonical wire representation.
    fn as_str(self) -> &'static str;
}

/// Body composition objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyGoal {
    /// Cut calories, favor light foods
    LoseWeight,
    /// No body-composition adjustments
    MaintainWeight,
    /// Favor protein-dense foods
    GainMuscle,
}

impl GoalValue for BodyGoal {
    fn from_str_lossy(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "lose-weight" => Some(Self::LoseWeight),
            "maintain-weight" => Some(Self::MaintainWeight),
            "gain-muscle" => Some(Self::GainMuscle),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose-weight",
            Self::MaintainWeight => "maintain-weight",
            Self::GainMuscle => "gain-muscle",
        }
    }
}

/// Metabolic / health strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    /// Very low carbohydrate, high fat
    Keto,
    /// Minimize sugar intake
    LowSugar,
    /// Minimize total fat intake
    LowFat,
    /// Maximize protein intake
    HighProtein,
    /// No single-nutrient emphasis
    Balanced,
}

impl GoalValue for HealthGoal {
    fn from_str_lossy(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "keto" => Some(Self::Keto),
            "low-sugar" => Some(Self::LowSugar),
            "low-fat" => Some(Self::LowFat),
            "high-protein" => Some(Self::HighProtein),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Keto => "keto",
            Self::LowSugar => "low-sugar",
            Self::LowFat => "low-fat",
            Self::HighProtein => "high-protein",
            Self::Balanced => "balanced",
        }
    }
}

/// Dietary pattern the user follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietGoal {
    /// Short ingredient lists, nothing synthetic
    WholeFoods,
    /// No animal products of any kind
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No wheat, barley, rye, or derived flours
    GlutenFree,
    /// No dietary restriction
    Balanced,
}

impl GoalValue for DietGoal {
    fn from_str_lossy(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "whole-foods" => Some(Self::WholeFoods),
            "vegan" => Some(Self::Vegan),
            "vegetarian" => Some(Self::Vegetarian),
            "gluten-free" => Some(Self::GlutenFree),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::WholeFoods => "whole-foods",
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::GlutenFree => "gluten-free",
            Self::Balanced => "balanced",
        }
    }
}

/// Broader life outcome the user named during onboarding.
///
/// Carried through for product analytics; no scoring rules attach to it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifeGoal {
    /// Build healthier eating habits
    EatHealthier,
    /// More day-to-day energy
    BoostEnergy,
    /// Body confidence
    FeelConfident,
    /// Longevity focus
    LiveLonger,
}

impl GoalValue for LifeGoal {
    fn from_str_lossy(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "eat-healthier" => Some(Self::EatHealthier),
            "boost-energy" => Some(Self::BoostEnergy),
            "feel-confident" => Some(Self::FeelConfident),
            "live-longer" => Some(Self::LiveLonger),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::EatHealthier => "eat-healthier",
            Self::BoostEnergy => "boost-energy",
            Self::FeelConfident => "feel-confident",
            Self::LiveLonger => "live-longer",
        }
    }
}

/// What drives the user, from onboarding.
///
/// Like [`LifeGoal`], an analytics axis with no scoring rules attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motivation {
    /// General health
    Health,
    /// Look better
    Appearance,
    /// Athletic performance
    Performance,
    /// Live longer
    Longevity,
}

impl GoalValue for Motivation {
    fn from_str_lossy(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "health" => Some(Self::Health),
            "appearance" => Some(Self::Appearance),
            "performance" => Some(Self::Performance),
            "longevity" => Some(Self::Longevity),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Appearance => "appearance",
            Self::Performance => "performance",
            Self::Longevity => "longevity",
        }
    }
}

/// The goal profile captured at onboarding, all axes optional.
///
/// Any axis may be absent, and an unrecognized wire value is treated as
/// absent. An all-`None` profile produces no personalization at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGoals {
    /// Body composition objective (`lose-weight`, `maintain-weight`, `gain-muscle`)
    #[serde(
        deserialize_with = "lossy_goal",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_goal: Option<BodyGoal>,
    /// Metabolic strategy (`keto`, `low-sugar`, `low-fat`, `high-protein`, `balanced`)
    #[serde(
        deserialize_with = "lossy_goal",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_goal: Option<HealthGoal>,
    /// Dietary pattern (`whole-foods`, `vegan`, `vegetarian`, `gluten-free`, `balanced`)
    #[serde(
        deserialize_with = "lossy_goal",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_goal: Option<DietGoal>,
    /// Broader life outcome, analytics only
    #[serde(
        deserialize_with = "lossy_goal",
        skip_serializing_if = "Option::is_none"
    )]
    pub life_goal: Option<LifeGoal>,
    /// Stated motivation, analytics only
    #[serde(
        deserialize_with = "lossy_goal",
        skip_serializing_if = "Option::is_none"
    )]
    pub motivation: Option<Motivation>,
}

impl UserGoals {
    /// True when no axis is set; such a profile skips personalization.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.body_goal.is_none()
            && self.health_goal.is_none()
            && self.diet_goal.is_none()
            && self.life_goal.is_none()
            && self.motivation.is_none()
    }
}

/// Lowercase and normalize separators so `lose_weight` and `Lose-Weight` both parse.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace('_', "-")
}

/// Deserialize one goal axis, mapping unknown strings and non-strings to `None`.
fn lossy_goal<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: GoalValue,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(T::from_str_lossy))
}
