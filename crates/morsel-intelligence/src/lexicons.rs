// ABOUTME: Curated word tables driving ingredient classification and matching rules
// ABOUTME: Tables are data, not code; swap them through EngineConfig without touching control flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Curated lexicons and the matching rules that apply them.
//!
//! Matching is deliberately naive: case-insensitive substring containment of
//! a table term inside the label text. Real labels say "organic cane sugar"
//! or "expeller-pressed canola oil", and substring matching catches those
//! without a parser. The cost is occasional false positives ("flour" matches
//! "almond flour"); the product treats that as acceptable recall bias.

use serde::{Deserialize, Serialize};

/// Additives with the strongest adverse-effect evidence; each match costs the
/// most of any additive tier.
pub const HIGH_RISK_ADDITIVES: &[&str] = &[
    // Artificial sweeteners
    "aspartame",
    "sucralose",
    "acesulfame",
    "saccharin",
    // Preservatives and dough conditioners with the worst track records
    "bha",
    "bht",
    "tbhq",
    "sodium nitrite",
    "sodium nitrate",
    "potassium bromate",
    "propylparaben",
    "azodicarbonamide",
    "brominated vegetable oil",
    // Industrial trans fats
    "partially hydrogenated",
    // Flavor enhancers
    "monosodium glutamate",
    "msg",
    // Petroleum-derived dyes
    "red 40",
    "red dye 40",
    "red 3",
    "yellow 5",
    "yellow 6",
    "blue 1",
    "blue 2",
    "titanium dioxide",
];

/// Additives that are fine in moderation but mark a processed formulation.
pub const MODERATE_RISK_ADDITIVES: &[&str] = &[
    "citric acid",
    "carrageenan",
    "xanthan gum",
    "guar gum",
    "gellan gum",
    "locust bean gum",
    "cellulose gum",
    "gum arabic",
    "natural flavor",
    "artificial flavor",
    "corn syrup",
    "maltodextrin",
    "lecithin",
    "sodium benzoate",
    "potassium sorbate",
    "calcium propionate",
    "sodium phosphate",
    "monoglycerides",
    "diglycerides",
    "polysorbate",
    "caramel color",
    "yeast extract",
    "modified starch",
    "modified corn starch",
];

/// Refined seed oils and industrial fats; presence costs a flat penalty.
pub const SEED_OILS: &[&str] = &[
    "canola oil",
    "rapeseed oil",
    "soybean oil",
    "soy oil",
    "corn oil",
    "cottonseed oil",
    "sunflower oil",
    "safflower oil",
    "grapeseed oil",
    "rice bran oil",
    "vegetable oil",
    "hydrogenated",
    "margarine",
    "shortening",
];

/// Names added sugar hides behind on labels.
pub const ADDED_SUGARS: &[&str] = &[
    "sugar",
    "cane sugar",
    "brown sugar",
    "invert sugar",
    "coconut sugar",
    "corn syrup",
    "high fructose corn syrup",
    "glucose syrup",
    "rice syrup",
    "brown rice syrup",
    "malt syrup",
    "maple syrup",
    "date syrup",
    "agave",
    "honey",
    "molasses",
    "dextrose",
    "fructose",
    "sucrose",
    "glucose",
    "maltose",
    "barley malt",
    "fruit juice concentrate",
    "cane juice",
    "turbinado",
];

/// Added sugars that are minimally refined; same sugar math, softer wording.
pub const NATURAL_SWEETENERS: &[&str] = &["honey", "maple syrup", "date syrup", "coconut sugar"];

/// Single recognizable foods; matching the first ingredient earns a bonus.
pub const WHOLE_FOODS: &[&str] = &[
    "water",
    // Grains and seeds
    "oats",
    "oatmeal",
    "quinoa",
    "brown rice",
    "wild rice",
    "whole wheat",
    "whole grain",
    "millet",
    "buckwheat",
    "chia",
    "flaxseed",
    "sunflower seed",
    "pumpkin seed",
    "sesame",
    // Nuts
    "almond",
    "peanut",
    "cashew",
    "walnut",
    "pecan",
    "hazelnut",
    // Animal proteins and dairy
    "chicken",
    "beef",
    "turkey",
    "salmon",
    "tuna",
    "egg",
    "milk",
    "yogurt",
    "kefir",
    // Fruit
    "apple",
    "banana",
    "strawberry",
    "blueberry",
    "raspberry",
    "blackberry",
    "mango",
    "orange",
    "lemon",
    "dates",
    "raisin",
    "coconut",
    "avocado",
    "olive",
    "olive oil",
    // Vegetables and legumes
    "tomato",
    "spinach",
    "kale",
    "broccoli",
    "cauliflower",
    "carrot",
    "beet",
    "cucumber",
    "onion",
    "garlic",
    "sweet potato",
    "potato",
    "pumpkin",
    "lentil",
    "chickpea",
    "black bean",
    "kidney bean",
    "pinto bean",
    "pea",
    "cocoa",
];

/// Words that betray industrial processing anywhere in a long ingredient list.
pub const PROCESSING_INDICATORS: &[&str] = &[
    "emulsifier",
    "stabilizer",
    "thickener",
    "preservative",
    "artificial",
    "hydrogenated",
    "hydrolyzed",
    "interesterified",
    "isolate",
    "maltodextrin",
    "polysorbate",
    "monoglycerides",
    "diglycerides",
    "modified",
    "bleached",
    "aspartame",
    "sucralose",
    "dye",
    "anti-caking",
    "flavor enhancer",
];

/// Words that disqualify an ingredient from the organic-lean benefit of the
/// doubt; an organic product can still contain refined fractions.
pub const REFINED_INDICATORS: &[&str] = &[
    "syrup",
    "concentrate",
    "isolate",
    "extract",
    "modified",
    "hydrogenated",
    "hydrolyzed",
    "refined",
    "bleached",
    "enriched",
    "flavor",
    "dextrin",
    "dye",
];

/// Meat, fish, and slaughter by-products; screened for vegetarian and vegan diets.
pub const MEAT_AND_FISH: &[&str] = &[
    "meat",
    "beef",
    "chicken",
    "pork",
    "bacon",
    "ham",
    "turkey",
    "lamb",
    "veal",
    "duck",
    "sausage",
    "pepperoni",
    "salami",
    "jerky",
    "fish",
    "salmon",
    "tuna",
    "cod",
    "anchovy",
    "anchovies",
    "sardine",
    "shrimp",
    "prawn",
    "crab",
    "lobster",
    "oyster",
    "clam",
    "squid",
    "gelatin",
    "lard",
    "tallow",
];

/// Animal products beyond meat; screened for vegan diets on top of
/// [`MEAT_AND_FISH`].
pub const DAIRY_EGG_HONEY: &[&str] = &[
    "milk",
    "cream",
    "cheese",
    "butter",
    "yogurt",
    "whey",
    "casein",
    "lactose",
    "ghee",
    "custard",
    "egg",
    "albumen",
    "honey",
    "beeswax",
];

/// Gluten-bearing grains and their derivatives.
pub const GLUTEN_SOURCES: &[&str] = &[
    "wheat",
    "barley",
    "rye",
    "flour",
    "gluten",
    "spelt",
    "semolina",
];

/// The full set of word tables the engine matches against.
///
/// Defaults to the curated tables above. Overriding a table through
/// configuration replaces that table wholesale; the remaining tables keep
/// their curated defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicons {
    /// see [`HIGH_RISK_ADDITIVES`]
    pub high_risk_additives: Vec<String>,
    /// see [`MODERATE_RISK_ADDITIVES`]
    pub moderate_risk_additives: Vec<String>,
    /// see [`SEED_OILS`]
    pub seed_oils: Vec<String>,
    /// see [`ADDED_SUGARS`]
    pub added_sugars: Vec<String>,
    /// see [`NATURAL_SWEETENERS`]
    pub natural_sweeteners: Vec<String>,
    /// see [`WHOLE_FOODS`]
    pub whole_foods: Vec<String>,
    /// see [`PROCESSING_INDICATORS`]
    pub processing_indicators: Vec<String>,
    /// see [`REFINED_INDICATORS`]
    pub refined_indicators: Vec<String>,
    /// see [`MEAT_AND_FISH`]
    pub meat_and_fish: Vec<String>,
    /// see [`DAIRY_EGG_HONEY`]
    pub dairy_egg_honey: Vec<String>,
    /// see [`GLUTEN_SOURCES`]
    pub gluten_sources: Vec<String>,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            high_risk_additives: owned_table(HIGH_RISK_ADDITIVES),
            moderate_risk_additives: owned_table(MODERATE_RISK_ADDITIVES),
            seed_oils: owned_table(SEED_OILS),
            added_sugars: owned_table(ADDED_SUGARS),
            natural_sweeteners: owned_table(NATURAL_SWEETENERS),
            whole_foods: owned_table(WHOLE_FOODS),
            processing_indicators: owned_table(PROCESSING_INDICATORS),
            refined_indicators: owned_table(REFINED_INDICATORS),
            meat_and_fish: owned_table(MEAT_AND_FISH),
            dairy_egg_honey: owned_table(DAIRY_EGG_HONEY),
            gluten_sources: owned_table(GLUTEN_SOURCES),
        }
    }
}

impl Lexicons {
    /// Did the ingredient match the high-risk additive table?
    #[must_use]
    pub fn is_high_risk_additive(&self, ingredient: &str) -> bool {
        any_match(&self.high_risk_additives, ingredient)
    }

    /// Did the ingredient match the moderate-risk additive table?
    #[must_use]
    pub fn is_moderate_risk_additive(&self, ingredient: &str) -> bool {
        any_match(&self.moderate_risk_additives, ingredient)
    }

    /// Did the ingredient match the seed-oil table?
    #[must_use]
    pub fn is_seed_oil(&self, ingredient: &str) -> bool {
        any_match(&self.seed_oils, ingredient)
    }

    /// Did the ingredient match the added-sugar table?
    #[must_use]
    pub fn is_added_sugar(&self, ingredient: &str) -> bool {
        any_match(&self.added_sugars, ingredient)
    }

    /// Is this added sugar one of the minimally refined sweeteners?
    #[must_use]
    pub fn is_natural_sweetener(&self, ingredient: &str) -> bool {
        any_match(&self.natural_sweeteners, ingredient)
    }

    /// Whole-food check, substring in either direction.
    ///
    /// Term-inside-label catches `"organic quinoa flakes"`; label-inside-term
    /// catches OCR truncations like `"strawberr"`.
    #[must_use]
    pub fn is_whole_food(&self, ingredient: &str) -> bool {
        let label = normalize(ingredient);
        if label.is_empty() {
            return false;
        }
        self.whole_foods.iter().any(|term| {
            let term = normalize(term);
            !term.is_empty() && (label.contains(term.as_str()) || term.contains(label.as_str()))
        })
    }

    /// Did the ingredient match the over-processing indicator table?
    #[must_use]
    pub fn is_processing_indicator(&self, ingredient: &str) -> bool {
        any_match(&self.processing_indicators, ingredient)
    }

    /// Does the ingredient name a refined fraction or treatment?
    #[must_use]
    pub fn looks_refined(&self, ingredient: &str) -> bool {
        any_match(&self.refined_indicators, ingredient)
    }

    /// Vegetarian screen: meat, fish, or slaughter by-products.
    #[must_use]
    pub fn is_meat_or_fish(&self, ingredient: &str) -> bool {
        any_match(&self.meat_and_fish, ingredient)
    }

    /// Vegan screen: any animal product, including dairy, egg, and honey.
    #[must_use]
    pub fn is_animal_product(&self, ingredient: &str) -> bool {
        self.is_meat_or_fish(ingredient) || any_match(&self.dairy_egg_honey, ingredient)
    }

    /// Gluten screen: wheat, barley, rye, and derived flours.
    #[must_use]
    pub fn contains_gluten(&self, ingredient: &str) -> bool {
        any_match(&self.gluten_sources, ingredient)
    }
}

/// Case-insensitive containment of any table term in the label text.
fn any_match(table: &[String], ingredient: &str) -> bool {
    let label = normalize(ingredient);
    table.iter().any(|term| {
        let term = normalize(term);
        !term.is_empty() && label.contains(term.as_str())
    })
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn owned_table(table: &[&str]) -> Vec<String> {
    table.iter().map(|entry| (*entry).to_owned()).collect()
}
