// ABOUTME: Lenient serde helpers for scanner output
// ABOUTME: Coerces mistyped quantities, string lists, and booleans to neutral values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Deserialization helpers that absorb the mess real label scans produce.
//!
//! OCR and vision pipelines routinely emit `"12"` where a number belongs,
//! `null` where a list belongs, or nothing at all. These helpers deserialize
//! into an intermediate [`serde_json::Value`] and coerce anything off-contract
//! to a neutral value, so a structurally valid payload always parses.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Clamp a parsed quantity to the physically meaningful range.
///
/// Negative amounts and non-finite values cannot appear on a real label, so
/// they collapse to `0.0` (rule absent) rather than poisoning downstream math.
pub(crate) fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Deserialize a nutrition quantity, tolerating strings, nulls, and junk.
///
/// Numbers pass through, numeric strings are parsed, and everything else
/// (booleans, arrays, objects, unparseable text) coerces to `0.0`.
pub(crate) fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let quantity = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(sanitize_quantity(quantity))
}

/// Deserialize a list of ingredient or additive names.
///
/// Non-array values coerce to an empty list; non-string entries are skipped;
/// surviving entries are trimmed and empties dropped.
pub(crate) fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let entries = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => {
                    let trimmed = text.trim().to_owned();
                    (!trimmed.is_empty()).then_some(trimmed)
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(entries)
}

/// Deserialize a flag that some scanner versions emit as the string `"true"`.
///
/// Anything that is not `true` or a case-insensitive `"true"` string reads as
/// `false`, the claim-absent default.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let flag = match value {
        Value::Bool(flag) => flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    };
    Ok(flag)
}

/// Deserialize an optional trimmed string, coercing non-strings to `None`.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match value {
        Value::String(text) => {
            let trimmed = text.trim().to_owned();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    };
    Ok(text)
}
