// ABOUTME: Scan payloads as the mobile app emits them, plus immutable scan records
// ABOUTME: Payload parsing is lenient end to end; record creation is where the name contract bites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de;
use super::nutrition::NutritionFacts;
use super::report::AnalysisReport;
use crate::errors::PayloadError;

/// One product scan as produced by the label-recognition pipeline.
///
/// Nutrition fields sit at the top level of the JSON object alongside the
/// ingredient data, mirroring the app's wire shape, and flatten into
/// [`NutritionFacts`] here. Every field tolerates absence or the wrong JSON
/// type: the engine scores whatever survived recognition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanPayload {
    /// Product name as recognized, if any
    #[serde(
        deserialize_with = "de::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Brand, if recognized
    #[serde(
        deserialize_with = "de::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand: Option<String>,
    /// Barcode digits, when the scan started from a barcode
    #[serde(
        deserialize_with = "de::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub barcode: Option<String>,
    /// Serving size as printed, free text like `"40g"` or `"2 cookies"`
    #[serde(
        deserialize_with = "de::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub serving_size: Option<String>,
    /// Per-serving nutrition facts, flattened into the payload object
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    /// Ingredient list in label order, most abundant first
    #[serde(deserialize_with = "de::lenient_string_list")]
    pub ingredients: Vec<String>,
    /// Additives called out separately by the recognition pipeline
    #[serde(deserialize_with = "de::lenient_string_list")]
    pub additives: Vec<String>,
    /// Whether the packaging carries an organic claim
    #[serde(deserialize_with = "de::lenient_bool")]
    pub is_organic: bool,
}

impl ScanPayload {
    /// Product name for display, falling back when recognition found none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown product")
    }

    /// The product name, or [`PayloadError::MissingField`] when absent.
    ///
    /// Scoring never requires a name; persisting a scan does.
    pub fn require_name(&self) -> Result<&str, PayloadError> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(PayloadError::MissingField("name"))
    }
}

/// An analyzed scan persisted to history.
///
/// Identity and clock live here, not in the scoring types, so scoring stays
/// a pure function and two records of the same payload differ only in `id`
/// and `analyzed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    /// Unique id for this record
    pub id: Uuid,
    /// Product name (required for history entries)
    pub name: String,
    /// Brand, when recognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Barcode, when the scan started from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Serving size as printed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// The full analysis at scan time
    pub report: AnalysisReport,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
}

impl ScanRecord {
    /// Wrap an analysis into a history record, stamping id and time.
    ///
    /// Fails when the payload has no product name; a history entry without a
    /// name is useless to the user, so the contract is enforced here rather
    /// than at scoring time.
    pub fn from_scan(payload: &ScanPayload, report: AnalysisReport) -> Result<Self, PayloadError> {
        let name = payload.require_name()?.to_owned();
        let record = Self {
            id: Uuid::new_v4(),
            name,
            brand: payload.brand.clone(),
            barcode: payload.barcode.clone(),
            serving_size: payload.serving_size.clone(),
            report,
            analyzed_at: Utc::now(),
        };
        tracing::debug!(record = %record.id, product = %record.name, "scan record created");
        Ok(record)
    }
}
