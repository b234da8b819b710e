// ABOUTME: Payload-level error types for scan ingestion
// ABOUTME: Distinguishes malformed JSON from contract violations like a missing product name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

use thiserror::Error;

/// Errors raised while turning raw scanner output into a [`crate::models::ScanPayload`].
///
/// Field-level problems (a sugar value arriving as `"12"` or `null`) are *not*
/// errors: the lenient deserializers coerce those to neutral values so a messy
/// label never sinks a scan. Only structural failures surface here.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The raw input was not parseable JSON at all.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field the caller contract requires was absent or empty.
    #[error("payload is missing required field `{0}`")]
    MissingField(&'static str),
}
