// ABOUTME: Configuration error types for engine validation
// ABOUTME: Defines error variants for misordered bands, bad tuning values, and empty lexicons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Configuration error types for engine validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Band edges or caps ordered incorrectly (e.g., moderate above high)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric tuning value outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A lexicon table is empty or contains a blank entry
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(&'static str),
}
