// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs
// ABOUTME: Re-exports command modules for morsel-cli
// ABOUTME: Provides access to analyze, lexicons, and thresholds commands

pub mod analyze;
pub mod lexicons;
pub mod thresholds;
