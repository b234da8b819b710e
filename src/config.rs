// ABOUTME: Engine config loading: YAML overrides merged onto built-in defaults, then validated
// ABOUTME: No config file means pure defaults; a present file only needs the keys it changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs

//! Engine configuration loading.
//!
//! The scoring engine runs entirely from [`EngineConfig::default`] unless an
//! operator points it at a YAML file. Every config section deserializes with
//! `#[serde(default)]`, so a file carrying a single threshold override is a
//! complete, valid config.

use std::fs;
use std::path::{Path, PathBuf};

use morsel_intelligence::config::{ConfigError, EngineConfig};
use thiserror::Error;

/// Failure to produce a usable engine config.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config file could not be read.
    #[error("failed to read engine config from {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents were not valid YAML for an engine config.
    #[error("invalid engine config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The parsed config failed semantic validation.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Load the engine config, merging a YAML file over the defaults if given.
///
/// # Errors
///
/// Returns [`ConfigLoadError`] if the file cannot be read, is not valid YAML,
/// or parses into a config that fails [`EngineConfig::validate`].
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig, ConfigLoadError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: EngineConfig = serde_yaml::from_str(&raw)?;
    config.validate()?;

    tracing::info!(path = %path.display(), "engine config loaded");
    Ok(config)
}
