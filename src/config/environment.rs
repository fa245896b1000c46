// ABOUTME: Environment-based application configuration with validated defaults
// ABOUTME: Data directory, storage key, metronome tick period, and default bar weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::constants::{plates, storage_keys, tempo};
use liftlog_core::errors::AppError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Data directory override
pub const DATA_DIR_VAR: &str = "LIFTLOG_DATA_DIR";
/// Storage key override for the workout state
pub const STORAGE_KEY_VAR: &str = "LIFTLOG_STORAGE_KEY";
/// Metronome period in milliseconds
pub const TEMPO_TICK_MS_VAR: &str = "LIFTLOG_TEMPO_TICK_MS";
/// Default bar weight in kg for the plate calculator
pub const BAR_WEIGHT_VAR: &str = "LIFTLOG_BAR_WEIGHT";

const APP_DIR_NAME: &str = "liftlog";
const FALLBACK_DATA_DIR: &str = ".liftlog";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Parse error: {var}={value:?}: {reason}")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
        /// Parser message
        reason: String,
    },

    /// A variable parsed but is outside its allowed range
    #[error("Value out of range: {var}: {expected}")]
    ValueOutOfRange {
        /// Variable name
        var: &'static str,
        /// Allowed range
        expected: &'static str,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding persisted JSON files
    pub data_dir: PathBuf,
    /// Storage key for the workout state
    pub storage_key: String,
    /// Metronome period
    pub tempo_tick: Duration,
    /// Bar weight used when no plate settings are stored
    pub default_bar_weight: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: storage_keys::WORKOUT_STORAGE.to_owned(),
            tempo_tick: tempo::TICK_PERIOD,
            default_bar_weight: plates::DEFAULT_BAR_WEIGHT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, defaulting anything unset
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable is unparseable or out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = env::var(DATA_DIR_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let storage_key = env::var(STORAGE_KEY_VAR)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.storage_key);

        let tempo_tick = match env_parsed::<u64>(TEMPO_TICK_MS_VAR)? {
            Some(0) => {
                return Err(ConfigError::ValueOutOfRange {
                    var: TEMPO_TICK_MS_VAR,
                    expected: "must be greater than 0",
                })
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.tempo_tick,
        };

        let default_bar_weight = match env_parsed::<f64>(BAR_WEIGHT_VAR)? {
            Some(weight) if !weight.is_finite() || weight < 0.0 => {
                return Err(ConfigError::ValueOutOfRange {
                    var: BAR_WEIGHT_VAR,
                    expected: "must be a finite number >= 0",
                })
            }
            Some(weight) => weight,
            None => defaults.default_bar_weight,
        };

        let config = Self {
            data_dir,
            storage_key,
            tempo_tick,
            default_bar_weight,
        };
        debug!(?config, "Configuration loaded from environment");
        Ok(config)
    }
}

/// Platform data directory, or `./.liftlog` when the platform has none
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dir| dir.join(APP_DIR_NAME),
    )
}

fn env_parsed<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = env::var(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Parse {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
