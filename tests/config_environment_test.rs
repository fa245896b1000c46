// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults, and range errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlog::config::environment::{
    AppConfig, ConfigError, BAR_WEIGHT_VAR, DATA_DIR_VAR, STORAGE_KEY_VAR, TEMPO_TICK_MS_VAR,
};
use liftlog::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn clear_env() {
    for var in [DATA_DIR_VAR, STORAGE_KEY_VAR, TEMPO_TICK_MS_VAR, BAR_WEIGHT_VAR] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.storage_key, "workout-storage");
    assert_eq!(config.tempo_tick, Duration::from_secs(1));
    assert!((config.default_bar_weight - 20.0).abs() < f64::EPSILON);
    assert!(config.data_dir.ends_with("liftlog") || config.data_dir.ends_with(".liftlog"));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(DATA_DIR_VAR, "/tmp/liftlog-test");
    env::set_var(STORAGE_KEY_VAR, "  gym-a ");
    env::set_var(TEMPO_TICK_MS_VAR, "500");
    env::set_var(BAR_WEIGHT_VAR, "15");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/liftlog-test"));
    assert_eq!(config.storage_key, "gym-a");
    assert_eq!(config.tempo_tick, Duration::from_millis(500));
    assert!((config.default_bar_weight - 15.0).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(STORAGE_KEY_VAR, "   ");
    env::set_var(TEMPO_TICK_MS_VAR, "");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.storage_key, "workout-storage");
    assert_eq!(config.tempo_tick, Duration::from_secs(1));
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_value_is_a_parse_error() {
    clear_env();
    env::set_var(TEMPO_TICK_MS_VAR, "fast");
    match AppConfig::from_env() {
        Err(ConfigError::Parse { var, value, .. }) => {
            assert_eq!(var, TEMPO_TICK_MS_VAR);
            assert_eq!(value, "fast");
        }
        other => panic!("unexpected {other:?}"),
    }
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_values_are_rejected() {
    clear_env();
    env::set_var(TEMPO_TICK_MS_VAR, "0");
    assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::ValueOutOfRange { var: TEMPO_TICK_MS_VAR, .. })
    ));
    clear_env();

    env::set_var(BAR_WEIGHT_VAR, "-5");
    let error = AppConfig::from_env().unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange { var: BAR_WEIGHT_VAR, .. }));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigError);
    clear_env();
}
