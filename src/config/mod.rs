// ABOUTME: Configuration management module for application settings
// ABOUTME: Loads storage location, metronome period, and plate defaults from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `LiftLog`
//!
//! - **Environment**: application configuration from environment variables

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, ConfigError};
