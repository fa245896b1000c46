// ABOUTME: Core types and constants for the LiftLog workout planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Core
//!
//! Foundation crate providing shared types and constants for the LiftLog
//! workout planner. Everything here is plain data: plans, exercises, the
//! exercise library and logged workouts, plus the error types every other
//! crate reports through.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ImportError`
//! - **constants**: Defaults (plates, bar weight, tempo), storage keys, export version
//! - **models**: Plans, exercises, library items, and workout logs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (Plan, Exercise, `WorkoutLog`, etc.)
pub mod models;
