// ABOUTME: Main library entry point for the LiftLog workout planner
// ABOUTME: Workout store, persistence adapter, data portability, and metronome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `LiftLog`
//!
//! Workout planning and logging: build plans of exercises, run a live
//! workout session against the active plan, and keep a history of finished
//! sessions. Alongside the store sit a barbell plate calculator and a tempo
//! metronome.
//!
//! ## Architecture
//!
//! - **Store**: the single owner of plans, library, history, and the live session
//! - **Persistence**: a store observer writing JSON to a key-value backend
//! - **Portability**: versioned backup export and validated import
//! - **Metronome**: a tokio task driving the tempo sequencer
//! - **Config**: environment-driven settings
//!
//! ## Example Usage
//!
//! ```rust
//! use liftlog::models::ExerciseUpdate;
//! use liftlog::store::{WorkoutState, WorkoutStore};
//!
//! let mut store = WorkoutStore::new(WorkoutState::default());
//! store.create_plan("Upper Body");
//! if let Some(exercise_id) = store.add_exercise() {
//!     store.update_exercise(&exercise_id, ExerciseUpdate::Name("Bench Press".into()));
//!     store.update_exercise(&exercise_id, ExerciseUpdate::Sets(3));
//! }
//!
//! store.start_workout();
//! store.finish_workout(Some("Felt strong".into()));
//! assert_eq!(store.workout_history().len(), 1);
//! ```

/// Environment-driven configuration
pub mod config;

/// Unified error handling re-exported from `liftlog-core`
pub mod errors;

/// Training algorithms re-exported from `liftlog-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Tokio tick source for the tempo sequencer
pub mod metronome;

/// Domain models re-exported from `liftlog-core`
pub mod models;

/// Storage backends and the write-through observer
pub mod persistence;

/// Backup export and import
pub mod portability;

/// The workout store and its derived views
pub mod store;

pub use liftlog_core::constants;
