// ABOUTME: Core data models for plans, the exercise library, and workout logs
// ABOUTME: Serializable with camelCase field names to match the persisted layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plans own their exercises. Workout logs are snapshots: a
//! [`LoggedExercise`] copies the exercise name at start time and never
//! points back at the plan. Library items are a free-standing catalog used
//! for search only.

/// Exercise library catalog entries
pub mod library;
/// Plans and their exercises
pub mod plan;
/// Bundled starter plans and library
pub mod samples;
/// Logged workouts, exercises, and sets
pub mod workout;

pub use library::{ExerciseLibraryItem, LibraryItemUpdate};
pub use plan::{Exercise, ExerciseUpdate, Plan};
pub use workout::{LoggedExercise, LoggedSet, LoggedSetUpdate, WorkoutLog};

use uuid::Uuid;

/// Generate a fresh identifier, optionally namespaced with a prefix
#[must_use]
pub fn generate_id(prefix: Option<&str>) -> String {
    let id = Uuid::new_v4().simple().to_string();
    match prefix {
        Some(prefix) => format!("{prefix}-{id}"),
        None => id,
    }
}
