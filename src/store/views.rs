// ABOUTME: Pure derived views over a workout state snapshot
// ABOUTME: Active plan lookup, date-sorted history, and library search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::state::WorkoutState;
use liftlog_core::models::{Exercise, ExerciseLibraryItem, Plan, WorkoutLog};

/// The plan `active_plan_id` points at, if it exists
#[must_use]
pub fn active_plan(state: &WorkoutState) -> Option<&Plan> {
    let active_id = state.active_plan_id.as_deref()?;
    state.plans.iter().find(|plan| plan.id == active_id)
}

/// Exercises of the active plan, empty when there is none
#[must_use]
pub fn active_exercises(state: &WorkoutState) -> &[Exercise] {
    active_plan(state).map(|plan| plan.exercises.as_slice()).unwrap_or_default()
}

/// Finished workouts, most recent first.
///
/// Workouts with the same date keep their stored order. The stored order
/// itself is not changed.
#[must_use]
pub fn workout_history(state: &WorkoutState) -> Vec<&WorkoutLog> {
    let mut history: Vec<&WorkoutLog> = state.workout_logs.iter().collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

/// Library items whose name, category, or description contain `query`,
/// ignoring case. A blank query returns the whole library in order.
#[must_use]
pub fn search_library<'a>(state: &'a WorkoutState, query: &str) -> Vec<&'a ExerciseLibraryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return state.exercise_library.iter().collect();
    }
    state
        .exercise_library
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

/// Library item with this name, compared case-insensitively
#[must_use]
pub fn library_item_named<'a>(state: &'a WorkoutState, name: &str) -> Option<&'a ExerciseLibraryItem> {
    let wanted = name.trim().to_lowercase();
    state
        .exercise_library
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
}
