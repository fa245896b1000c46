// ABOUTME: Complete in-memory application state owned by the workout store
// ABOUTME: Plans, active plan, exercise library, history, and the live session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::models::samples::{default_library, default_plans, DEFAULT_ACTIVE_PLAN_ID};
use liftlog_core::models::{ExerciseLibraryItem, Plan, WorkoutLog};
use serde::Serialize;

/// Everything the store knows.
///
/// Callers only ever see this through `&WorkoutState`; all changes go
/// through [`crate::store::WorkoutStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutState {
    /// All plans, in creation order
    pub plans: Vec<Plan>,
    /// Selected plan; may be stale if set to an unknown id
    pub active_plan_id: Option<String>,
    /// Exercise catalog for search
    pub exercise_library: Vec<ExerciseLibraryItem>,
    /// Finished workouts in the order they were finished
    pub workout_logs: Vec<WorkoutLog>,
    /// In-progress workout, outside history until finished
    pub current_workout_log: Option<WorkoutLog>,
}

impl WorkoutState {
    /// State for a first launch: starter plans and the built-in library
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            plans: default_plans(),
            active_plan_id: Some(DEFAULT_ACTIVE_PLAN_ID.to_owned()),
            exercise_library: default_library(),
            workout_logs: Vec::new(),
            current_workout_log: None,
        }
    }

    /// A live session exists exactly when there is a current log
    #[must_use]
    pub const fn is_live_workout(&self) -> bool {
        self.current_workout_log.is_some()
    }

    pub(crate) fn plan_mut(&mut self, plan_id: &str) -> Option<&mut Plan> {
        self.plans.iter_mut().find(|plan| plan.id == plan_id)
    }

    pub(crate) fn active_plan_mut(&mut self) -> Option<&mut Plan> {
        let active_id = self.active_plan_id.as_deref()?;
        self.plans.iter_mut().find(|plan| plan.id == active_id)
    }
}
