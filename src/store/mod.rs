// ABOUTME: Workout store holding plans, exercise library, history, and the live session
// ABOUTME: Synchronous CRUD and workout lifecycle operations with commit notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Store
//!
//! Single source of truth for the application. Every operation runs to
//! completion synchronously. Operations that reference a plan, exercise,
//! or library item that does not exist are silent no-ops so stale UI
//! references never cause failures.
//!
//! ## Session lifecycle
//!
//! ```text
//!   Idle --start_workout (active plan exists)--> Live
//!   Live --finish_workout--> Idle   (log appended to history)
//!   Live --cancel_workout--> Idle   (log discarded)
//! ```
//!
//! After each committed change every subscribed [`StoreObserver`] is told
//! what happened. Persistence is one such observer; the store itself never
//! touches storage.

/// Commit events and the observer trait
pub mod observer;
/// The state owned by the store
pub mod state;
/// Pure derived reads over a state snapshot
pub mod views;

pub use observer::{StoreEvent, StoreObserver};
pub use state::WorkoutState;

use chrono::{DateTime, Utc};
use liftlog_core::constants::id_prefixes;
use liftlog_core::models::{
    generate_id, Exercise, ExerciseLibraryItem, ExerciseUpdate, LibraryItemUpdate,
    LoggedSetUpdate, Plan, WorkoutLog,
};
use tracing::{debug, info, warn};

/// Owner of all mutable application state
pub struct WorkoutStore {
    state: WorkoutState,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new(WorkoutState::default())
    }
}

impl std::fmt::Debug for WorkoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkoutStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl WorkoutStore {
    /// Wrap an existing state, typically loaded from storage
    #[must_use]
    pub fn new(state: WorkoutState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Register an observer for all subsequent commits
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Read-only snapshot of the current state
    #[must_use]
    pub const fn state(&self) -> &WorkoutState {
        &self.state
    }

    /// Consume the store, returning its state
    #[must_use]
    pub fn into_state(self) -> WorkoutState {
        self.state
    }

    fn commit(&self, event: StoreEvent) {
        debug!(?event, "Store commit");
        for observer in &self.observers {
            observer.on_commit(&event, &self.state);
        }
    }

    // ── Plans ───────────────────────────────────────────────────────────

    /// Append a new empty plan and make it active; returns its id.
    ///
    /// The name is stored as given.
    pub fn create_plan(&mut self, name: impl Into<String>) -> String {
        let plan = Plan::new(generate_id(Some(id_prefixes::PLAN)), name);
        let plan_id = plan.id.clone();
        self.state.plans.push(plan);
        self.state.active_plan_id = Some(plan_id.clone());
        info!(plan_id = %plan_id, "Plan created");
        self.commit(StoreEvent::PlanCreated {
            plan_id: plan_id.clone(),
        });
        plan_id
    }

    /// Remove a plan. If it was active, the first remaining plan (or none) becomes active.
    pub fn delete_plan(&mut self, plan_id: &str) {
        let before = self.state.plans.len();
        self.state.plans.retain(|plan| plan.id != plan_id);
        if self.state.plans.len() == before {
            return;
        }
        if self.state.active_plan_id.as_deref() == Some(plan_id) {
            self.state.active_plan_id = self.state.plans.first().map(|plan| plan.id.clone());
        }
        info!(
            plan_id,
            active_plan_id = ?self.state.active_plan_id,
            "Plan deleted"
        );
        self.commit(StoreEvent::PlanDeleted {
            plan_id: plan_id.to_owned(),
        });
    }

    /// Point the active plan at `plan_id`, whether or not it exists
    pub fn set_active_plan(&mut self, plan_id: impl Into<String>) {
        let plan_id = plan_id.into();
        if !self.state.plans.iter().any(|plan| plan.id == plan_id) {
            warn!(plan_id = %plan_id, "Active plan set to unknown id");
        }
        self.state.active_plan_id = Some(plan_id.clone());
        self.commit(StoreEvent::ActivePlanChanged { plan_id });
    }

    /// Rename a plan; no-op if unknown
    pub fn rename_plan(&mut self, plan_id: &str, new_name: impl Into<String>) {
        let Some(plan) = self.state.plan_mut(plan_id) else {
            return;
        };
        plan.name = new_name.into();
        self.commit(StoreEvent::PlanRenamed {
            plan_id: plan_id.to_owned(),
        });
    }

    /// Replace every plan at once and select `active_plan_id`
    ///
    /// Any live session is discarded since its plan may no longer exist.
    pub fn replace_plans(&mut self, plans: Vec<Plan>, active_plan_id: Option<String>) {
        if let Some(log) = self.state.current_workout_log.take() {
            warn!(workout_id = %log.id, "Live workout discarded by plan replacement");
        }
        let plan_count = plans.len();
        self.state.plans = plans;
        self.state.active_plan_id = active_plan_id;
        info!(plan_count, "Plans replaced");
        self.commit(StoreEvent::PlansReplaced { plan_count });
    }

    /// The active plan, if `active_plan_id` resolves
    #[must_use]
    pub fn active_plan(&self) -> Option<&Plan> {
        views::active_plan(&self.state)
    }

    /// Exercises of the active plan
    #[must_use]
    pub fn active_exercises(&self) -> &[Exercise] {
        views::active_exercises(&self.state)
    }

    // ── Exercises (active plan only) ────────────────────────────────────

    /// Append a blank exercise to the active plan; returns its id
    pub fn add_exercise(&mut self) -> Option<String> {
        let plan = self.state.active_plan_mut()?;
        let exercise = Exercise::empty(generate_id(None));
        let exercise_id = exercise.id.clone();
        plan.exercises.push(exercise);
        let plan_id = plan.id.clone();
        self.commit(StoreEvent::ExerciseAdded {
            plan_id,
            exercise_id: exercise_id.clone(),
        });
        Some(exercise_id)
    }

    /// Remove an exercise from the active plan
    pub fn remove_exercise(&mut self, exercise_id: &str) {
        let Some(plan) = self.state.active_plan_mut() else {
            return;
        };
        let before = plan.exercises.len();
        plan.exercises.retain(|exercise| exercise.id != exercise_id);
        if plan.exercises.len() == before {
            return;
        }
        let plan_id = plan.id.clone();
        self.commit(StoreEvent::ExerciseRemoved {
            plan_id,
            exercise_id: exercise_id.to_owned(),
        });
    }

    /// Change one field of an exercise in the active plan
    pub fn update_exercise(&mut self, exercise_id: &str, update: ExerciseUpdate) {
        let Some(plan) = self.state.active_plan_mut() else {
            return;
        };
        let plan_id = plan.id.clone();
        let Some(exercise) = plan.exercise_mut(exercise_id) else {
            return;
        };
        let field = update.field_name();
        exercise.apply(update);
        self.commit(StoreEvent::ExerciseUpdated {
            plan_id,
            exercise_id: exercise_id.to_owned(),
            field,
        });
    }

    // ── Exercise library ────────────────────────────────────────────────

    /// Add a catalog entry; returns its id. The name is trimmed.
    pub fn add_exercise_to_library(
        &mut self,
        name: &str,
        category: Option<String>,
        description: Option<String>,
    ) -> String {
        let item = ExerciseLibraryItem {
            id: generate_id(Some(id_prefixes::LIBRARY)),
            name: name.trim().to_owned(),
            category,
            description,
        };
        let item_id = item.id.clone();
        self.state.exercise_library.push(item);
        self.commit(StoreEvent::LibraryItemAdded {
            item_id: item_id.clone(),
        });
        item_id
    }

    /// Id of the library item with this name, adding one if none matches case-insensitively
    pub fn ensure_in_library(&mut self, name: &str) -> String {
        if let Some(existing) = views::library_item_named(&self.state, name) {
            return existing.id.clone();
        }
        self.add_exercise_to_library(name, None, None)
    }

    /// Remove a catalog entry
    pub fn remove_exercise_from_library(&mut self, item_id: &str) {
        let before = self.state.exercise_library.len();
        self.state.exercise_library.retain(|item| item.id != item_id);
        if self.state.exercise_library.len() == before {
            return;
        }
        self.commit(StoreEvent::LibraryItemRemoved {
            item_id: item_id.to_owned(),
        });
    }

    /// Edit a catalog entry
    pub fn update_exercise_in_library(&mut self, item_id: &str, update: LibraryItemUpdate) {
        let Some(item) = self
            .state
            .exercise_library
            .iter_mut()
            .find(|item| item.id == item_id)
        else {
            return;
        };
        item.apply(update);
        self.commit(StoreEvent::LibraryItemUpdated {
            item_id: item_id.to_owned(),
        });
    }

    /// Case-insensitive substring search; blank query returns everything
    #[must_use]
    pub fn search_exercise_library(&self, query: &str) -> Vec<&ExerciseLibraryItem> {
        views::search_library(&self.state, query)
    }

    // ── Live workout ────────────────────────────────────────────────────

    /// Whether a session is in progress
    #[must_use]
    pub const fn is_live_workout(&self) -> bool {
        self.state.is_live_workout()
    }

    /// The in-progress session
    #[must_use]
    pub const fn current_workout_log(&self) -> Option<&WorkoutLog> {
        self.state.current_workout_log.as_ref()
    }

    /// Start a session from the active plan now
    pub fn start_workout(&mut self) -> Option<String> {
        self.start_workout_at(Utc::now())
    }

    /// Start a session from the active plan, stamped `started_at`; returns the session id.
    ///
    /// No-op without an active plan or while a session is already live.
    pub fn start_workout_at(&mut self, started_at: DateTime<Utc>) -> Option<String> {
        if let Some(live) = &self.state.current_workout_log {
            warn!(workout_id = %live.id, "Workout already in progress; start ignored");
            return None;
        }
        let plan = views::active_plan(&self.state)?;
        let log = WorkoutLog::from_plan(generate_id(Some(id_prefixes::WORKOUT)), plan, started_at);
        let workout_id = log.id.clone();
        info!(
            workout_id = %workout_id,
            plan_id = %log.plan_id,
            exercises = log.exercises.len(),
            "Workout started"
        );
        self.state.current_workout_log = Some(log);
        self.commit(StoreEvent::WorkoutStarted {
            workout_id: workout_id.clone(),
        });
        Some(workout_id)
    }

    /// Merge `update` into one set of the live session; no-op if anything is missing
    pub fn update_logged_set(&mut self, exercise_id: &str, set_index: usize, update: LoggedSetUpdate) {
        let Some(set) = self
            .state
            .current_workout_log
            .as_mut()
            .and_then(|log| log.exercise_mut(exercise_id))
            .and_then(|exercise| exercise.sets.get_mut(set_index))
        else {
            return;
        };
        set.apply(update);
        self.commit(StoreEvent::LoggedSetUpdated {
            exercise_id: exercise_id.to_owned(),
            set_index,
        });
    }

    /// Finish the live session now
    pub fn finish_workout(&mut self, notes: Option<String>) -> Option<String> {
        self.finish_workout_at(notes, Utc::now())
    }

    /// Finish the live session at `finished_at`, appending it to history; returns its id.
    ///
    /// Every set is kept as last edited, completed or not.
    pub fn finish_workout_at(
        &mut self,
        notes: Option<String>,
        finished_at: DateTime<Utc>,
    ) -> Option<String> {
        let mut log = self.state.current_workout_log.take()?;
        log.duration = Some(log.elapsed_minutes(finished_at));
        log.notes = notes;
        let workout_id = log.id.clone();
        info!(
            workout_id = %workout_id,
            duration_minutes = ?log.duration,
            "Workout finished"
        );
        self.state.workout_logs.push(log);
        self.commit(StoreEvent::WorkoutFinished {
            workout_id: workout_id.clone(),
        });
        Some(workout_id)
    }

    /// Discard the live session without recording it
    pub fn cancel_workout(&mut self) {
        let Some(log) = self.state.current_workout_log.take() else {
            return;
        };
        info!(workout_id = %log.id, "Workout cancelled");
        self.commit(StoreEvent::WorkoutCancelled { workout_id: log.id });
    }

    /// Finished workouts, most recent first
    #[must_use]
    pub fn workout_history(&self) -> Vec<&WorkoutLog> {
        views::workout_history(&self.state)
    }
}
