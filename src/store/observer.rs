// ABOUTME: Commit notifications emitted by the workout store after each mutation
// ABOUTME: Observers such as write-through persistence subscribe to these events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::state::WorkoutState;
use serde::Serialize;

/// What a committed mutation changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    /// New plan appended and made active
    PlanCreated {
        /// New plan id
        plan_id: String,
    },
    /// Plan removed
    PlanDeleted {
        /// Removed plan id
        plan_id: String,
    },
    /// Active plan pointer changed
    ActivePlanChanged {
        /// New active id
        plan_id: String,
    },
    /// Plan renamed
    PlanRenamed {
        /// Renamed plan id
        plan_id: String,
    },
    /// Blank exercise appended to the active plan
    ExerciseAdded {
        /// Plan that received it
        plan_id: String,
        /// New exercise id
        exercise_id: String,
    },
    /// Exercise removed from the active plan
    ExerciseRemoved {
        /// Plan it was removed from
        plan_id: String,
        /// Removed exercise id
        exercise_id: String,
    },
    /// One exercise field changed
    ExerciseUpdated {
        /// Plan holding the exercise
        plan_id: String,
        /// Changed exercise
        exercise_id: String,
        /// Field name
        field: &'static str,
    },
    /// Library item added
    LibraryItemAdded {
        /// New item id
        item_id: String,
    },
    /// Library item removed
    LibraryItemRemoved {
        /// Removed item id
        item_id: String,
    },
    /// Library item edited
    LibraryItemUpdated {
        /// Edited item id
        item_id: String,
    },
    /// Live session began
    WorkoutStarted {
        /// Session log id
        workout_id: String,
    },
    /// A live set changed
    LoggedSetUpdated {
        /// Logged exercise id
        exercise_id: String,
        /// Index of the set
        set_index: usize,
    },
    /// Session appended to history
    WorkoutFinished {
        /// Finished log id
        workout_id: String,
    },
    /// Session discarded
    WorkoutCancelled {
        /// Discarded log id
        workout_id: String,
    },
    /// All plans replaced, as by an import
    PlansReplaced {
        /// Number of plans now held
        plan_count: usize,
    },
}

impl StoreEvent {
    /// Whether the persisted subset (plans, active plan, library, history) changed.
    ///
    /// Live-session edits only touch the current log, which is never persisted.
    #[must_use]
    pub const fn touches_persisted_state(&self) -> bool {
        !matches!(
            self,
            Self::WorkoutStarted { .. } | Self::LoggedSetUpdated { .. } | Self::WorkoutCancelled { .. }
        )
    }
}

/// Receives every committed mutation along with the resulting state
pub trait StoreObserver: Send + Sync {
    /// Called after the mutation is fully applied
    fn on_commit(&self, event: &StoreEvent, state: &WorkoutState);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreEvent, &WorkoutState) + Send + Sync,
{
    fn on_commit(&self, event: &StoreEvent, state: &WorkoutState) {
        self(event, state);
    }
}
