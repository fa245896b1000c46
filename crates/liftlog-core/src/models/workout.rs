// ABOUTME: Workout log models capturing a snapshot of a plan and per-set results
// ABOUTME: Logs are independent of the plan they came from once created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan::{Exercise, Plan};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actual performance for one set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Repetitions performed
    pub reps: u32,
    /// Weight used in kg
    pub weight: f64,
    /// Whether the user ticked the set off
    pub completed: bool,
}

impl LoggedSet {
    /// Volume contributed by this set (reps x weight)
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }

    /// Merge a partial update into this set
    pub fn apply(&mut self, update: LoggedSetUpdate) {
        if let Some(reps) = update.reps {
            self.reps = reps;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}

/// Partial update for a [`LoggedSet`]; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggedSetUpdate {
    /// New rep count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// New weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// New completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl LoggedSetUpdate {
    /// Update that only sets the completion flag
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            reps: None,
            weight: None,
            completed: Some(completed),
        }
    }
}

/// An exercise as performed in one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    /// Id of the plan exercise it was copied from
    pub id: String,
    /// Name at the time the workout started
    pub name: String,
    /// One entry per planned set
    pub sets: Vec<LoggedSet>,
}

impl LoggedExercise {
    /// Snapshot a plan exercise: `sets` entries pre-filled with its reps and weight
    #[must_use]
    pub fn from_exercise(exercise: &Exercise) -> Self {
        let template = LoggedSet {
            reps: exercise.reps,
            weight: exercise.weight,
            completed: false,
        };
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            sets: vec![template; exercise.sets as usize],
        }
    }

    /// Sets the user marked as done
    pub fn completed_sets(&self) -> impl Iterator<Item = &LoggedSet> {
        self.sets.iter().filter(|set| set.completed)
    }
}

/// A workout session, live or finished
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// Unique id
    pub id: String,
    /// Plan the workout was started from
    pub plan_id: String,
    /// Plan name at start time
    pub plan_name: String,
    /// When the workout started
    pub date: DateTime<Utc>,
    /// Exercises in plan order
    pub exercises: Vec<LoggedExercise>,
    /// Whole minutes from start to finish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Free-form notes entered at finish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutLog {
    /// Snapshot the given plan into a new, unfinished log
    #[must_use]
    pub fn from_plan(id: impl Into<String>, plan: &Plan, started_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            date: started_at,
            exercises: plan
                .exercises
                .iter()
                .map(LoggedExercise::from_exercise)
                .collect(),
            duration: None,
            notes: None,
        }
    }

    /// Mutable lookup of a logged exercise
    pub fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut LoggedExercise> {
        self.exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
    }

    /// Minutes elapsed between the start and `now`, rounded to nearest, never negative
    #[must_use]
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        let millis = (now - self.date).num_milliseconds().max(0);
        ((millis as f64) / 60_000.0).round() as u32
    }
}
