// ABOUTME: Plan and Exercise models with typed field updates
// ABOUTME: A plan is a named, ordered template of exercises with set/rep/weight targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One row of a plan: a name plus set, rep, and weight targets.
///
/// An empty name marks a row the user has not filled in yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique within the owning plan
    pub id: String,
    /// Free-form name, not a library reference
    #[serde(default)]
    pub name: String,
    /// Target number of sets
    #[serde(default)]
    pub sets: u32,
    /// Target repetitions per set
    #[serde(default)]
    pub reps: u32,
    /// Target weight per set in kg
    #[serde(default)]
    pub weight: f64,
}

impl Exercise {
    /// Create a blank row with the given id
    #[must_use]
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            sets: 0,
            reps: 0,
            weight: 0.0,
        }
    }

    /// Create a filled-in row
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sets,
            reps,
            weight,
        }
    }

    /// Apply a single-field update in place
    pub fn apply(&mut self, update: ExerciseUpdate) {
        match update {
            ExerciseUpdate::Name(name) => self.name = name,
            ExerciseUpdate::Sets(sets) => self.sets = sets,
            ExerciseUpdate::Reps(reps) => self.reps = reps,
            ExerciseUpdate::Weight(weight) => self.weight = weight,
        }
    }
}

/// A change to exactly one exercise field, carrying a value of that field's type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExerciseUpdate {
    /// Replace the name
    Name(String),
    /// Replace the target set count
    Sets(u32),
    /// Replace the target reps
    Reps(u32),
    /// Replace the target weight
    Weight(f64),
}

impl ExerciseUpdate {
    /// Name of the field this update touches
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Sets(_) => "sets",
            Self::Reps(_) => "reps",
            Self::Weight(_) => "weight",
        }
    }
}

/// A named, ordered workout template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercises in the order they are performed
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Plan {
    /// Create a plan with no exercises
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == exercise_id)
    }

    /// Mutable lookup of an exercise by id
    pub fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut Exercise> {
        self.exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
    }

    /// Sum of target sets across all exercises
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|exercise| exercise.sets).sum()
    }
}
