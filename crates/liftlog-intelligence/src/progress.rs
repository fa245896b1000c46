// ABOUTME: Workout statistics and per-exercise progress series from logged history
// ABOUTME: Computes set completion, training volume, and estimated one-rep max over time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress tracking over finished workouts.
//!
//! Only completed sets count toward volume and strength estimates; sets the
//! user skipped stay in the log but are ignored here.

use crate::algorithms::OneRepMaxAlgorithm;
use chrono::{DateTime, Utc};
use liftlog_core::errors::AppError;
use liftlog_core::models::{Exercise, LoggedExercise, LoggedSet, WorkoutLog};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Set counts and volume for one workout
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    /// Every planned set
    pub total_sets: usize,
    /// Sets ticked off
    pub completed_sets: usize,
    /// Sum of reps x weight over completed sets
    pub total_volume: f64,
}

impl WorkoutSummary {
    /// Summarize a live or finished log
    #[must_use]
    pub fn from_log(log: &WorkoutLog) -> Self {
        log.exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter())
            .fold(Self::default(), |mut summary, set| {
                summary.total_sets += 1;
                if set.completed {
                    summary.completed_sets += 1;
                    summary.total_volume += set.volume();
                }
                summary
            })
    }

    /// Fraction of sets completed, 0 when there are no sets
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        if self.total_sets == 0 {
            0.0
        } else {
            self.completed_sets as f64 / self.total_sets as f64
        }
    }
}

/// Human-readable workout length: `Unknown`, `45m`, or `1h 5m`
#[must_use]
pub fn format_duration(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => "Unknown".to_owned(),
        Some(minutes) if minutes < 60 => format!("{minutes}m"),
        Some(minutes) => format!("{}h {}m", minutes / 60, minutes % 60),
    }
}

/// Which series to chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMetric {
    /// Heaviest completed set
    #[default]
    Weight,
    /// Total completed volume
    Volume,
    /// Estimated one-rep max of the best set
    OneRepMax,
}

impl ProgressMetric {
    /// Axis label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight (kg)",
            Self::Volume => "Volume (kg)",
            Self::OneRepMax => "Estimated 1RM (kg)",
        }
    }
}

impl FromStr for ProgressMetric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "volume" => Ok(Self::Volume),
            "1rm" | "one_rep_max" | "onerm" => Ok(Self::OneRepMax),
            other => Err(AppError::invalid_input(format!(
                "Unknown progress metric: '{other}'. Valid options: weight, volume, 1rm"
            ))),
        }
    }
}

/// One exercise's numbers in one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// Workout date
    pub date: DateTime<Utc>,
    /// Heaviest completed set
    pub max_weight: f64,
    /// Completed reps x weight
    pub volume: f64,
    /// One-rep max estimated from the best set
    pub estimated_one_rep_max: f64,
}

impl ProgressPoint {
    /// Value of the chosen series
    #[must_use]
    pub const fn value(&self, metric: ProgressMetric) -> f64 {
        match metric {
            ProgressMetric::Weight => self.max_weight,
            ProgressMetric::Volume => self.volume,
            ProgressMetric::OneRepMax => self.estimated_one_rep_max,
        }
    }
}

/// Heaviest set, ties broken by more reps
fn best_set<'a>(sets: impl Iterator<Item = &'a LoggedSet>) -> Option<&'a LoggedSet> {
    sets.reduce(|best, current| {
        if current.weight > best.weight
            || ((current.weight - best.weight).abs() < f64::EPSILON && current.reps > best.reps)
        {
            current
        } else {
            best
        }
    })
}

fn point_for(
    date: DateTime<Utc>,
    exercise: &LoggedExercise,
    algorithm: OneRepMaxAlgorithm,
) -> Option<ProgressPoint> {
    let best = best_set(exercise.completed_sets())?;
    let max_weight = exercise
        .completed_sets()
        .map(|set| set.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let volume = exercise.completed_sets().map(LoggedSet::volume).sum();

    Some(ProgressPoint {
        date,
        max_weight,
        volume,
        estimated_one_rep_max: algorithm.estimate(best.weight, best.reps),
    })
}

/// Progress series for the exercise identified by `key` (its id or its name).
///
/// Workouts where the exercise is absent or has no completed sets are
/// skipped. Points are in ascending date order.
#[must_use]
pub fn exercise_progress(
    history: &[WorkoutLog],
    key: &str,
    algorithm: OneRepMaxAlgorithm,
) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = history
        .iter()
        .filter_map(|workout| {
            let exercise = workout
                .exercises
                .iter()
                .find(|exercise| exercise.id == key || exercise.name == key)?;
            point_for(workout.date, exercise, algorithm)
        })
        .collect();
    points.sort_by_key(|point| point.date);

    debug!(
        exercise = key,
        points = points.len(),
        algorithm = algorithm.name(),
        "Computed exercise progress"
    );
    points
}

/// An exercise that can be charted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedExercise {
    /// Exercise id
    pub id: String,
    /// Exercise name
    pub name: String,
}

/// Named exercises from the active plan and history, one per id, sorted by name.
///
/// History entries override plan entries for the same id.
#[must_use]
pub fn tracked_exercises(plan_exercises: &[Exercise], history: &[WorkoutLog]) -> Vec<TrackedExercise> {
    let mut by_id: HashMap<&str, &str> = HashMap::new();
    let plan = plan_exercises
        .iter()
        .map(|exercise| (exercise.id.as_str(), exercise.name.as_str()));
    let logged = history
        .iter()
        .flat_map(|workout| workout.exercises.iter())
        .map(|exercise| (exercise.id.as_str(), exercise.name.as_str()));

    for (id, name) in plan.chain(logged) {
        if !name.trim().is_empty() {
            by_id.insert(id, name);
        }
    }

    let mut tracked: Vec<TrackedExercise> = by_id
        .into_iter()
        .map(|(id, name)| TrackedExercise {
            id: id.to_owned(),
            name: name.to_owned(),
        })
        .collect();
    tracked.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    tracked
}
