// ABOUTME: Workout session and history commands for liftlog-cli
// ABOUTME: Logs a completed session, lists history, and charts exercise progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::errors::{AppError, AppResult};
use liftlog::intelligence::progress::{exercise_progress, tracked_exercises, WorkoutSummary};
use liftlog::intelligence::{OneRepMaxAlgorithm, ProgressMetric};
use liftlog::models::LoggedSetUpdate;
use tracing::info;

use crate::helpers::display::{print_history, print_progress, print_workout_summary};
use crate::App;

type Result<T> = AppResult<T>;

/// Run the active plan as a session with every set completed at its target
pub fn quick(app: &mut App, notes: Option<String>) -> Result<()> {
    app.store
        .start_workout()
        .ok_or_else(|| AppError::not_found("Active plan"))?;

    let sets: Vec<(String, usize)> = app
        .store
        .current_workout_log()
        .map(|log| {
            log.exercises
                .iter()
                .map(|exercise| (exercise.id.clone(), exercise.sets.len()))
                .collect()
        })
        .unwrap_or_default();
    for (exercise_id, count) in &sets {
        for set_index in 0..*count {
            app.store
                .update_logged_set(exercise_id, set_index, LoggedSetUpdate::completed(true));
        }
    }

    let notes = notes.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());
    let workout_id = app
        .store
        .finish_workout(notes)
        .ok_or_else(|| AppError::internal("Workout session vanished before finishing"))?;
    info!(workout_id = %workout_id, "Quick workout logged");

    if let Some(log) = app.store.state().workout_logs.iter().find(|log| log.id == workout_id) {
        print_workout_summary(log, &WorkoutSummary::from_log(log));
    }
    Ok(())
}

/// Print finished workouts, most recent first
pub fn history(app: &App) {
    print_history(&app.store.workout_history());
}

/// Print one exercise's progress series
pub fn progress(app: &App, exercise: &str, metric: &str, formula: &str) -> Result<()> {
    let metric: ProgressMetric = metric.parse()?;
    let algorithm: OneRepMaxAlgorithm = formula.parse()?;
    let state = app.store.state();

    let points = exercise_progress(&state.workout_logs, exercise, algorithm);
    if points.is_empty() {
        let known = tracked_exercises(app.store.active_exercises(), &state.workout_logs);
        let names: Vec<&str> = known.iter().map(|tracked| tracked.name.as_str()).collect();
        return Err(AppError::not_found(format!(
            "Completed sets for '{exercise}' (tracked exercises: {})",
            if names.is_empty() {
                "none".to_owned()
            } else {
                names.join(", ")
            }
        )));
    }
    print_progress(exercise, metric, algorithm, &points);
    Ok(())
}
