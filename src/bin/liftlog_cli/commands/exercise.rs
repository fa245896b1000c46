// ABOUTME: Exercise editing commands for liftlog-cli
// ABOUTME: Adds, removes, and changes exercises of the active plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::errors::{AppError, AppResult};
use liftlog::models::ExerciseUpdate;

use crate::{App, ExerciseField};

type Result<T> = AppResult<T>;

fn require_active_exercise(app: &App, exercise_id: &str) -> Result<()> {
    let active = app
        .store
        .active_plan()
        .ok_or_else(|| AppError::not_found("Active plan"))?;
    if active.exercise(exercise_id).is_none() {
        return Err(AppError::not_found(format!(
            "Exercise '{exercise_id}' in plan '{}'",
            active.name
        )));
    }
    Ok(())
}

/// Turn a field and raw value into a typed update
pub fn parse_update(field: ExerciseField, value: &str) -> Result<ExerciseUpdate> {
    let value = value.trim();
    let invalid = |kind: &str| AppError::invalid_input(format!("'{value}' is not a valid {kind}"));
    match field {
        ExerciseField::Name => Ok(ExerciseUpdate::Name(value.to_owned())),
        ExerciseField::Sets => value
            .parse()
            .map(ExerciseUpdate::Sets)
            .map_err(|_| invalid("set count")),
        ExerciseField::Reps => value
            .parse()
            .map(ExerciseUpdate::Reps)
            .map_err(|_| invalid("rep count")),
        ExerciseField::Weight => match value.parse::<f64>() {
            Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(ExerciseUpdate::Weight(weight)),
            _ => Err(invalid("weight")),
        },
    }
}

/// Append a filled-in exercise to the active plan and make sure its name is in the library
pub fn add(app: &mut App, name: &str, sets: u32, reps: u32, weight: f64) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Exercise name cannot be empty"));
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(AppError::invalid_input("Weight must be a number >= 0"));
    }
    let exercise_id = app
        .store
        .add_exercise()
        .ok_or_else(|| AppError::not_found("Active plan"))?;
    app.store
        .update_exercise(&exercise_id, ExerciseUpdate::Name(name.to_owned()));
    app.store.update_exercise(&exercise_id, ExerciseUpdate::Sets(sets));
    app.store.update_exercise(&exercise_id, ExerciseUpdate::Reps(reps));
    app.store
        .update_exercise(&exercise_id, ExerciseUpdate::Weight(weight));
    app.store.ensure_in_library(name);

    println!("Added {name} {sets}x{reps} @ {weight} kg ({exercise_id})");
    Ok(())
}

/// Remove an exercise from the active plan
pub fn remove(app: &mut App, exercise_id: &str) -> Result<()> {
    require_active_exercise(app, exercise_id)?;
    app.store.remove_exercise(exercise_id);
    println!("Removed exercise {exercise_id}");
    Ok(())
}

/// Apply one field change to an exercise of the active plan
pub fn set(app: &mut App, exercise_id: &str, update: ExerciseUpdate) -> Result<()> {
    require_active_exercise(app, exercise_id)?;
    let field = update.field_name();
    if let ExerciseUpdate::Name(name) = &update {
        if !name.is_empty() {
            app.store.ensure_in_library(name);
        }
    }
    app.store.update_exercise(exercise_id, update);
    println!("Updated {field} of {exercise_id}");
    Ok(())
}
