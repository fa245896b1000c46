// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for liftlog-cli
// ABOUTME: Provides consistent display functions for plans, history, progress, and plates

use liftlog::intelligence::progress::{format_duration, ProgressPoint, WorkoutSummary};
use liftlog::intelligence::{OneRepMaxAlgorithm, PlateSolution, ProgressMetric};
use liftlog::models::{ExerciseLibraryItem, Plan, WorkoutLog};

/// Display all plans with the active one marked
pub fn print_plan_list(plans: &[Plan], active_plan_id: Option<&str>) {
    if plans.is_empty() {
        println!("No plans yet. Create one with: liftlog-cli plan create <name>");
        return;
    }
    println!("{:<3}{:<40} {:<24} {:>9}", "", "ID", "NAME", "EXERCISES");
    println!("{}", "=".repeat(80));
    for plan in plans {
        let marker = if Some(plan.id.as_str()) == active_plan_id {
            "*"
        } else {
            ""
        };
        println!(
            "{marker:<3}{:<40} {:<24} {:>9}",
            plan.id,
            plan.name,
            plan.exercises.len()
        );
    }
}

/// Display one plan's exercises
pub fn print_plan(plan: &Plan) {
    println!("\n{} ({})", plan.name, plan.id);
    println!("{}", "=".repeat(80));
    if plan.exercises.is_empty() {
        println!("   No exercises");
        return;
    }
    for exercise in &plan.exercises {
        let name = if exercise.name.is_empty() {
            "(unnamed)"
        } else {
            exercise.name.as_str()
        };
        println!(
            "   {:<32} {:>2} x {:<3} @ {:>6} kg   {}",
            name, exercise.sets, exercise.reps, exercise.weight, exercise.id
        );
    }
    println!("   Total sets: {}", plan.total_sets());
}

/// Display library entries
pub fn print_library(items: &[&ExerciseLibraryItem]) {
    if items.is_empty() {
        println!("No matching exercises");
        return;
    }
    for item in items {
        let category = item.category.as_deref().unwrap_or("-");
        match &item.description {
            Some(description) => println!("   {:<28} {category:<12} {description}", item.name),
            None => println!("   {:<28} {category}", item.name),
        }
    }
}

/// Display a just-finished workout
pub fn print_workout_summary(log: &WorkoutLog, summary: &WorkoutSummary) {
    println!("\nWorkout Logged: {}", log.plan_name);
    println!("{}", "=".repeat(50));
    println!("   Date: {}", log.date.format("%Y-%m-%d %H:%M UTC"));
    println!("   Duration: {}", format_duration(log.duration));
    println!(
        "   Sets: {}/{} completed",
        summary.completed_sets, summary.total_sets
    );
    println!("   Volume: {:.1} kg", summary.total_volume);
    if let Some(notes) = &log.notes {
        println!("   Notes: {notes}");
    }
}

/// Display finished workouts in the given order
pub fn print_history(history: &[&WorkoutLog]) {
    if history.is_empty() {
        println!("No workouts logged yet");
        return;
    }
    println!(
        "{:<18} {:<24} {:>10} {:>9} {:>12}",
        "DATE", "PLAN", "DURATION", "SETS", "VOLUME (kg)"
    );
    println!("{}", "=".repeat(80));
    for log in history {
        let summary = WorkoutSummary::from_log(log);
        println!(
            "{:<18} {:<24} {:>10} {:>9} {:>12.1}",
            log.date.format("%Y-%m-%d %H:%M"),
            log.plan_name,
            format_duration(log.duration),
            format!("{}/{}", summary.completed_sets, summary.total_sets),
            summary.total_volume
        );
    }
}

/// Display a progress series with a bar per point
pub fn print_progress(
    exercise: &str,
    metric: ProgressMetric,
    algorithm: OneRepMaxAlgorithm,
    points: &[ProgressPoint],
) {
    println!("\n{exercise}: {}", metric.label());
    if metric == ProgressMetric::OneRepMax {
        println!("Formula: {} ({})", algorithm.name(), algorithm.formula());
    }
    println!("{}", "=".repeat(60));

    let max = points
        .iter()
        .map(|point| point.value(metric))
        .fold(0.0_f64, f64::max);
    for point in points {
        let value = point.value(metric);
        let width = if max > 0.0 {
            ((value / max) * 30.0).round() as usize
        } else {
            0
        };
        println!(
            "{}  {:>8.1}  {}",
            point.date.format("%Y-%m-%d"),
            value,
            "#".repeat(width)
        );
    }

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let change = last.value(metric) - first.value(metric);
        println!("Change: {change:+.1} over {} workouts", points.len());
    }
}

/// Display a plate breakdown
pub fn print_plate_solution(target: f64, bar_weight: f64, solution: &PlateSolution) {
    println!("\nTarget: {target} kg (bar {bar_weight} kg)");
    println!("{}", "=".repeat(40));
    if solution.plates.is_empty() {
        println!("   Bar only");
    } else {
        println!("   Per side:");
        for plate in &solution.plates {
            println!("   {:>3} x {:>5} kg", plate.count, plate.weight);
        }
        println!("   Per side total: {} kg", solution.per_side_weight());
    }
    println!("   Loaded: {} kg", solution.total_weight);
    if !solution.possible {
        println!(
            "   Cannot hit the target exactly with available plates ({:+} kg)",
            solution.difference(target)
        );
    }
}
