// ABOUTME: Tests for workout summaries and per-exercise progress series
// ABOUTME: Exercises completion counting, volume, 1RM estimates, and tracked exercise listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::on_day;
use liftlog::intelligence::algorithms::OneRepMaxAlgorithm;
use liftlog::intelligence::progress::{
    exercise_progress, format_duration, tracked_exercises, ProgressMetric, TrackedExercise,
    WorkoutSummary,
};
use liftlog::models::{Exercise, LoggedExercise, LoggedSet, WorkoutLog};

const EPSILON: f64 = 0.01;

fn set(reps: u32, weight: f64, completed: bool) -> LoggedSet {
    LoggedSet {
        reps,
        weight,
        completed,
    }
}

fn logged(id: &str, name: &str, sets: Vec<LoggedSet>) -> LoggedExercise {
    LoggedExercise {
        id: id.to_owned(),
        name: name.to_owned(),
        sets,
    }
}

fn workout(day: u32, exercises: Vec<LoggedExercise>) -> WorkoutLog {
    WorkoutLog {
        id: format!("workout-{day}"),
        plan_id: "plan-legs".to_owned(),
        plan_name: "Legs".to_owned(),
        date: on_day(day),
        exercises,
        duration: Some(50),
        notes: None,
    }
}

/// Squat on days 3, 1, and 2, stored out of order; day 2 has nothing completed
fn squat_history() -> Vec<WorkoutLog> {
    vec![
        workout(
            3,
            vec![logged(
                "squat",
                "Squat",
                vec![set(5, 100.0, true), set(3, 110.0, true), set(1, 120.0, false)],
            )],
        ),
        workout(1, vec![logged("squat", "Squat", vec![set(5, 100.0, true)])]),
        workout(
            2,
            vec![logged("squat", "Squat", vec![set(5, 105.0, false)])],
        ),
    ]
}

#[test]
fn test_summary_counts_only_completed_volume() {
    let history = squat_history();
    let summary = WorkoutSummary::from_log(&history[0]);
    assert_eq!(summary.total_sets, 3);
    assert_eq!(summary.completed_sets, 2);
    assert!((summary.total_volume - 830.0).abs() < EPSILON);
    assert!((summary.completion_ratio() - 2.0 / 3.0).abs() < EPSILON);
}

#[test]
fn test_summary_of_empty_workout() {
    let summary = WorkoutSummary::from_log(&workout(1, Vec::new()));
    assert_eq!(summary, WorkoutSummary::default());
    assert!(summary.completion_ratio().abs() < f64::EPSILON);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(None), "Unknown");
    assert_eq!(format_duration(Some(0)), "Unknown");
    assert_eq!(format_duration(Some(45)), "45m");
    assert_eq!(format_duration(Some(65)), "1h 5m");
    assert_eq!(format_duration(Some(120)), "2h 0m");
}

#[test]
fn test_progress_is_ascending_and_skips_incomplete_workouts() {
    let history = squat_history();
    let points = exercise_progress(&history, "squat", OneRepMaxAlgorithm::Epley);

    let dates: Vec<_> = points.iter().map(|point| point.date).collect();
    assert_eq!(dates, [on_day(1), on_day(3)]);

    assert!((points[0].max_weight - 100.0).abs() < EPSILON);
    assert!((points[0].volume - 500.0).abs() < EPSILON);
    assert!((points[0].estimated_one_rep_max - 116.67).abs() < EPSILON);

    assert!((points[1].max_weight - 110.0).abs() < EPSILON);
    assert!((points[1].volume - 830.0).abs() < EPSILON);
    assert!((points[1].estimated_one_rep_max - 121.0).abs() < EPSILON);
}

#[test]
fn test_progress_matches_by_name_as_well_as_id() {
    let history = squat_history();
    let by_id = exercise_progress(&history, "squat", OneRepMaxAlgorithm::Brzycki);
    let by_name = exercise_progress(&history, "Squat", OneRepMaxAlgorithm::Brzycki);
    assert_eq!(by_id, by_name);
    assert!(exercise_progress(&history, "Deadlift", OneRepMaxAlgorithm::Epley).is_empty());
}

#[test]
fn test_best_set_tie_prefers_more_reps() {
    let history = vec![workout(
        4,
        vec![logged(
            "bench",
            "Bench",
            vec![set(5, 100.0, true), set(8, 100.0, true)],
        )],
    )];
    let points = exercise_progress(&history, "bench", OneRepMaxAlgorithm::Epley);
    assert_eq!(points.len(), 1);
    assert!((points[0].estimated_one_rep_max - 126.67).abs() < EPSILON);
}

#[test]
fn test_point_value_selects_metric() {
    let history = squat_history();
    let point = exercise_progress(&history, "squat", OneRepMaxAlgorithm::Epley)[1];
    assert!((point.value(ProgressMetric::Weight) - 110.0).abs() < EPSILON);
    assert!((point.value(ProgressMetric::Volume) - 830.0).abs() < EPSILON);
    assert!((point.value(ProgressMetric::OneRepMax) - 121.0).abs() < EPSILON);
}

#[test]
fn test_tracked_exercises_merge_plan_and_history() {
    let plan = [
        Exercise::new("a", "Bench", 3, 8, 60.0),
        Exercise::new("b", "  ", 3, 8, 0.0),
    ];
    let history = vec![workout(
        1,
        vec![
            logged("c", "deadlift", vec![set(5, 140.0, true)]),
            logged("a", "Bench Press", vec![set(8, 60.0, true)]),
        ],
    )];

    let tracked = tracked_exercises(&plan, &history);
    assert_eq!(
        tracked,
        [
            TrackedExercise {
                id: "a".to_owned(),
                name: "Bench Press".to_owned(),
            },
            TrackedExercise {
                id: "c".to_owned(),
                name: "deadlift".to_owned(),
            },
        ]
    );
}

#[test]
fn test_metric_parsing() {
    assert_eq!("Weight".parse::<ProgressMetric>().unwrap(), ProgressMetric::Weight);
    assert_eq!("volume".parse::<ProgressMetric>().unwrap(), ProgressMetric::Volume);
    assert_eq!("1RM".parse::<ProgressMetric>().unwrap(), ProgressMetric::OneRepMax);
    assert!("reps".parse::<ProgressMetric>().is_err());
    assert_eq!(ProgressMetric::default(), ProgressMetric::Weight);
}
