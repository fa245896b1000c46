// ABOUTME: Integration tests for plan and exercise management in the workout store
// ABOUTME: Covers active plan bookkeeping, field updates, no-op handling, and commit events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{add_filled_exercise, empty_store, sample_store, RecordingObserver};
use liftlog::models::{Exercise, ExerciseUpdate};
use liftlog::store::StoreEvent;

fn active_id_is_valid(store: &liftlog::store::WorkoutStore) -> bool {
    let state = store.state();
    state
        .active_plan_id
        .as_ref()
        .map_or(true, |id| state.plans.iter().any(|plan| &plan.id == id))
}

#[test]
fn test_create_plan_appends_empty_plan_and_activates_it() {
    let mut store = sample_store();
    let plan_id = store.create_plan("Upper Body");

    let state = store.state();
    assert_eq!(state.plans.len(), 4);
    assert_eq!(state.plans[3].id, plan_id);
    assert_eq!(state.plans[3].name, "Upper Body");
    assert!(state.plans[3].exercises.is_empty());
    assert_eq!(state.active_plan_id.as_deref(), Some(plan_id.as_str()));
    assert_eq!(store.active_plan().unwrap().name, "Upper Body");
}

#[test]
fn test_create_plan_generates_unique_ids() {
    let mut store = empty_store();
    let a = store.create_plan("A");
    let b = store.create_plan("A");
    assert_ne!(a, b);
    assert!(a.starts_with("plan-"));
}

#[test]
fn test_create_plan_keeps_name_as_given() {
    let mut store = empty_store();
    store.create_plan("  Spaced  ");
    assert_eq!(store.active_plan().unwrap().name, "  Spaced  ");
}

#[test]
fn test_delete_active_plan_reassigns_to_first_remaining() {
    let mut store = sample_store();
    store.set_active_plan("plan-2");
    store.delete_plan("plan-2");

    assert_eq!(store.state().plans.len(), 2);
    assert_eq!(store.state().active_plan_id.as_deref(), Some("plan-1"));
}

#[test]
fn test_delete_inactive_plan_keeps_active() {
    let mut store = sample_store();
    store.delete_plan("plan-3");
    assert_eq!(store.state().active_plan_id.as_deref(), Some("plan-1"));
}

#[test]
fn test_delete_last_plan_clears_active() {
    let mut store = empty_store();
    let only = store.create_plan("Only");
    store.delete_plan(&only);

    assert!(store.state().plans.is_empty());
    assert_eq!(store.state().active_plan_id, None);
    assert!(store.active_plan().is_none());
    assert!(store.active_exercises().is_empty());
}

#[test]
fn test_active_plan_id_never_dangles_across_create_and_delete() {
    let mut store = sample_store();
    let mut created = Vec::new();
    for name in ["A", "B", "C"] {
        created.push(store.create_plan(name));
        assert!(active_id_is_valid(&store));
    }
    for id in ["plan-1", created[1].as_str(), "missing", created[2].as_str()] {
        store.delete_plan(id);
        assert!(active_id_is_valid(&store));
    }
    for id in store
        .state()
        .plans
        .iter()
        .map(|plan| plan.id.clone())
        .collect::<Vec<_>>()
    {
        store.delete_plan(&id);
        assert!(active_id_is_valid(&store));
    }
    assert_eq!(store.state().active_plan_id, None);
}

#[test]
fn test_set_active_plan_to_unknown_id_degrades_reads() {
    let mut store = sample_store();
    store.set_active_plan("does-not-exist");

    assert_eq!(store.state().active_plan_id.as_deref(), Some("does-not-exist"));
    assert!(store.active_plan().is_none());
    assert!(store.active_exercises().is_empty());
    assert!(store.add_exercise().is_none());
    assert!(store.start_workout().is_none());
}

#[test]
fn test_rename_plan() {
    let mut store = sample_store();
    store.rename_plan("plan-2", "Back & Biceps");
    assert_eq!(store.state().plans[1].name, "Back & Biceps");

    let before = store.state().clone();
    store.rename_plan("missing", "Nope");
    assert_eq!(store.state(), &before);
}

#[test]
fn test_add_exercise_appends_blank_row() {
    let mut store = sample_store();
    let id = store.add_exercise().unwrap();

    let exercises = store.active_exercises();
    assert_eq!(exercises.len(), 4);
    assert_eq!(exercises[3], Exercise::empty(id));
}

#[test]
fn test_update_exercise_sets_each_field() {
    let mut store = empty_store();
    store.create_plan("Arms");
    let id = add_filled_exercise(&mut store, "Curls", 4, 12, 15.0);

    assert_eq!(
        store.active_exercises()[0],
        Exercise::new(id.clone(), "Curls", 4, 12, 15.0)
    );

    store.update_exercise(&id, ExerciseUpdate::Weight(17.5));
    assert!((store.active_exercises()[0].weight - 17.5).abs() < f64::EPSILON);
}

#[test]
fn test_exercise_operations_only_touch_active_plan() {
    let mut store = sample_store();
    store.set_active_plan("plan-2");

    // Exercise "1" belongs to plan-1
    store.update_exercise("1", ExerciseUpdate::Sets(9));
    store.remove_exercise("1");

    let push = &store.state().plans[0];
    assert_eq!(push.exercises.len(), 3);
    assert_eq!(push.exercises[0].sets, 3);
}

#[test]
fn test_remove_exercise() {
    let mut store = sample_store();
    store.remove_exercise("2");
    let names: Vec<&str> = store
        .active_exercises()
        .iter()
        .map(|exercise| exercise.name.as_str())
        .collect();
    assert_eq!(names, ["Bench Press", "Dips"]);
}

#[test]
fn test_commits_are_reported_and_no_ops_are_silent() {
    let mut store = sample_store();
    let observer = RecordingObserver::default();
    store.subscribe(observer.clone());

    store.delete_plan("missing");
    store.rename_plan("missing", "x");
    store.remove_exercise("missing");
    store.update_exercise("missing", ExerciseUpdate::Reps(1));
    assert_eq!(observer.count(), 0);

    store.update_exercise("1", ExerciseUpdate::Reps(5));
    let plan_id = store.create_plan("New");
    assert_eq!(
        observer.events(),
        vec![
            StoreEvent::ExerciseUpdated {
                plan_id: "plan-1".into(),
                exercise_id: "1".into(),
                field: "reps",
            },
            StoreEvent::PlanCreated { plan_id },
        ]
    );
}
