// ABOUTME: Integration tests for the exercise library catalog
// ABOUTME: Covers search semantics, CRUD operations, and add-if-missing behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{empty_store, sample_store};
use liftlog::models::LibraryItemUpdate;

fn names<'a>(items: &[&'a liftlog::models::ExerciseLibraryItem]) -> Vec<&'a str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn test_blank_query_returns_whole_library_in_order() {
    let store = sample_store();
    let all = store.search_exercise_library("");
    assert_eq!(all.len(), 20);
    assert_eq!(all[0].name, "Bench Press");
    assert_eq!(all[19].name, "Plank");
    assert_eq!(store.search_exercise_library("   ").len(), 20);
}

#[test]
fn test_search_is_case_insensitive_substring_over_name_and_category() {
    let store = sample_store();
    assert_eq!(
        names(&store.search_exercise_library("SQUAT")),
        ["Squats", "Front Squats"]
    );
    assert_eq!(
        names(&store.search_exercise_library("arms")),
        ["Bicep Curls", "Tricep Extensions"]
    );
    assert!(store.search_exercise_library("zumba").is_empty());
}

#[test]
fn test_search_matches_description() {
    let mut store = empty_store();
    store.add_exercise_to_library(
        "Farmer Carry",
        Some("Full Body".into()),
        Some("Walk holding heavy dumbbells".into()),
    );
    assert_eq!(
        names(&store.search_exercise_library("dumbbell")),
        ["Farmer Carry"]
    );
}

#[test]
fn test_add_trims_name_and_returns_prefixed_id() {
    let mut store = empty_store();
    let id = store.add_exercise_to_library("  Hip Thrust ", Some("Legs".into()), None);

    let item = &store.state().exercise_library[0];
    assert_eq!(item.id, id);
    assert!(id.starts_with("lib-"));
    assert_eq!(item.name, "Hip Thrust");
    assert_eq!(item.category.as_deref(), Some("Legs"));
}

#[test]
fn test_ensure_in_library_reuses_case_insensitive_match() {
    let mut store = sample_store();
    let existing = store.ensure_in_library("bench press");
    assert_eq!(existing, "lib-1");
    assert_eq!(store.state().exercise_library.len(), 20);

    let added = store.ensure_in_library("Good Mornings");
    assert_ne!(added, existing);
    assert_eq!(store.state().exercise_library.len(), 21);
    assert_eq!(store.ensure_in_library("GOOD MORNINGS"), added);
}

#[test]
fn test_update_and_remove_library_items() {
    let mut store = sample_store();
    store.update_exercise_in_library(
        "lib-3",
        LibraryItemUpdate {
            description: Some(Some("Bodyweight".into())),
            category: Some(None),
            ..LibraryItemUpdate::default()
        },
    );
    store.update_exercise_in_library("lib-4", LibraryItemUpdate::rename("Push Ups"));

    let library = &store.state().exercise_library;
    assert_eq!(library[2].name, "Dips");
    assert_eq!(library[2].category, None);
    assert_eq!(library[2].description.as_deref(), Some("Bodyweight"));
    assert_eq!(library[3].name, "Push Ups");

    store.remove_exercise_from_library("lib-1");
    store.remove_exercise_from_library("missing");
    assert_eq!(store.state().exercise_library.len(), 19);
    assert!(store.search_exercise_library("bench press").iter().all(|item| item.id != "lib-1"));
}

#[test]
fn test_library_is_independent_of_plans() {
    let mut store = sample_store();
    store.remove_exercise_from_library("lib-1");
    assert_eq!(store.active_exercises()[0].name, "Bench Press");
}
