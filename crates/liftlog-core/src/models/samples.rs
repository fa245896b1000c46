// ABOUTME: Starter plans and exercise library shipped with a fresh install
// ABOUTME: Push/Pull/Leg split plus a categorized catalog of common lifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::library::ExerciseLibraryItem;
use super::plan::{Exercise, Plan};

/// Id of the plan that is active on first launch
pub const DEFAULT_ACTIVE_PLAN_ID: &str = "plan-1";

/// The three-day split a new user starts with
#[must_use]
pub fn default_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "plan-1".into(),
            name: "Push Day".into(),
            exercises: vec![
                Exercise::new("1", "Bench Press", 3, 10, 80.0),
                Exercise::new("2", "Overhead Press", 3, 8, 50.0),
                Exercise::new("3", "Dips", 3, 12, 0.0),
            ],
        },
        Plan {
            id: "plan-2".into(),
            name: "Pull Day".into(),
            exercises: vec![
                Exercise::new("4", "Pull-ups", 3, 8, 0.0),
                Exercise::new("5", "Rows", 3, 10, 60.0),
                Exercise::new("6", "Face Pulls", 3, 15, 20.0),
            ],
        },
        Plan {
            id: "plan-3".into(),
            name: "Leg Day".into(),
            exercises: vec![
                Exercise::new("7", "Squats", 4, 8, 100.0),
                Exercise::new("8", "Deadlift", 3, 6, 120.0),
                Exercise::new("9", "Lunges", 3, 12, 40.0),
            ],
        },
    ]
}

const DEFAULT_LIBRARY: &[(&str, &str)] = &[
    ("Bench Press", "Chest"),
    ("Incline Bench Press", "Chest"),
    ("Dips", "Chest"),
    ("Push-ups", "Chest"),
    ("Overhead Press", "Shoulders"),
    ("Lateral Raises", "Shoulders"),
    ("Face Pulls", "Shoulders"),
    ("Pull-ups", "Back"),
    ("Rows", "Back"),
    ("Lat Pulldown", "Back"),
    ("Deadlift", "Back"),
    ("Squats", "Legs"),
    ("Front Squats", "Legs"),
    ("Lunges", "Legs"),
    ("Romanian Deadlift", "Legs"),
    ("Leg Press", "Legs"),
    ("Calf Raises", "Legs"),
    ("Bicep Curls", "Arms"),
    ("Tricep Extensions", "Arms"),
    ("Plank", "Core"),
];

/// Built-in exercise catalog
#[must_use]
pub fn default_library() -> Vec<ExerciseLibraryItem> {
    DEFAULT_LIBRARY
        .iter()
        .enumerate()
        .map(|(index, (name, category))| ExerciseLibraryItem {
            id: format!("lib-{}", index + 1),
            name: (*name).to_owned(),
            category: Some((*category).to_owned()),
            description: None,
        })
        .collect()
}
