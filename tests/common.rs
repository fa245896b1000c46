// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, store fixtures, and recording observers and cue sinks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `liftlog`

use chrono::{DateTime, TimeZone, Utc};
use liftlog::intelligence::tempo::TempoTick;
use liftlog::metronome::CueSink;
use liftlog::models::{ExerciseUpdate, LoggedSetUpdate};
use liftlog::store::{StoreEvent, StoreObserver, WorkoutState, WorkoutStore};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed timestamp on 2025-03-14 at `hour:minute` UTC
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, hour, minute, 0).unwrap()
}

/// Fixed timestamp on day `day` of March 2025 at 18:00 UTC
pub fn on_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 18, 0, 0).unwrap()
}

/// Empty store with logging initialized
pub fn empty_store() -> WorkoutStore {
    init_test_logging();
    WorkoutStore::new(WorkoutState::default())
}

/// Store seeded with the bundled sample plans and library
pub fn sample_store() -> WorkoutStore {
    init_test_logging();
    WorkoutStore::new(WorkoutState::with_sample_data())
}

/// Add a fully specified exercise to the active plan and return its id
pub fn add_filled_exercise(
    store: &mut WorkoutStore,
    name: &str,
    sets: u32,
    reps: u32,
    weight: f64,
) -> String {
    let id = store.add_exercise().expect("active plan");
    store.update_exercise(&id, ExerciseUpdate::Name(name.to_owned()));
    store.update_exercise(&id, ExerciseUpdate::Sets(sets));
    store.update_exercise(&id, ExerciseUpdate::Reps(reps));
    store.update_exercise(&id, ExerciseUpdate::Weight(weight));
    id
}

/// Run the active plan as a session finished at `finished_at`, completing every set
pub fn log_completed_workout(
    store: &mut WorkoutStore,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
) -> String {
    store.start_workout_at(started_at).expect("workout started");
    let sets: Vec<(String, usize)> = store
        .current_workout_log()
        .unwrap()
        .exercises
        .iter()
        .map(|exercise| (exercise.id.clone(), exercise.sets.len()))
        .collect();
    for (exercise_id, count) in sets {
        for index in 0..count {
            store.update_logged_set(&exercise_id, index, LoggedSetUpdate::completed(true));
        }
    }
    store.finish_workout_at(None, finished_at).expect("workout finished")
}

/// Observer remembering every event it was given
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl StoreObserver for RecordingObserver {
    fn on_commit(&self, event: &StoreEvent, _state: &WorkoutState) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Cue sink remembering every tick and speech cancellation
#[derive(Default)]
pub struct RecordingCueSink {
    ticks: Mutex<Vec<TempoTick>>,
    cancellations: Mutex<usize>,
}

impl RecordingCueSink {
    pub fn ticks(&self) -> Vec<TempoTick> {
        self.ticks.lock().unwrap().clone()
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.lock().unwrap().len()
    }

    pub fn cancellations(&self) -> usize {
        *self.cancellations.lock().unwrap()
    }
}

impl CueSink for RecordingCueSink {
    fn play(&self, tick: &TempoTick) {
        self.ticks.lock().unwrap().push(*tick);
    }

    fn cancel_speech(&self) {
        *self.cancellations.lock().unwrap() += 1;
    }
}
