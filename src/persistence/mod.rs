// ABOUTME: Persistence adapter mirroring workout store state into key-value storage
// ABOUTME: Versioned envelope load/save and a write-through store observer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Persistence
//!
//! The store never writes to storage itself. [`WriteThroughObserver`] is
//! subscribed to it and saves a [`PersistedState`] after every commit that
//! changes persisted data. The live session is never persisted.
//!
//! Stored documents may be bare (`{"plans": [...], ...}`) or wrapped in an
//! envelope (`{"state": {...}, "version": 0}`). Any subset of fields may be
//! missing; missing fields load as empty.

/// Plate calculator settings
pub mod plate_settings;
/// Storage backends
pub mod storage;

pub use plate_settings::PlateSettingsRepository;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};

use crate::store::{StoreEvent, StoreObserver, WorkoutState};
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{ExerciseLibraryItem, Plan, WorkoutLog};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Envelope schema version written by [`StatePersister::save`]
pub const STATE_VERSION: u32 = 0;

/// The persisted subset of [`WorkoutState`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Plans
    #[serde(default)]
    pub plans: Vec<Plan>,
    /// Active plan id
    #[serde(default)]
    pub active_plan_id: Option<String>,
    /// Exercise catalog
    #[serde(default)]
    pub exercise_library: Vec<ExerciseLibraryItem>,
    /// Finished workouts
    #[serde(default)]
    pub workout_logs: Vec<WorkoutLog>,
}

impl From<&WorkoutState> for PersistedState {
    fn from(state: &WorkoutState) -> Self {
        Self {
            plans: state.plans.clone(),
            active_plan_id: state.active_plan_id.clone(),
            exercise_library: state.exercise_library.clone(),
            workout_logs: state.workout_logs.clone(),
        }
    }
}

impl PersistedState {
    /// Rebuild a store state with no live session
    #[must_use]
    pub fn into_state(self) -> WorkoutState {
        WorkoutState {
            plans: self.plans,
            active_plan_id: self.active_plan_id,
            exercise_library: self.exercise_library,
            workout_logs: self.workout_logs,
            current_workout_log: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredEnvelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

/// Loads and saves the workout state under one storage key
#[derive(Clone)]
pub struct StatePersister {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl std::fmt::Debug for StatePersister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatePersister")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl StatePersister {
    /// Persist under `key` in `backend`
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Storage key in use
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored state, `None` when nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the document is not valid JSON
    /// of the expected shape
    pub fn load(&self) -> AppResult<Option<PersistedState>> {
        let Some(raw) = self.backend.read(&self.key)? else {
            debug!(key = %self.key, "No persisted state");
            return Ok(None);
        };
        let value: Value = serde_json::from_str(&raw)?;
        if !value.is_object() {
            return Err(AppError::invalid_format(format!(
                "Persisted state under '{}' is not an object",
                self.key
            )));
        }
        let state = if value.get("state").is_some() {
            let envelope: StoredEnvelope = serde_json::from_value(value)?;
            if envelope.version != STATE_VERSION {
                warn!(
                    key = %self.key,
                    version = envelope.version,
                    "Persisted state has an unknown version; loading anyway"
                );
            }
            envelope.state
        } else {
            serde_json::from_value(value)?
        };
        info!(
            key = %self.key,
            plans = state.plans.len(),
            workouts = state.workout_logs.len(),
            "Persisted state loaded"
        );
        Ok(Some(state))
    }

    /// Write `state` wrapped in the current envelope
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails
    pub fn save(&self, state: &WorkoutState) -> AppResult<()> {
        let envelope = StoredEnvelope {
            state: PersistedState::from(state),
            version: STATE_VERSION,
        };
        let json = serde_json::to_string(&envelope)?;
        self.backend.write(&self.key, &json)
    }
}

/// Store observer saving the state after every persisted change
#[derive(Debug, Clone)]
pub struct WriteThroughObserver {
    persister: StatePersister,
}

impl WriteThroughObserver {
    /// Save through `persister`
    #[must_use]
    pub const fn new(persister: StatePersister) -> Self {
        Self { persister }
    }
}

impl StoreObserver for WriteThroughObserver {
    fn on_commit(&self, event: &StoreEvent, state: &WorkoutState) {
        if !event.touches_persisted_state() {
            return;
        }
        match self.persister.save(state) {
            Ok(()) => debug!(key = %self.persister.key(), ?event, "State persisted"),
            Err(e) => warn!(
                key = %self.persister.key(),
                error = %e,
                "Failed to persist state"
            ),
        }
    }
}
