// ABOUTME: Integration tests for the persistence adapter and storage backends
// ABOUTME: Covers write-through saving, tolerant loading, envelopes, and plate settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, init_test_logging, log_completed_workout, sample_store};
use liftlog::constants::storage_keys;
use liftlog::intelligence::plates::{PlateDenomination, PlateInventory};
use liftlog::models::LoggedSetUpdate;
use liftlog::persistence::{
    FileStorage, MemoryStorage, PersistedState, PlateSettingsRepository, StatePersister,
    StorageBackend, WriteThroughObserver,
};
use liftlog::store::{WorkoutState, WorkoutStore};
use std::sync::Arc;
use tempfile::TempDir;

fn memory_persister() -> (Arc<MemoryStorage>, StatePersister) {
    init_test_logging();
    let storage = Arc::new(MemoryStorage::new());
    let persister = StatePersister::new(
        Arc::clone(&storage) as Arc<dyn StorageBackend>,
        storage_keys::WORKOUT_STORAGE,
    );
    (storage, persister)
}

#[test]
fn test_load_returns_none_when_nothing_saved() -> Result<()> {
    let (_storage, persister) = memory_persister();
    assert!(persister.load()?.is_none());
    Ok(())
}

#[test]
fn test_write_through_saves_after_each_persisted_commit() -> Result<()> {
    let (storage, persister) = memory_persister();
    let mut store = sample_store();
    store.subscribe(WriteThroughObserver::new(persister.clone()));

    let plan_id = store.create_plan("Upper");
    let saved = persister.load()?.unwrap();
    assert_eq!(saved.plans.len(), 4);
    assert_eq!(saved.active_plan_id.as_deref(), Some(plan_id.as_str()));
    assert_eq!(saved.exercise_library.len(), 20);

    store.rename_plan(&plan_id, "Upper A");
    assert_eq!(persister.load()?.unwrap().plans[3].name, "Upper A");
    assert_eq!(storage.len()?, 1);
    Ok(())
}

#[test]
fn test_live_session_is_never_persisted() -> Result<()> {
    let (_storage, persister) = memory_persister();
    let mut store = sample_store();
    store.subscribe(WriteThroughObserver::new(persister.clone()));

    store.start_workout_at(at(9, 0));
    store.update_logged_set("1", 0, LoggedSetUpdate::completed(true));
    assert!(persister.load()?.is_none());

    store.finish_workout_at(None, at(9, 45));
    let saved = persister.load()?.unwrap();
    assert_eq!(saved.workout_logs.len(), 1);
    assert_eq!(saved.workout_logs[0].duration, Some(45));

    let restored = saved.into_state();
    assert!(!restored.is_live_workout());
    Ok(())
}

#[test]
fn test_round_trip_through_file_storage() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let backend: Arc<dyn StorageBackend> = Arc::new(FileStorage::open(dir.path().join("data"))?);
    let persister = StatePersister::new(Arc::clone(&backend), storage_keys::WORKOUT_STORAGE);

    let mut store = sample_store();
    store.subscribe(WriteThroughObserver::new(persister.clone()));
    log_completed_workout(&mut store, at(7, 0), at(8, 5));
    let expected = PersistedState::from(store.state());

    assert!(dir.path().join("data/workout-storage.json").exists());
    let reopened = WorkoutStore::new(persister.load()?.unwrap().into_state());
    assert_eq!(PersistedState::from(reopened.state()), expected);
    assert_eq!(reopened.workout_history()[0].duration, Some(65));
    Ok(())
}

#[test]
fn test_load_tolerates_missing_fields() -> Result<()> {
    let (storage, persister) = memory_persister();
    storage.write(
        storage_keys::WORKOUT_STORAGE,
        r#"{"plans":[{"id":"p","name":"Only","exercises":[]}],"activePlanId":"p"}"#,
    )?;

    let state = persister.load()?.unwrap();
    assert_eq!(state.plans.len(), 1);
    assert!(state.exercise_library.is_empty());
    assert!(state.workout_logs.is_empty());

    storage.write(storage_keys::WORKOUT_STORAGE, "{}")?;
    assert_eq!(persister.load()?.unwrap(), PersistedState::default());
    Ok(())
}

#[test]
fn test_load_accepts_versioned_envelope() -> Result<()> {
    let (storage, persister) = memory_persister();
    storage.write(
        storage_keys::WORKOUT_STORAGE,
        r#"{"state":{"plans":[],"activePlanId":null,"workoutLogs":[]},"version":0}"#,
    )?;
    let state = persister.load()?.unwrap();
    assert!(state.plans.is_empty());
    assert_eq!(state.active_plan_id, None);
    Ok(())
}

#[test]
fn test_load_rejects_corrupt_documents() -> Result<()> {
    let (storage, persister) = memory_persister();
    storage.write(storage_keys::WORKOUT_STORAGE, "not json")?;
    assert!(persister.load().is_err());

    storage.write(storage_keys::WORKOUT_STORAGE, "[1, 2]")?;
    assert!(persister.load().is_err());
    Ok(())
}

#[test]
fn test_save_writes_envelope() -> Result<()> {
    let (storage, persister) = memory_persister();
    persister.save(&WorkoutState::with_sample_data())?;

    let raw = storage.read(storage_keys::WORKOUT_STORAGE)?.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["activePlanId"], "plan-1");
    assert!(value["state"].get("currentWorkoutLog").is_none());
    Ok(())
}

#[test]
fn test_plate_settings_default_when_absent() -> Result<()> {
    let settings = PlateSettingsRepository::new(Arc::new(MemoryStorage::new()));
    assert_eq!(settings.load()?, PlateInventory::default());
    Ok(())
}

#[test]
fn test_plate_settings_round_trip() -> Result<()> {
    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
    let settings = PlateSettingsRepository::new(Arc::clone(&storage));

    let mut inventory = PlateInventory::default();
    inventory.bar_weight = 15.0;
    inventory.set_count(25.0, 2);
    settings.save(&inventory)?;

    assert_eq!(
        storage.read(storage_keys::PLATE_BAR_WEIGHT)?.as_deref(),
        Some("15")
    );
    assert_eq!(settings.load()?, inventory);
    Ok(())
}

#[test]
fn test_corrupt_plate_inventory_falls_back_to_defaults() -> Result<()> {
    init_test_logging();
    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
    storage.write(storage_keys::PLATE_BAR_WEIGHT, "10")?;
    storage.write(storage_keys::PLATE_INVENTORY, "{broken")?;

    let inventory = PlateSettingsRepository::new(storage).load()?;
    assert!((inventory.bar_weight - 10.0).abs() < f64::EPSILON);
    assert_eq!(inventory.plates, PlateInventory::default().plates);
    Ok(())
}

#[test]
fn test_plate_inventory_reads_extra_fields() -> Result<()> {
    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
    storage.write(
        storage_keys::PLATE_INVENTORY,
        r#"[{"weight":20,"count":2,"color":"bg-blue-600"},{"weight":5,"count":1}]"#,
    )?;
    let inventory = PlateSettingsRepository::new(storage).load()?;
    assert_eq!(
        inventory.plates,
        vec![PlateDenomination::new(20.0, 2), PlateDenomination::new(5.0, 1)]
    );
    Ok(())
}
