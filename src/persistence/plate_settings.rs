// ABOUTME: Persistence of plate calculator settings under their own storage keys
// ABOUTME: Bar weight as a plain number and the plate inventory as a JSON array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::storage::StorageBackend;
use liftlog_core::constants::storage_keys;
use liftlog_core::errors::AppResult;
use liftlog_intelligence::plates::{PlateDenomination, PlateInventory};
use std::sync::Arc;
use tracing::warn;

/// Reads and writes [`PlateInventory`] independently of the workout state
#[derive(Clone)]
pub struct PlateSettingsRepository {
    backend: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for PlateSettingsRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlateSettingsRepository").finish_non_exhaustive()
    }
}

impl PlateSettingsRepository {
    /// Use `backend` for both settings keys
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Stored settings, starting from `defaults` for anything missing or unreadable
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend itself fails
    pub fn load_or(&self, defaults: PlateInventory) -> AppResult<PlateInventory> {
        let mut inventory = defaults;

        if let Some(raw) = self.backend.read(storage_keys::PLATE_BAR_WEIGHT)? {
            match raw.trim().parse::<f64>() {
                Ok(weight) if weight.is_finite() && weight >= 0.0 => inventory.bar_weight = weight,
                _ => warn!(value = %raw, "Ignoring invalid stored bar weight"),
            }
        }

        if let Some(raw) = self.backend.read(storage_keys::PLATE_INVENTORY)? {
            match serde_json::from_str::<Vec<PlateDenomination>>(&raw) {
                Ok(plates) => inventory.plates = plates,
                Err(e) => warn!(error = %e, "Failed to load plate settings; using defaults"),
            }
        }

        Ok(inventory)
    }

    /// Stored settings over the standard defaults
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend itself fails
    pub fn load(&self) -> AppResult<PlateInventory> {
        self.load_or(PlateInventory::default())
    }

    /// Persist both keys
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or a storage write fails
    pub fn save(&self, inventory: &PlateInventory) -> AppResult<()> {
        self.backend.write(
            storage_keys::PLATE_BAR_WEIGHT,
            &inventory.bar_weight.to_string(),
        )?;
        let plates = serde_json::to_string(&inventory.plates)?;
        self.backend.write(storage_keys::PLATE_INVENTORY, &plates)
    }
}
