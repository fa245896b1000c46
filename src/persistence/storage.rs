// ABOUTME: Key-value storage backends for persisted application data
// ABOUTME: JSON files in a data directory, plus an in-memory map for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// String-valued key-value store
pub trait StorageBackend: Send + Sync {
    /// Value stored under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; absent keys are not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) the storage directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::storage(format!("Cannot create data directory {}", dir.display()))
                .with_source(e)
        })?;
        debug!(dir = %dir.display(), "File storage opened");
        Ok(Self { dir })
    }

    /// Directory holding the files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::invalid_input(format!(
                "Invalid storage key: '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = value.len(), "Storage key written");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(AppError::from(e)),
            _ => Ok(()),
        }
    }
}

/// Process-local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn len(&self) -> AppResult<usize> {
        self.entries
            .read()
            .map(|entries| entries.len())
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))
    }

    /// Whether nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn is_empty(&self) -> AppResult<bool> {
        self.len().map(|len| len == 0)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .write()
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries
            .write()
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))?
            .remove(key);
        Ok(())
    }
}
