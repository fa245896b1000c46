// ABOUTME: Backup commands for liftlog-cli
// ABOUTME: Exports plans to a dated JSON file and imports them back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use liftlog::errors::{AppError, AppResult};
use liftlog::portability::{backup_file_name, export_json, import_json};
use std::fs;
use std::path::{Path, PathBuf};

use crate::App;

/// Write all plans to `path`, or to a dated file in the current directory
pub fn export(app: &App, path: Option<PathBuf>) -> AppResult<()> {
    let now = Utc::now();
    let path = path.unwrap_or_else(|| PathBuf::from(backup_file_name(now)));
    let json = export_json(app.store.state(), now)?;
    fs::write(&path, json).map_err(|e| {
        AppError::storage(format!("Cannot write {}", path.display())).with_source(e)
    })?;
    println!(
        "Exported {} plans to {}",
        app.store.state().plans.len(),
        path.display()
    );
    Ok(())
}

/// Replace all plans with the contents of a backup file
pub fn import(app: &mut App, path: &Path) -> AppResult<()> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Cannot read {}", path.display())).with_source(e)
    })?;
    let count = import_json(&mut app.store, &json)?;
    let active = app
        .store
        .active_plan()
        .map_or_else(|| "none".to_owned(), |plan| plan.name.clone());
    println!("Imported {count} plans; active plan: {active}");
    Ok(())
}
