// ABOUTME: Exercise library commands for liftlog-cli
// ABOUTME: Searches and extends the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::errors::{AppError, AppResult};
use liftlog::store::views;

use crate::helpers::display::print_library;
use crate::App;

/// Print library entries matching `query`
pub fn search(app: &App, query: &str) {
    let matches = app.store.search_exercise_library(query);
    print_library(&matches);
}

/// Add a library entry unless one with the same name exists
pub fn add(
    app: &mut App,
    name: &str,
    category: Option<String>,
    description: Option<String>,
) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Exercise name cannot be empty"));
    }
    if views::library_item_named(app.store.state(), name).is_some() {
        return Err(AppError::invalid_input(format!(
            "'{name}' is already in the library"
        )));
    }
    let item_id = app
        .store
        .add_exercise_to_library(name, category, description);
    println!("Added '{name}' to the library ({item_id})");
    Ok(())
}
