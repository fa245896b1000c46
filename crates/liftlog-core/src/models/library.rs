// ABOUTME: Exercise library catalog item used for autocomplete and search
// ABOUTME: Never referenced by id from plans; matching is by free-text name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A catalog entry offered as a suggestion when naming exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLibraryItem {
    /// Unique id
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Grouping such as "Chest" or "Legs"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExerciseLibraryItem {
    /// Whether `needle` (already lowercased) occurs in name, category, or description
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        contains(&self.name)
            || self.category.as_deref().is_some_and(contains)
            || self.description.as_deref().is_some_and(contains)
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: LibraryItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

/// Partial update for a library item.
///
/// The outer `Option` means "leave unchanged"; an inner `None` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryItemUpdate {
    /// New name
    pub name: Option<String>,
    /// New category
    pub category: Option<Option<String>>,
    /// New description
    pub description: Option<Option<String>>,
}

impl LibraryItemUpdate {
    /// Update that only renames
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
