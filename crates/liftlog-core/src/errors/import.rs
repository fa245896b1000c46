// ABOUTME: Import validation error types for backup documents
// ABOUTME: Separates malformed JSON from structurally invalid plan data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Reasons a backup document was rejected.
///
/// An import is all-or-nothing: any of these means no state was touched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not valid JSON at all
    #[error("The file is not a valid JSON file: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The top-level value is not a JSON object
    #[error("Invalid file format: expected a JSON object at the top level")]
    NotAnObject,

    /// No `plans` field present
    #[error("Invalid file format: missing plans data")]
    MissingPlans,

    /// `plans` is present but not an array
    #[error("Invalid file format: plans must be an array")]
    PlansNotArray,

    /// A plan failed structural validation
    #[error("Invalid file format: invalid plan structure at index {index}: {reason}")]
    InvalidPlan {
        /// Position of the offending plan in the `plans` array
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}

impl ImportError {
    /// Create an "invalid plan" error
    #[must_use]
    pub fn invalid_plan(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPlan {
            index,
            reason: reason.into(),
        }
    }

    /// True when the document could not even be parsed as JSON
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::MalformedJson(_))
    }
}
