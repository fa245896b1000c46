// ABOUTME: Backup export and validated import of workout plans
// ABOUTME: Imports are checked in full before anything in the store changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Portability
//!
//! Export writes the plans and active plan id into a versioned JSON
//! document. Import is all-or-nothing: [`parse_import`] validates the whole
//! document and only a successful [`ImportedData`] can reach
//! [`apply_import`]. History and the exercise library are not part of a
//! backup and are left alone by an import.

use crate::store::{WorkoutState, WorkoutStore};
use chrono::{DateTime, Utc};
use liftlog_core::constants::export::{FILE_PREFIX, FORMAT_VERSION};
use liftlog_core::errors::{AppResult, ImportError};
use liftlog_core::models::Plan;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Backup document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// All plans
    pub plans: Vec<Plan>,
    /// Active plan id at export time
    pub active_plan_id: Option<String>,
    /// When the export was made
    pub export_date: DateTime<Utc>,
    /// Document format version
    pub version: String,
}

/// Snapshot the exportable part of `state`, stamped `now`
#[must_use]
pub fn export_document(state: &WorkoutState, now: DateTime<Utc>) -> ExportDocument {
    ExportDocument {
        plans: state.plans.clone(),
        active_plan_id: state.active_plan_id.clone(),
        export_date: now,
        version: FORMAT_VERSION.to_owned(),
    }
}

/// Pretty-printed export JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn export_json(state: &WorkoutState, now: DateTime<Utc>) -> AppResult<String> {
    let document = export_document(state, now);
    info!(plans = document.plans.len(), "Exporting plans");
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Suggested file name such as `liftlog-backup-2025-03-14.json`
#[must_use]
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("{FILE_PREFIX}-{}.json", now.format("%Y-%m-%d"))
}

/// A validated import, ready to apply
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedData {
    /// Plans to install
    pub plans: Vec<Plan>,
    /// Requested active plan, if any
    pub active_plan_id: Option<String>,
}

impl ImportedData {
    /// Active plan after import: the requested id if it names an imported plan,
    /// otherwise the first imported plan
    #[must_use]
    pub fn resolved_active_plan_id(&self) -> Option<String> {
        self.active_plan_id
            .as_ref()
            .filter(|wanted| self.plans.iter().any(|plan| &plan.id == *wanted))
            .cloned()
            .or_else(|| self.plans.first().map(|plan| plan.id.clone()))
    }
}

fn non_empty_str<'a>(plan: &'a Value, field: &str) -> Option<&'a str> {
    plan.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn validate_plan(index: usize, plan: &Value) -> Result<(), ImportError> {
    if !plan.is_object() {
        return Err(ImportError::invalid_plan(index, "plan is not an object"));
    }
    if non_empty_str(plan, "id").is_none() {
        return Err(ImportError::invalid_plan(index, "missing or empty id"));
    }
    if non_empty_str(plan, "name").is_none() {
        return Err(ImportError::invalid_plan(index, "missing or empty name"));
    }
    if !plan.get("exercises").is_some_and(Value::is_array) {
        return Err(ImportError::invalid_plan(index, "exercises must be an array"));
    }
    Ok(())
}

/// Validate a backup document without touching any state
///
/// # Errors
///
/// Returns [`ImportError::MalformedJson`] for unparseable input and a
/// structural variant for anything else that is wrong
pub fn parse_import(json: &str) -> Result<ImportedData, ImportError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(mut fields) = document else {
        return Err(ImportError::NotAnObject);
    };

    let plans_value = match fields.remove("plans") {
        None | Some(Value::Null) => return Err(ImportError::MissingPlans),
        Some(value) => value,
    };
    let Value::Array(raw_plans) = plans_value else {
        return Err(ImportError::PlansNotArray);
    };

    let mut plans = Vec::with_capacity(raw_plans.len());
    for (index, raw) in raw_plans.into_iter().enumerate() {
        validate_plan(index, &raw)?;
        let plan: Plan = serde_json::from_value(raw)
            .map_err(|e| ImportError::invalid_plan(index, e.to_string()))?;
        plans.push(plan);
    }

    let active_plan_id = fields
        .get("activePlanId")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(ImportedData {
        plans,
        active_plan_id,
    })
}

/// Install validated plans, replacing all existing ones
pub fn apply_import(store: &mut WorkoutStore, data: ImportedData) {
    let active_plan_id = data.resolved_active_plan_id();
    if data.active_plan_id.is_some() && data.active_plan_id != active_plan_id {
        warn!(
            requested = ?data.active_plan_id,
            resolved = ?active_plan_id,
            "Imported active plan not found; using first plan"
        );
    }
    info!(plans = data.plans.len(), "Importing plans");
    store.replace_plans(data.plans, active_plan_id);
}

/// Validate and apply a backup document in one step
///
/// # Errors
///
/// Returns the validation failure; the store is untouched in that case
pub fn import_json(store: &mut WorkoutStore, json: &str) -> Result<usize, ImportError> {
    let data = parse_import(json).inspect_err(|e| warn!(error = %e, "Import rejected"))?;
    let count = data.plans.len();
    apply_import(store, data);
    Ok(count)
}
