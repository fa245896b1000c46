// ABOUTME: Plan management commands for liftlog-cli
// ABOUTME: Handles list, create, delete, use, rename, and show operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::errors::{AppError, AppResult};
use liftlog::models::Plan;

use crate::helpers::display::{print_plan, print_plan_list};
use crate::App;

type Result<T> = AppResult<T>;

fn find_plan<'a>(app: &'a App, plan_id: &str) -> Result<&'a Plan> {
    app.store
        .state()
        .plans
        .iter()
        .find(|plan| plan.id == plan_id)
        .ok_or_else(|| AppError::not_found(format!("Plan '{plan_id}'")))
}

fn plan_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Plan name cannot be empty"));
    }
    Ok(name.to_owned())
}

/// List all plans, marking the active one
pub fn list(app: &App) {
    let state = app.store.state();
    print_plan_list(&state.plans, state.active_plan_id.as_deref());
}

/// Create a plan and make it active
pub fn create(app: &mut App, name: &str) -> Result<()> {
    let name = plan_name(name)?;
    let plan_id = app.store.create_plan(name.clone());
    println!("Created plan '{name}' ({plan_id}) and made it active");
    Ok(())
}

/// Delete a plan, refusing to remove the last one
pub fn delete(app: &mut App, plan_id: &str) -> Result<()> {
    let name = find_plan(app, plan_id)?.name.clone();
    if app.store.state().plans.len() <= 1 {
        return Err(AppError::invalid_input("Cannot delete the only plan"));
    }
    app.store.delete_plan(plan_id);
    println!("Deleted plan '{name}'");
    if let Some(active) = app.store.active_plan() {
        println!("Active plan: {} ({})", active.name, active.id);
    }
    Ok(())
}

/// Make a plan active
pub fn activate(app: &mut App, plan_id: &str) -> Result<()> {
    let name = find_plan(app, plan_id)?.name.clone();
    app.store.set_active_plan(plan_id);
    println!("Active plan: {name}");
    Ok(())
}

/// Rename a plan
pub fn rename(app: &mut App, plan_id: &str, name: &str) -> Result<()> {
    find_plan(app, plan_id)?;
    let name = plan_name(name)?;
    app.store.rename_plan(plan_id, name.clone());
    println!("Renamed plan {plan_id} to '{name}'");
    Ok(())
}

/// Print a plan's exercises, the active plan when no id is given
pub fn show(app: &App, plan_id: Option<&str>) -> Result<()> {
    let plan = match plan_id {
        Some(plan_id) => find_plan(app, plan_id)?,
        None => app
            .store
            .active_plan()
            .ok_or_else(|| AppError::not_found("Active plan"))?,
    };
    print_plan(plan);
    Ok(())
}
