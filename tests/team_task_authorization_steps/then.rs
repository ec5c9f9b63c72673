//! Then steps for team task authorization BDD scenarios.

use super::world::{TrackerWorld, current_task, run_async};
use chargehand::error::ServiceError;
use chargehand::task::ports::TaskRepository;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then("the request is denied for lack of permission")]
fn request_denied(world: &TrackerWorld) -> Result<(), eyre::Report> {
    let attempt = world
        .last_attempt
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no attempt recorded in scenario world"))?;
    if !matches!(attempt, Err(ServiceError::Forbidden(_))) {
        return Err(eyre::eyre!("expected a permission denial, got {attempt:?}"));
    }
    Ok(())
}

#[then("the board has no tasks")]
fn board_has_no_tasks(world: &TrackerWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tasks.find_all()).wrap_err("list tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the task is created with status "{status}" and priority "{priority}""#)]
fn task_created_with_defaults(
    world: &TrackerWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let attempt = world
        .last_attempt
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no attempt recorded in scenario world"))?;
    let view = attempt
        .as_ref()
        .map_err(|err| eyre::eyre!("expected a created task, got {err}"))?;
    if view.status.as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {}",
            view.status.as_str()
        ));
    }
    if view.priority.as_str() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, got {}",
            view.priority.as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TrackerWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = current_task(world)?;
    let view = run_async(world.workflow.task_by_id(task_id)).wrap_err("fetch task")?;
    if view.status.as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {}",
            view.status.as_str()
        ));
    }
    Ok(())
}

#[then("the task no longer resolves")]
fn task_no_longer_resolves(world: &TrackerWorld) -> Result<(), eyre::Report> {
    let task_id = current_task(world)?;
    let lookup = run_async(world.workflow.task_by_id(task_id));
    if !matches!(lookup, Err(ServiceError::NotFound { .. })) {
        return Err(eyre::eyre!("expected the task to be gone, got {lookup:?}"));
    }
    Ok(())
}
