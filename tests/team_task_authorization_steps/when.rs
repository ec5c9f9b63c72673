//! When steps for team task authorization BDD scenarios.

use super::world::{TrackerWorld, current_task, current_team, person_id, run_async};
use chargehand::task::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#""{person}" tries to open the task "{title}""#)]
fn person_tries_to_open_task(
    world: &mut TrackerWorld,
    person: String,
    title: String,
) -> Result<(), eyre::Report> {
    let acting_id = person_id(world, &person)?;
    let team_id = current_team(world)?;
    world.last_attempt = Some(run_async(
        world
            .workflow
            .create_task(acting_id, CreateTaskRequest::new(title, team_id)),
    ));
    Ok(())
}

#[when(r#""{person}" opens the task "{title}""#)]
fn person_opens_task(
    world: &mut TrackerWorld,
    person: String,
    title: String,
) -> Result<(), eyre::Report> {
    let acting_id = person_id(world, &person)?;
    let team_id = current_team(world)?;
    let view = run_async(
        world
            .workflow
            .create_task(acting_id, CreateTaskRequest::new(title, team_id)),
    )
    .wrap_err("open task")?;
    world.task_id = Some(view.id);
    world.last_attempt = Some(Ok(view));
    Ok(())
}

#[when(r#""{person}" tries to move the task to "{status}""#)]
fn person_tries_to_move_task(
    world: &mut TrackerWorld,
    person: String,
    status: String,
) -> Result<(), eyre::Report> {
    let acting_id = person_id(world, &person)?;
    let task_id = current_task(world)?;
    world.last_attempt = Some(run_async(
        world.workflow.update_status(task_id, &status, acting_id),
    ));
    Ok(())
}

#[when(r#""{person}" moves the task to "{status}""#)]
fn person_moves_task(
    world: &mut TrackerWorld,
    person: String,
    status: String,
) -> Result<(), eyre::Report> {
    let acting_id = person_id(world, &person)?;
    let task_id = current_task(world)?;
    let view = run_async(world.workflow.update_status(task_id, &status, acting_id))
        .wrap_err("move task")?;
    world.last_attempt = Some(Ok(view));
    Ok(())
}

#[when(r#""{person}" deletes the task"#)]
fn person_deletes_task(world: &mut TrackerWorld, person: String) -> Result<(), eyre::Report> {
    let acting_id = person_id(world, &person)?;
    let task_id = current_task(world)?;
    run_async(world.workflow.delete_task(task_id, acting_id)).wrap_err("delete task")?;
    Ok(())
}
