//! Given steps for team task authorization BDD scenarios.

use super::world::{TrackerWorld, current_team, person_id, register_person, run_async};
use chargehand::task::services::CreateTaskRequest;
use chargehand::team::services::CreateTeamRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a team "{name}" founded by "{founder}""#)]
fn a_team_founded_by(
    world: &mut TrackerWorld,
    name: String,
    founder: String,
) -> Result<(), eyre::Report> {
    let founder_id = register_person(world, &founder)?;
    let team = run_async(
        world
            .membership
            .create_team(founder_id, CreateTeamRequest::new(name)),
    )
    .wrap_err("create team for scenario")?;
    world.team_id = Some(team.id);
    Ok(())
}

#[given(r#""{person}" is a registered user"#)]
fn a_registered_user(world: &mut TrackerWorld, person: String) -> Result<(), eyre::Report> {
    register_person(world, &person)?;
    Ok(())
}

#[given(r#""{person}" has joined the team"#)]
fn person_has_joined(world: &mut TrackerWorld, person: String) -> Result<(), eyre::Report> {
    let member_id = register_person(world, &person)?;
    let team_id = current_team(world)?;
    run_async(world.membership.add_member(team_id, member_id))
        .wrap_err("add member for scenario")?;
    Ok(())
}

#[given(r#""{creator}" has opened the task {title:string}"#)]
fn person_has_opened_task(
    world: &mut TrackerWorld,
    creator: String,
    title: String,
) -> Result<(), eyre::Report> {
    let creator_id = person_id(world, &creator)?;
    let team_id = current_team(world)?;
    let view = run_async(
        world
            .workflow
            .create_task(creator_id, CreateTaskRequest::new(title, team_id)),
    )
    .wrap_err("create task for scenario")?;
    world.task_id = Some(view.id);
    Ok(())
}

#[given(r#""{creator}" has opened the task "{title}" assigned to "{assignee}""#)]
fn person_has_opened_assigned_task(
    world: &mut TrackerWorld,
    creator: String,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let creator_id = person_id(world, &creator)?;
    let assignee_id = person_id(world, &assignee)?;
    let team_id = current_team(world)?;
    let view = run_async(world.workflow.create_task(
        creator_id,
        CreateTaskRequest::new(title, team_id).with_assignee(assignee_id),
    ))
    .wrap_err("create assigned task for scenario")?;
    world.task_id = Some(view.id);
    Ok(())
}
