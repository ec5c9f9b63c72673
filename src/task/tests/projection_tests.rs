//! Projection tests: view assembly and null-safe handling of unresolved
//! relations.

use crate::identity::domain::{User, UserId};
use crate::identity::projection::UserSummary;
use crate::task::domain::{Comment, NewTask, Task, TaskId, TaskPriority, TaskStatus};
use crate::task::projection::{CommentView, TaskRelations, TaskView};
use crate::team::domain::{Team, TeamId, TeamName};
use crate::team::projection::TeamView;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn sample_task(clock: &DefaultClock) -> Task {
    Task::create(
        NewTask {
            title: "Wire up billing".to_owned(),
            description: Some("start with invoices".to_owned()),
            due_date: None,
            priority: TaskPriority::High,
            team_id: TeamId::new(),
            created_by: UserId::new(),
        },
        clock,
    )
    .expect("valid task")
}

#[rstest]
fn task_view_embeds_resolved_relations(clock: DefaultClock) {
    let creator = User::new(UserId::new(), "Ada", "Lovelace", "ada@example.com");
    let assignee = User::new(UserId::new(), "Grace", "Hopper", "grace@example.com");
    let team = Team::create(
        TeamName::new("Billing").expect("valid name"),
        None,
        creator.id(),
        &clock,
    );
    let task = sample_task(&clock);

    let view = TaskView::project(
        &task,
        TaskRelations {
            team: Some(&team),
            assignee: Some(&assignee),
            creator: Some(&creator),
            comment_count: 3,
            attachment_count: 1,
        },
    );

    assert_eq!(view.id, task.id());
    assert_eq!(view.title, "Wire up billing");
    assert_eq!(view.status, TaskStatus::Open);
    assert_eq!(view.priority, TaskPriority::High);
    assert_eq!(view.team_name.as_deref(), Some("Billing"));
    assert_eq!(view.assigned_to, Some(UserSummary::project(&assignee)));
    assert_eq!(view.created_by, Some(UserSummary::project(&creator)));
    assert_eq!(view.comment_count, 3);
    assert_eq!(view.attachment_count, 1);
}

#[rstest]
fn task_view_tolerates_unresolved_relations(clock: DefaultClock) {
    let task = sample_task(&clock);

    let view = TaskView::project(&task, TaskRelations::default());

    assert!(view.team_name.is_none());
    assert!(view.assigned_to.is_none());
    assert!(view.created_by.is_none());
    assert_eq!(view.comment_count, 0);
    assert_eq!(view.attachment_count, 0);
}

#[rstest]
fn task_view_serializes_enum_names_and_omits_absent_fields(clock: DefaultClock) {
    let task = sample_task(&clock);
    let view = TaskView::project(&task, TaskRelations::default());

    let json = serde_json::to_value(&view).expect("serializable view");

    assert_eq!(json["status"], "OPEN");
    assert_eq!(json["priority"], "HIGH");
    let object = json.as_object().expect("view serializes to an object");
    assert!(!object.contains_key("team_name"));
    assert!(!object.contains_key("assigned_to"));
    assert!(!object.contains_key("created_by"));
    assert!(!object.contains_key("due_date"));
}

#[rstest]
fn user_summary_joins_and_trims_names() {
    let full = User::new(UserId::new(), "Ada", "Lovelace", "ada@example.com");
    let first_only = User::new(UserId::new(), "Ada", "", "ada@example.com");

    assert_eq!(UserSummary::project(&full).name, "Ada Lovelace");
    assert_eq!(UserSummary::project(&first_only).name, "Ada");
}

#[rstest]
fn comment_view_tolerates_unresolved_author(clock: DefaultClock) {
    let comment =
        Comment::create(TaskId::new(), UserId::new(), "ship it", &clock).expect("valid comment");

    let view = CommentView::project(&comment, None);

    assert_eq!(view.content, "ship it");
    assert!(view.author.is_none());

    let json = serde_json::to_value(&view).expect("serializable view");
    let object = json.as_object().expect("view serializes to an object");
    assert!(!object.contains_key("author"));
}

#[rstest]
fn team_view_exposes_member_count_not_members(clock: DefaultClock) {
    let creator = User::new(UserId::new(), "Ada", "Lovelace", "ada@example.com");
    let mut team = Team::create(
        TeamName::new("Billing").expect("valid name"),
        Some("invoices and ledgers".to_owned()),
        creator.id(),
        &clock,
    );
    team.add_member(UserId::new(), &clock).expect("new member");

    let view = TeamView::project(&team, Some(&creator));

    assert_eq!(view.member_count, 2);
    assert_eq!(view.description.as_deref(), Some("invoices and ledgers"));

    let json = serde_json::to_value(&view).expect("serializable view");
    let object = json.as_object().expect("view serializes to an object");
    assert!(object.contains_key("member_count"));
    assert!(!object.contains_key("members"));
}
