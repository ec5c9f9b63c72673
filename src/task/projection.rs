//! Read-side views projected from task entities.
//!
//! Projections are pure: services resolve the related entities and derived
//! counts first, then hand everything to these constructors. A relation
//! that fails to resolve is projected as absent rather than failing the
//! whole view.

use crate::identity::domain::User;
use crate::identity::projection::UserSummary;
use crate::task::domain::{Comment, CommentId, Task, TaskId, TaskPriority, TaskStatus};
use crate::team::domain::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Entities related to a task, resolved by the calling service.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskRelations<'a> {
    /// Owning team, when it resolved.
    pub team: Option<&'a Team>,
    /// Assigned user, when set and resolved.
    pub assignee: Option<&'a User>,
    /// Creating user, when it resolved.
    pub creator: Option<&'a User>,
    /// Number of comments on the task.
    pub comment_count: usize,
    /// Number of attachments on the task.
    pub attachment_count: usize,
}

/// Client-facing view of a task with derived counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description, omitted when the task has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Owning team identifier.
    pub team_id: TeamId,
    /// Owning team name, omitted when the team did not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    /// Assignee summary, omitted when unassigned or unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserSummary>,
    /// Creator summary, omitted when the creator did not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserSummary>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of comments; zero when there are none.
    pub comment_count: usize,
    /// Number of attachments; zero when there are none.
    pub attachment_count: usize,
}

impl TaskView {
    /// Projects a task and its resolved relations into a view.
    #[must_use]
    pub fn project(task: &Task, relations: TaskRelations<'_>) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            status: task.status(),
            priority: task.priority(),
            team_id: task.team_id(),
            team_name: relations.team.map(|team| team.name().as_str().to_owned()),
            assigned_to: relations.assignee.map(UserSummary::project),
            created_by: relations.creator.map(UserSummary::project),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            comment_count: relations.comment_count,
            attachment_count: relations.attachment_count,
        }
    }
}

/// Client-facing view of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    /// Comment identifier.
    pub id: CommentId,
    /// Task the comment belongs to.
    pub task_id: TaskId,
    /// Comment content.
    pub content: String,
    /// Author summary, omitted when the author did not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummary>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    /// Projects a comment and its resolved author into a view.
    #[must_use]
    pub fn project(comment: &Comment, author: Option<&User>) -> Self {
        Self {
            id: comment.id(),
            task_id: comment.task_id(),
            content: comment.content().to_owned(),
            author: author.map(UserSummary::project),
            created_at: comment.created_at(),
        }
    }
}
