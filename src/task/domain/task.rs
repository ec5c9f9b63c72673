//! Task aggregate root and its workflow enums.

use super::TaskId;
use crate::error::InvalidInput;
use crate::identity::domain::UserId;
use crate::team::domain::TeamId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Workflow status of a task.
///
/// Every status may move to every other status, including back out of
/// [`TaskStatus::Done`] and [`TaskStatus::Cancelled`]; the workflow has no
/// terminal states. Who may move a task is a service concern, not a status
/// concern.
///
/// # Examples
///
/// ```
/// use chargehand::task::domain::TaskStatus;
///
/// let status = TaskStatus::try_from("in_progress").expect("valid status");
/// assert_eq!(status, TaskStatus::InProgress);
/// assert_eq!(status.as_str(), "IN_PROGRESS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created and awaits work. Initial status.
    Open,
    /// Task is being worked on.
    InProgress,
    /// Task is awaiting review.
    InReview,
    /// Task has been completed.
    Done,
    /// Task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::InReview => "IN_REVIEW",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "OPEN" => Ok(Self::Open),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "IN_REVIEW" => Ok(Self::InReview),
            "DONE" => Ok(Self::Done),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(InvalidInput::UnknownStatus(value.to_owned())),
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Ordinary work. Assumed when a request names no priority.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Blocks other work.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical priority name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(InvalidInput::UnknownPriority(value.to_owned())),
        }
    }
}

/// Task aggregate root.
///
/// # Invariants
///
/// - The title is non-empty after trimming, enforced at construction and
///   on every update.
/// - The owning team and the creator never change after construction.
/// - An assignee, when set through the workflow service, is a member of
///   the owning team at assignment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: TaskStatus,
    priority: TaskPriority,
    team_id: TeamId,
    assigned_to: Option<UserId>,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Task title; must be non-empty after trimming.
    pub title: String,
    /// Optional long-form description; blank values are stored as absent.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Workflow priority.
    pub priority: TaskPriority,
    /// Owning team.
    pub team_id: TeamId,
    /// Creating user.
    pub created_by: UserId,
}

/// Partial update of task fields; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    /// Replacement title; must be non-empty after trimming.
    pub title: Option<String>,
    /// Replacement description; a blank value clears it.
    pub description: Option<String>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement workflow status.
    pub status: Option<TaskStatus>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Owning team.
    pub team_id: TeamId,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Creating user.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in [`TaskStatus::Open`] status, unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyTaskTitle`] if the title is empty
    /// after trimming.
    pub fn create(data: NewTask, clock: &impl Clock) -> Result<Self, InvalidInput> {
        let title = normalized_title(&data.title)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title,
            description: data.description.as_deref().and_then(normalized_text),
            due_date: data.due_date,
            status: TaskStatus::Open,
            priority: data.priority,
            team_id: data.team_id,
            assigned_to: None,
            created_by: data.created_by,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted data without re-validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            priority: data.priority,
            team_id: data.team_id,
            assigned_to: data.assigned_to,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if present.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the owning team.
    #[must_use]
    pub const fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the creating user.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modified timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the user created this task.
    #[must_use]
    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    /// Returns whether the task is currently assigned to the user.
    #[must_use]
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assigned_to == Some(user_id)
    }

    /// Assigns the task to a user.
    ///
    /// Membership of the assignee in the owning team is the workflow
    /// service's check; the aggregate records whatever it is given.
    pub fn assign_to(&mut self, user_id: UserId, clock: &impl Clock) {
        self.assigned_to = Some(user_id);
        self.touch(clock);
    }

    /// Sets the workflow status.
    ///
    /// Any status may be set from any other, including the same one again.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Applies a partial update, leaving absent fields unchanged.
    ///
    /// The update is validated before anything is applied, so a rejected
    /// update leaves the task exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyTaskTitle`] if a replacement title is
    /// empty after trimming.
    pub fn apply_update(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), InvalidInput> {
        let replacement_title = update
            .title
            .as_deref()
            .map(normalized_title)
            .transpose()?;
        if let Some(title) = replacement_title {
            self.title = title;
        }
        if let Some(description) = update.description.as_deref() {
            self.description = normalized_text(description);
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn normalized_title(raw: &str) -> Result<String, InvalidInput> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(InvalidInput::EmptyTaskTitle);
    }
    Ok(normalized.to_owned())
}

fn normalized_text(value: &str) -> Option<String> {
    let normalized = value.trim();
    (!normalized.is_empty()).then_some(normalized.to_owned())
}
