//! Shared failure taxonomy for domain service operations.
//!
//! Every service operation reports failures through [`ServiceError`], whose
//! variants map one-to-one onto the caller-correctable failure classes:
//! unresolved references, malformed input, state-incompatible requests, and
//! missing permissions. Store failures are wrapped opaquely in
//! [`StoreError`] and are never retried by the core.

use crate::identity::domain::UserId;
use crate::task::domain::TaskId;
use crate::team::domain::TeamId;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for domain service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type for store port operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Entity kinds addressable through the store ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A registered user.
    User,
    /// A team.
    Team,
    /// A task.
    Task,
    /// A comment on a task.
    Comment,
}

impl EntityKind {
    /// Returns the lowercase kind name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Team => "team",
            Self::Task => "task",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Malformed or unparseable input values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The team name is empty after trimming.
    #[error("team name must not be empty")]
    EmptyTeamName,

    /// The team name exceeds the maximum length.
    #[error("team name must not exceed {max} characters, got {length}")]
    TeamNameTooLong {
        /// Character count of the rejected name.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The comment content is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyCommentContent,

    /// The value does not name a task status.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// The value does not name a task priority.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),
}

/// Requests that are incompatible with current persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateConflict {
    /// A team with the same name already exists (names are case-sensitive
    /// and globally unique).
    #[error("team name already exists: {0}")]
    DuplicateTeamName(String),

    /// The user is already a member of the team.
    #[error("user {user_id} is already a member of team {team_id}")]
    AlreadyMember {
        /// The user that was being added.
        user_id: UserId,
        /// The team whose member set already contains the user.
        team_id: TeamId,
    },

    /// The user is not a member of the team.
    #[error("user {user_id} is not a member of team {team_id}")]
    NotATeamMember {
        /// The user that failed the membership check.
        user_id: UserId,
        /// The team whose member set was consulted.
        team_id: TeamId,
    },

    /// The team creator cannot leave the member set.
    #[error("the creator of team {team_id} cannot be removed from it")]
    CreatorMembershipRequired {
        /// The team whose creator was being removed.
        team_id: TeamId,
    },
}

/// Mutations rejected because the acting identity lacks permission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionDenied {
    /// Task creation requires membership of the owning team.
    #[error("user {user_id} is not authorized to create tasks in team {team_id}")]
    CreateTask {
        /// The acting user.
        user_id: UserId,
        /// The team the task was aimed at.
        team_id: TeamId,
    },

    /// Tasks can only be assigned to members of the owning team.
    #[error("cannot assign task to user {user_id}: not a member of team {team_id}")]
    AssignOutsideTeam {
        /// The intended assignee.
        user_id: UserId,
        /// The team that owns the task.
        team_id: TeamId,
    },

    /// Task assignment requires the task creator or the team creator.
    #[error("user {user_id} is not authorized to assign task {task_id}")]
    AssignTask {
        /// The acting user.
        user_id: UserId,
        /// The task being assigned.
        task_id: TaskId,
    },

    /// Task updates require the assignee, the task creator, or the team
    /// creator.
    #[error("user {user_id} is not authorized to update task {task_id}")]
    UpdateTask {
        /// The acting user.
        user_id: UserId,
        /// The task being updated.
        task_id: TaskId,
    },

    /// Status changes require the assignee, the task creator, or the team
    /// creator.
    #[error("user {user_id} is not authorized to change the status of task {task_id}")]
    UpdateStatus {
        /// The acting user.
        user_id: UserId,
        /// The task whose status was being changed.
        task_id: TaskId,
    },

    /// Task deletion requires the task creator or the team creator.
    #[error("user {user_id} is not authorized to delete task {task_id}")]
    DeleteTask {
        /// The acting user.
        user_id: UserId,
        /// The task being deleted.
        task_id: TaskId,
    },

    /// Commenting requires membership of the task's team.
    #[error("user {user_id} is not authorized to comment on task {task_id}")]
    Comment {
        /// The commenting user.
        user_id: UserId,
        /// The task being commented on.
        task_id: TaskId,
    },
}

/// Opaque wrapper for unexpected store adapter failures.
///
/// Carries no taxonomy of its own: the core treats any store failure as
/// terminal and surfaces it unchanged to the caller.
#[derive(Debug, Clone, Error)]
#[error("store failure: {0}")]
pub struct StoreError(Arc<dyn std::error::Error + Send + Sync>);

impl StoreError {
    /// Wraps an adapter-level error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Terminal failure classes reported by domain services.
///
/// The first four variants are caller-correctable and map directly onto the
/// taxonomy the boundary layer exposes; [`ServiceError::Store`] is the
/// opaque internal class for unexpected persistence failures.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// A referenced entity id did not resolve.
    #[error("{kind} not found with id: {id}")]
    NotFound {
        /// Kind of the missing entity.
        kind: EntityKind,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// An input value was malformed or unparseable.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidInput),

    /// The request is incompatible with current persisted state.
    #[error(transparent)]
    Conflict(#[from] StateConflict),

    /// The acting identity lacks permission for the requested mutation.
    #[error(transparent)]
    Forbidden(#[from] PermissionDenied),

    /// An unexpected store failure, reported opaquely and never retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Creates a [`ServiceError::NotFound`] for the given entity reference.
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
