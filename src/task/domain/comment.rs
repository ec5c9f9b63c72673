//! Comments attached to tasks.

use super::{CommentId, TaskId};
use crate::error::InvalidInput;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A comment on a task. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment bound to a task and its author.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyCommentContent`] if the content is
    /// empty after trimming.
    pub fn create(
        task_id: TaskId,
        author_id: UserId,
        content: &str,
        clock: &impl Clock,
    ) -> Result<Self, InvalidInput> {
        let normalized = content.trim();
        if normalized.is_empty() {
            return Err(InvalidInput::EmptyCommentContent);
        }
        Ok(Self {
            id: CommentId::new(),
            task_id,
            author_id,
            content: normalized.to_owned(),
            created_at: clock.utc(),
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task this comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the commenting user.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the comment content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
