//! Store port for the task aggregate and its owned records.

use crate::error::StoreResult;
use crate::identity::domain::UserId;
use crate::task::domain::{Attachment, Comment, Task, TaskId, TaskStatus};
use crate::team::domain::TeamId;
use async_trait::async_trait;

/// Store surface for tasks, their comments, and their attachments.
///
/// Comments and attachments are owned by tasks and are reachable only
/// through this port; deleting a task removes them in the same operation.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts or updates a task.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] if the store rejects the
    /// write.
    async fn save(&self, task: &Task) -> StoreResult<()>;

    /// Finds a task by identifier, returning `None` when absent.
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>>;

    /// Returns whether a task with the identifier exists.
    async fn exists(&self, id: TaskId) -> StoreResult<bool>;

    /// Deletes a task together with its comments and attachments.
    ///
    /// Deleting an unknown identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] if the store rejects the
    /// delete.
    async fn delete(&self, id: TaskId) -> StoreResult<()>;

    /// Returns all tasks.
    async fn find_all(&self) -> StoreResult<Vec<Task>>;

    /// Returns the tasks owned by a team.
    async fn find_by_team(&self, team_id: TeamId) -> StoreResult<Vec<Task>>;

    /// Returns the tasks currently assigned to a user.
    async fn find_by_assignee(&self, user_id: UserId) -> StoreResult<Vec<Task>>;

    /// Returns the tasks in a given status.
    async fn find_by_status(&self, status: TaskStatus) -> StoreResult<Vec<Task>>;

    /// Returns the tasks whose title or description contains the text,
    /// compared case-insensitively.
    async fn search(&self, text: &str) -> StoreResult<Vec<Task>>;

    /// Inserts a comment.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] if the store rejects the
    /// write.
    async fn save_comment(&self, comment: &Comment) -> StoreResult<()>;

    /// Returns a task's comments, oldest first.
    async fn find_comments_by_task(&self, task_id: TaskId) -> StoreResult<Vec<Comment>>;

    /// Returns the number of comments on a task.
    async fn count_comments(&self, task_id: TaskId) -> StoreResult<usize>;

    /// Inserts an attachment record.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] if the store rejects the
    /// write.
    async fn save_attachment(&self, attachment: &Attachment) -> StoreResult<()>;

    /// Returns a task's attachment records, oldest first.
    async fn find_attachments_by_task(&self, task_id: TaskId) -> StoreResult<Vec<Attachment>>;

    /// Returns the number of attachments on a task.
    async fn count_attachments(&self, task_id: TaskId) -> StoreResult<usize>;
}
