//! In-memory implementation of the [`TaskRepository`] port.

use crate::error::{StoreError, StoreResult};
use crate::identity::domain::UserId;
use crate::task::domain::{Attachment, AttachmentId, Comment, CommentId, Task, TaskId, TaskStatus};
use crate::task::ports::TaskRepository;
use crate::team::domain::TeamId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct TaskStoreState {
    tasks: HashMap<TaskId, Task>,
    comments: HashMap<CommentId, Comment>,
    comment_index: HashMap<TaskId, Vec<CommentId>>,
    attachments: HashMap<AttachmentId, Attachment>,
    attachment_index: HashMap<TaskId, Vec<AttachmentId>>,
}

/// Thread-safe in-memory store for tasks, comments, and attachments.
///
/// All records live behind one lock, so a task delete and the removal of
/// its comments and attachments happen as a single atomic step. The
/// per-task indexes keep their insertion order, which is what gives
/// comment listings their oldest-first ordering.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<TaskStoreState>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn comments_for_task(state: &TaskStoreState, task_id: TaskId) -> Vec<Comment> {
    state
        .comment_index
        .get(&task_id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.comments.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
}

fn attachments_for_task(state: &TaskStoreState, task_id: TaskId) -> Vec<Attachment> {
    state
        .attachment_index
        .get(&task_id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.attachments.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
}

fn matching_tasks(state: &TaskStoreState, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
    state
        .tasks
        .values()
        .filter(|task| predicate(task))
        .cloned()
        .collect()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn exists(&self, id: TaskId) -> StoreResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.tasks.remove(&id);
        if let Some(comment_ids) = state.comment_index.remove(&id) {
            for comment_id in comment_ids {
                state.comments.remove(&comment_id);
            }
        }
        if let Some(attachment_ids) = state.attachment_index.remove(&id) {
            for attachment_id in attachment_ids {
                state.attachments.remove(&attachment_id);
            }
        }
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_team(&self, team_id: TeamId) -> StoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(matching_tasks(&state, |task| task.team_id() == team_id))
    }

    async fn find_by_assignee(&self, user_id: UserId) -> StoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(matching_tasks(&state, |task| task.is_assigned_to(user_id)))
    }

    async fn find_by_status(&self, status: TaskStatus) -> StoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(matching_tasks(&state, |task| task.status() == status))
    }

    async fn search(&self, text: &str) -> StoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let needle = text.to_lowercase();
        Ok(matching_tasks(&state, |task| {
            task.title().to_lowercase().contains(&needle)
                || task
                    .description()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        }))
    }

    async fn save_comment(&self, comment: &Comment) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state
            .comments
            .insert(comment.id(), comment.clone())
            .is_none()
        {
            state
                .comment_index
                .entry(comment.task_id())
                .or_default()
                .push(comment.id());
        }
        Ok(())
    }

    async fn find_comments_by_task(&self, task_id: TaskId) -> StoreResult<Vec<Comment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(comments_for_task(&state, task_id))
    }

    async fn count_comments(&self, task_id: TaskId) -> StoreResult<usize> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.comment_index.get(&task_id).map_or(0, Vec::len))
    }

    async fn save_attachment(&self, attachment: &Attachment) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state
            .attachments
            .insert(attachment.id(), attachment.clone())
            .is_none()
        {
            state
                .attachment_index
                .entry(attachment.task_id())
                .or_default()
                .push(attachment.id());
        }
        Ok(())
    }

    async fn find_attachments_by_task(&self, task_id: TaskId) -> StoreResult<Vec<Attachment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(attachments_for_task(&state, task_id))
    }

    async fn count_attachments(&self, task_id: TaskId) -> StoreResult<usize> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.attachment_index.get(&task_id).map_or(0, Vec::len))
    }
}

fn lock_poisoned<T>(err: PoisonError<T>) -> StoreError {
    StoreError::new(std::io::Error::other(err.to_string()))
}
