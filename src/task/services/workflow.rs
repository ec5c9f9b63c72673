//! Task workflow orchestration: creation, listing, updates, assignment,
//! status changes, deletion, and commenting.

use crate::error::{
    EntityKind, InvalidInput, PermissionDenied, ServiceError, ServiceResult, StateConflict,
};
use crate::identity::domain::{User, UserId};
use crate::identity::ports::UserRepository;
use crate::task::domain::{Comment, NewTask, Task, TaskId, TaskPriority, TaskStatus, TaskUpdate};
use crate::task::ports::TaskRepository;
use crate::task::projection::{CommentView, TaskRelations, TaskView};
use crate::team::domain::{Team, TeamId};
use crate::team::ports::TeamRepository;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a task within a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<String>,
    team_id: TeamId,
    assigned_to: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title and owning team.
    #[must_use]
    pub fn new(title: impl Into<String>, team_id: TeamId) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
            team_id,
            assigned_to: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority by name, parsed case-insensitively.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }
}

/// Partial update payload for a task; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description; a blank value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets a replacement status by name, parsed case-insensitively.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Task workflow orchestration service.
///
/// The sole mutation path for tasks: every operation resolves the entities
/// it references, enforces membership and permission rules against the
/// owning team, and persists through the store ports.
#[derive(Clone)]
pub struct TaskWorkflowService<R, T, U, C>
where
    R: TaskRepository,
    T: TeamRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    teams: Arc<T>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, T, U, C> TaskWorkflowService<R, T, U, C>
where
    R: TaskRepository,
    T: TeamRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service over the given ports.
    #[must_use]
    pub const fn new(tasks: Arc<R>, teams: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            teams,
            users,
            clock,
        }
    }

    /// Creates a task in the requested team.
    ///
    /// The acting user must be a member of the team. An initial assignee,
    /// when given, must also be a member. The task starts in
    /// [`TaskStatus::Open`] with [`TaskPriority::Medium`] unless the
    /// request names another priority.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the acting user, team, or
    /// assignee does not resolve, [`ServiceError::Forbidden`] if the
    /// acting user or the assignee is not a member of the team, and
    /// [`ServiceError::InvalidArgument`] for a blank title or an unknown
    /// priority name.
    pub async fn create_task(
        &self,
        acting_user_id: UserId,
        request: CreateTaskRequest,
    ) -> ServiceResult<TaskView> {
        tracing::info!(
            "creating task in team {} for user {acting_user_id}",
            request.team_id
        );
        let acting_user = self.require_user(acting_user_id).await?;
        let team = self.require_team(request.team_id).await?;
        if !team.is_member(acting_user_id) {
            tracing::warn!(
                "user {acting_user_id} cannot create tasks in team {}: not a member",
                team.id()
            );
            return Err(PermissionDenied::CreateTask {
                user_id: acting_user_id,
                team_id: team.id(),
            }
            .into());
        }
        let priority = parse_priority(request.priority.as_deref())?;
        let assignee = match request.assigned_to {
            Some(target_id) => {
                let target = self.require_user(target_id).await?;
                if !team.is_member(target_id) {
                    tracing::warn!(
                        "cannot assign new task to user {target_id}: not a member of team {}",
                        team.id()
                    );
                    return Err(PermissionDenied::AssignOutsideTeam {
                        user_id: target_id,
                        team_id: team.id(),
                    }
                    .into());
                }
                Some(target)
            }
            None => None,
        };
        let mut task = Task::create(
            NewTask {
                title: request.title,
                description: request.description,
                due_date: request.due_date,
                priority,
                team_id: team.id(),
                created_by: acting_user_id,
            },
            &*self.clock,
        )?;
        if let Some(target) = &assignee {
            task.assign_to(target.id(), &*self.clock);
        }
        self.tasks.save(&task).await?;
        tracing::info!("created task {}", task.id());
        Ok(TaskView::project(
            &task,
            TaskRelations {
                team: Some(&team),
                assignee: assignee.as_ref(),
                creator: Some(&acting_user),
                comment_count: 0,
                attachment_count: 0,
            },
        ))
    }

    /// Lists tasks, optionally narrowed by a search term or a status.
    ///
    /// A non-blank search term wins over a status filter; a blank value
    /// for either is treated as absent.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::InvalidArgument`] if an applied status
    /// filter does not name a status.
    pub async fn list_tasks(
        &self,
        status: Option<&str>,
        search: Option<&str>,
    ) -> ServiceResult<Vec<TaskView>> {
        tracing::debug!("listing tasks (status: {status:?}, search: {search:?})");
        let search_term = search.map(str::trim).filter(|term| !term.is_empty());
        let status_name = status.map(str::trim).filter(|name| !name.is_empty());
        let tasks = match (search_term, status_name) {
            (Some(term), _) => self.tasks.search(term).await?,
            (None, Some(name)) => {
                let parsed = TaskStatus::try_from(name)?;
                self.tasks.find_by_status(parsed).await?
            }
            (None, None) => self.tasks.find_all().await?,
        };
        self.project_tasks(&tasks).await
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the task does not resolve.
    pub async fn task_by_id(&self, task_id: TaskId) -> ServiceResult<TaskView> {
        tracing::debug!("fetching task {task_id}");
        let task = self.require_task(task_id).await?;
        self.project_task(&task).await
    }

    /// Applies a partial update to a task.
    ///
    /// The acting user must be the assignee, the task creator, or the
    /// creator of the owning team.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the task, the acting user,
    /// or the owning team does not resolve, [`ServiceError::Forbidden`]
    /// if the acting user holds none of the required roles, and
    /// [`ServiceError::InvalidArgument`] for a blank replacement title or
    /// an unknown status name.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        acting_user_id: UserId,
        request: UpdateTaskRequest,
    ) -> ServiceResult<TaskView> {
        tracing::info!("updating task {task_id} for user {acting_user_id}");
        let mut task = self.require_task(task_id).await?;
        if !self.users.exists(acting_user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, acting_user_id));
        }
        let team = self.require_team(task.team_id()).await?;
        if !can_progress(&task, &team, acting_user_id) {
            tracing::warn!("user {acting_user_id} may not update task {task_id}");
            return Err(PermissionDenied::UpdateTask {
                user_id: acting_user_id,
                task_id,
            }
            .into());
        }
        let status = request
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;
        task.apply_update(
            TaskUpdate {
                title: request.title,
                description: request.description,
                due_date: request.due_date,
                status,
            },
            &*self.clock,
        )?;
        self.tasks.save(&task).await?;
        tracing::info!("updated task {task_id}");
        self.project_task(&task).await
    }

    /// Assigns a task to a team member.
    ///
    /// Only the task creator or the team creator may assign; the target
    /// must be a member of the owning team. A non-member target is a
    /// conflict, not a permission failure: the actor was allowed to
    /// assign, the chosen target is what made the request unservable.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the task, acting user,
    /// owning team, or target does not resolve,
    /// [`ServiceError::Forbidden`] if the acting user may not assign, and
    /// [`ServiceError::Conflict`] if the target is not a team member.
    pub async fn assign_task(
        &self,
        task_id: TaskId,
        target_user_id: UserId,
        acting_user_id: UserId,
    ) -> ServiceResult<TaskView> {
        tracing::info!("assigning task {task_id} to user {target_user_id}");
        let mut task = self.require_task(task_id).await?;
        if !self.users.exists(acting_user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, acting_user_id));
        }
        let team = self.require_team(task.team_id()).await?;
        if !can_administer(&task, &team, acting_user_id) {
            tracing::warn!("user {acting_user_id} may not assign task {task_id}");
            return Err(PermissionDenied::AssignTask {
                user_id: acting_user_id,
                task_id,
            }
            .into());
        }
        if !self.users.exists(target_user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, target_user_id));
        }
        if !team.is_member(target_user_id) {
            tracing::warn!(
                "cannot assign task {task_id} to user {target_user_id}: not a member of team {}",
                team.id()
            );
            return Err(StateConflict::NotATeamMember {
                user_id: target_user_id,
                team_id: team.id(),
            }
            .into());
        }
        task.assign_to(target_user_id, &*self.clock);
        self.tasks.save(&task).await?;
        tracing::info!("assigned task {task_id} to user {target_user_id}");
        self.project_task(&task).await
    }

    /// Sets a task's workflow status.
    ///
    /// The acting user must be the assignee, the task creator, or the
    /// creator of the owning team. Any status may be set from any other;
    /// re-applying the current status is a no-op that still counts as an
    /// update.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the task, the acting
    /// user, or the owning team does not resolve,
    /// [`ServiceError::Forbidden`] if the acting user holds none of the
    /// required roles, and [`ServiceError::InvalidArgument`] for an
    /// unknown status name.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        status: &str,
        acting_user_id: UserId,
    ) -> ServiceResult<TaskView> {
        tracing::info!("updating status of task {task_id} to {status:?}");
        let mut task = self.require_task(task_id).await?;
        if !self.users.exists(acting_user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, acting_user_id));
        }
        let team = self.require_team(task.team_id()).await?;
        if !can_progress(&task, &team, acting_user_id) {
            tracing::warn!("user {acting_user_id} may not change the status of task {task_id}");
            return Err(PermissionDenied::UpdateStatus {
                user_id: acting_user_id,
                task_id,
            }
            .into());
        }
        let parsed = TaskStatus::try_from(status)?;
        task.set_status(parsed, &*self.clock);
        self.tasks.save(&task).await?;
        tracing::info!("task {task_id} moved to {}", parsed.as_str());
        self.project_task(&task).await
    }

    /// Deletes a task together with its comments and attachments.
    ///
    /// Only the task creator or the team creator may delete.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the task, the acting
    /// user, or the owning team does not resolve, and
    /// [`ServiceError::Forbidden`] if the acting user may not delete.
    pub async fn delete_task(&self, task_id: TaskId, acting_user_id: UserId) -> ServiceResult<()> {
        tracing::info!("deleting task {task_id} for user {acting_user_id}");
        let task = self.require_task(task_id).await?;
        if !self.users.exists(acting_user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, acting_user_id));
        }
        let team = self.require_team(task.team_id()).await?;
        if !can_administer(&task, &team, acting_user_id) {
            tracing::warn!("user {acting_user_id} may not delete task {task_id}");
            return Err(PermissionDenied::DeleteTask {
                user_id: acting_user_id,
                task_id,
            }
            .into());
        }
        self.tasks.delete(task_id).await?;
        tracing::info!("deleted task {task_id}");
        Ok(())
    }

    /// Adds a comment to a task.
    ///
    /// The author must be a member of the task's team.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::InvalidArgument`] for blank content,
    /// [`ServiceError::NotFound`] if the task, the author, or the owning
    /// team does not resolve, and [`ServiceError::Forbidden`] if the
    /// author is not a team member.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        author_id: UserId,
        content: &str,
    ) -> ServiceResult<CommentView> {
        tracing::info!("adding comment to task {task_id} by user {author_id}");
        let comment = Comment::create(task_id, author_id, content, &*self.clock)?;
        let task = self.require_task(task_id).await?;
        let author = self.require_user(author_id).await?;
        let team = self.require_team(task.team_id()).await?;
        if !team.is_member(author_id) {
            tracing::warn!("user {author_id} may not comment on task {task_id}: not a member");
            return Err(PermissionDenied::Comment {
                user_id: author_id,
                task_id,
            }
            .into());
        }
        self.tasks.save_comment(&comment).await?;
        tracing::debug!("added comment {} to task {task_id}", comment.id());
        Ok(CommentView::project(&comment, Some(&author)))
    }

    /// Lists a task's comments, oldest first.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the task does not resolve.
    pub async fn task_comments(&self, task_id: TaskId) -> ServiceResult<Vec<CommentView>> {
        tracing::debug!("listing comments for task {task_id}");
        if !self.tasks.exists(task_id).await? {
            return Err(ServiceError::not_found(EntityKind::Task, task_id));
        }
        let comments = self.tasks.find_comments_by_task(task_id).await?;
        let mut views = Vec::with_capacity(comments.len());
        for comment in &comments {
            let author = self.users.find_by_id(comment.author_id()).await?;
            views.push(CommentView::project(comment, author.as_ref()));
        }
        Ok(views)
    }

    /// Lists the tasks currently assigned to a user.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the user does not resolve.
    pub async fn tasks_for_assignee(&self, user_id: UserId) -> ServiceResult<Vec<TaskView>> {
        tracing::debug!("listing tasks assigned to user {user_id}");
        if !self.users.exists(user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, user_id));
        }
        let tasks = self.tasks.find_by_assignee(user_id).await?;
        self.project_tasks(&tasks).await
    }

    async fn require_user(&self, id: UserId) -> ServiceResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::User, id))
    }

    async fn require_team(&self, id: TeamId) -> ServiceResult<Team> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Team, id))
    }

    async fn require_task(&self, id: TaskId) -> ServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Task, id))
    }

    async fn project_task(&self, task: &Task) -> ServiceResult<TaskView> {
        let team = self.teams.find_by_id(task.team_id()).await?;
        let creator = self.users.find_by_id(task.created_by()).await?;
        let assignee = match task.assigned_to() {
            Some(user_id) => self.users.find_by_id(user_id).await?,
            None => None,
        };
        let comment_count = self.tasks.count_comments(task.id()).await?;
        let attachment_count = self.tasks.count_attachments(task.id()).await?;
        Ok(TaskView::project(
            task,
            TaskRelations {
                team: team.as_ref(),
                assignee: assignee.as_ref(),
                creator: creator.as_ref(),
                comment_count,
                attachment_count,
            },
        ))
    }

    async fn project_tasks(&self, tasks: &[Task]) -> ServiceResult<Vec<TaskView>> {
        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            views.push(self.project_task(task).await?);
        }
        Ok(views)
    }
}

/// Administrative rights over a task: its creator or its team's creator.
fn can_administer(task: &Task, team: &Team, user_id: UserId) -> bool {
    task.is_created_by(user_id) || team.is_creator(user_id)
}

/// Progress rights over a task: its assignee on top of the administrative
/// roles.
fn can_progress(task: &Task, team: &Team, user_id: UserId) -> bool {
    task.is_assigned_to(user_id) || can_administer(task, team, user_id)
}

fn parse_priority(value: Option<&str>) -> Result<TaskPriority, InvalidInput> {
    value.map_or(Ok(TaskPriority::default()), TaskPriority::try_from)
}
