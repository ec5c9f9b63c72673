//! Team creation, membership management, and the team task listing.

use crate::error::{EntityKind, ServiceError, ServiceResult, StateConflict};
use crate::identity::domain::{User, UserId};
use crate::identity::ports::UserRepository;
use crate::task::domain::Task;
use crate::task::ports::TaskRepository;
use crate::task::projection::{TaskRelations, TaskView};
use crate::team::domain::{Team, TeamId, TeamName};
use crate::team::ports::TeamRepository;
use crate::team::projection::TeamView;
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamRequest {
    name: String,
    description: Option<String>,
}

impl CreateTeamRequest {
    /// Creates a request with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the team description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Team lifecycle and membership service.
///
/// Owns the only mutation paths for teams: creation and member set
/// changes. Task listing per team lives here as well because it is scoped
/// by the team aggregate.
#[derive(Clone)]
pub struct TeamMembershipService<T, R, U, C>
where
    T: TeamRepository,
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    teams: Arc<T>,
    tasks: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, R, U, C> TeamMembershipService<T, R, U, C>
where
    T: TeamRepository,
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service over the given ports.
    #[must_use]
    pub const fn new(teams: Arc<T>, tasks: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            teams,
            tasks,
            users,
            clock,
        }
    }

    /// Creates a team with the creator as its sole member.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::InvalidArgument`] for a blank or
    /// over-long name, [`ServiceError::NotFound`] if the creator does not
    /// resolve, and [`ServiceError::Conflict`] if the name is already
    /// taken. Name uniqueness is case-sensitive.
    pub async fn create_team(
        &self,
        creator_id: UserId,
        request: CreateTeamRequest,
    ) -> ServiceResult<TeamView> {
        tracing::info!("creating team {:?} for user {creator_id}", request.name);
        let name = TeamName::new(request.name)?;
        let creator = self.require_user(creator_id).await?;
        if self.teams.exists_by_name(name.as_str()).await? {
            tracing::warn!("team name already taken: {name}");
            return Err(StateConflict::DuplicateTeamName(name.as_str().to_owned()).into());
        }
        let team = Team::create(name, request.description, creator_id, &*self.clock);
        self.teams.save(&team).await?;
        tracing::info!("created team {}", team.id());
        Ok(TeamView::project(&team, Some(&creator)))
    }

    /// Adds a user to a team's member set.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the team or user does not
    /// resolve, and [`ServiceError::Conflict`] if the user is already a
    /// member.
    pub async fn add_member(&self, team_id: TeamId, user_id: UserId) -> ServiceResult<TeamView> {
        tracing::info!("adding user {user_id} to team {team_id}");
        let mut team = self.require_team(team_id).await?;
        if !self.users.exists(user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, user_id));
        }
        team.add_member(user_id, &*self.clock)?;
        self.teams.save(&team).await?;
        tracing::info!("user {user_id} joined team {team_id}");
        self.project_team(&team).await
    }

    /// Removes a user from a team's member set.
    ///
    /// Task assignments held by the removed user are left in place; they
    /// stay visible on the tasks until someone reassigns them.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the team or user does not
    /// resolve, and [`ServiceError::Conflict`] when removing the creator
    /// or a user who is not a member.
    pub async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> ServiceResult<TeamView> {
        tracing::info!("removing user {user_id} from team {team_id}");
        let mut team = self.require_team(team_id).await?;
        if !self.users.exists(user_id).await? {
            return Err(ServiceError::not_found(EntityKind::User, user_id));
        }
        team.remove_member(user_id, &*self.clock)?;
        self.teams.save(&team).await?;
        tracing::info!("user {user_id} left team {team_id}");
        self.project_team(&team).await
    }

    /// Lists the tasks owned by a team.
    ///
    /// # Errors
    ///
    /// Fails with [`ServiceError::NotFound`] if the team does not resolve.
    pub async fn team_tasks(&self, team_id: TeamId) -> ServiceResult<Vec<TaskView>> {
        tracing::debug!("listing tasks for team {team_id}");
        let team = self.require_team(team_id).await?;
        let tasks = self.tasks.find_by_team(team_id).await?;
        let mut views = Vec::with_capacity(tasks.len());
        for task in &tasks {
            views.push(self.project_task(task, &team).await?);
        }
        Ok(views)
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

    async fn project_team(&self, team: &Team) -> ServiceResult<TeamView> {
        let creator = self.users.find_by_id(team.created_by()).await?;
        Ok(TeamView::project(team, creator.as_ref()))
    }

    async fn project_task(&self, task: &Task, team: &Team) -> ServiceResult<TaskView> {
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
                team: Some(team),
                assignee: assignee.as_ref(),
                creator: creator.as_ref(),
                comment_count,
                attachment_count,
            },
        ))
    }
}
