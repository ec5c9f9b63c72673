//! Shared world state for team task authorization BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chargehand::error::ServiceError;
use chargehand::identity::{
    adapters::memory::InMemoryUserRepository,
    domain::{User, UserId},
    ports::UserRepository,
};
use chargehand::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskId, projection::TaskView,
    services::TaskWorkflowService,
};
use chargehand::team::{
    adapters::memory::InMemoryTeamRepository, domain::TeamId, services::TeamMembershipService,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;

/// Workflow service type used by the BDD world.
pub type TestWorkflowService = TaskWorkflowService<
    InMemoryTaskRepository,
    InMemoryTeamRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// Membership service type used by the BDD world.
pub type TestMembershipService = TeamMembershipService<
    InMemoryTeamRepository,
    InMemoryTaskRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// Scenario world for team task authorization behaviour tests.
pub struct TrackerWorld {
    /// The user store shared by both services.
    pub users: Arc<InMemoryUserRepository>,
    /// The task store shared by both services.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// The workflow service under test.
    pub workflow: TestWorkflowService,
    /// The membership service used to stage teams.
    pub membership: TestMembershipService,
    /// Registered users by first name.
    pub people: HashMap<String, UserId>,
    /// The team staged by the background.
    pub team_id: Option<TeamId>,
    /// The task the scenario revolves around.
    pub task_id: Option<TaskId>,
    /// Result of the last workflow attempt.
    pub last_attempt: Option<Result<TaskView, ServiceError>>,
}

impl TrackerWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let teams = Arc::new(InMemoryTeamRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(DefaultClock);
        let workflow = TaskWorkflowService::new(
            Arc::clone(&tasks),
            Arc::clone(&teams),
            Arc::clone(&users),
            Arc::clone(&clock),
        );
        let membership =
            TeamMembershipService::new(teams, Arc::clone(&tasks), Arc::clone(&users), clock);
        Self {
            users,
            tasks,
            workflow,
            membership,
            people: HashMap::new(),
            team_id: None,
            task_id: None,
            last_attempt: None,
        }
    }
}

impl Default for TrackerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackerWorld {
    TrackerWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Registers a user under the given first name, reusing an existing
/// registration when the name has been seen before.
pub fn register_person(world: &mut TrackerWorld, name: &str) -> Result<UserId, eyre::Report> {
    if let Some(id) = world.people.get(name) {
        return Ok(*id);
    }
    let email = format!("{}@example.com", name.to_lowercase());
    let user = User::new(UserId::new(), name, "Example", email);
    run_async(world.users.save(&user)).wrap_err("register user")?;
    world.people.insert(name.to_owned(), user.id());
    Ok(user.id())
}

/// Looks up a previously registered user by first name.
pub fn person_id(world: &TrackerWorld, name: &str) -> Result<UserId, eyre::Report> {
    world
        .people
        .get(name)
        .copied()
        .ok_or_else(|| eyre::eyre!("no registered user named {name}"))
}

/// Returns the team staged by the background.
pub fn current_team(world: &TrackerWorld) -> Result<TeamId, eyre::Report> {
    world
        .team_id
        .ok_or_else(|| eyre::eyre!("no team staged in scenario world"))
}

/// Returns the task the scenario revolves around.
pub fn current_task(world: &TrackerWorld) -> Result<TaskId, eyre::Report> {
    world
        .task_id
        .ok_or_else(|| eyre::eyre!("no task staged in scenario world"))
}
