//! In-memory implementation of the [`TeamRepository`] port.

use crate::error::{StoreError, StoreResult};
use crate::team::domain::{Team, TeamId};
use crate::team::ports::TeamRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct TeamStoreState {
    teams: HashMap<TeamId, Team>,
    name_index: HashMap<String, TeamId>,
}

/// Thread-safe in-memory team store.
///
/// Keeps a name index alongside the primary map so name lookups stay exact
/// and case-sensitive without scanning.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    state: Arc<RwLock<TeamStoreState>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let stale_name = state
            .teams
            .get(&team.id())
            .map(|existing| existing.name().as_str().to_owned())
            .filter(|previous| previous.as_str() != team.name().as_str());
        if let Some(stale) = stale_name {
            state.name_index.remove(&stale);
        }
        state
            .name_index
            .insert(team.name().as_str().to_owned(), team.id());
        state.teams.insert(team.id(), team.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TeamId) -> StoreResult<Option<Team>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.teams.get(&id).cloned())
    }

    async fn exists(&self, id: TeamId) -> StoreResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.teams.contains_key(&id))
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Team>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .name_index
            .get(name)
            .and_then(|id| state.teams.get(id))
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> StoreResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.name_index.contains_key(name))
    }
}

fn lock_poisoned<T>(err: PoisonError<T>) -> StoreError {
    StoreError::new(std::io::Error::other(err.to_string()))
}
