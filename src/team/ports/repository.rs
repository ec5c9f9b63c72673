//! Store port for the team aggregate.

use crate::error::StoreResult;
use crate::team::domain::{Team, TeamId};
use async_trait::async_trait;

/// Store surface for teams.
///
/// Name lookups compare the exact persisted name; uniqueness is
/// case-sensitive.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Inserts or updates a team.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] if the store rejects the
    /// write.
    async fn save(&self, team: &Team) -> StoreResult<()>;

    /// Finds a team by identifier, returning `None` when absent.
    async fn find_by_id(&self, id: TeamId) -> StoreResult<Option<Team>>;

    /// Returns whether a team with the identifier exists.
    async fn exists(&self, id: TeamId) -> StoreResult<bool>;

    /// Finds a team by exact name, returning `None` when absent.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Team>>;

    /// Returns whether a team with the exact name exists.
    async fn exists_by_name(&self, name: &str) -> StoreResult<bool>;
}
