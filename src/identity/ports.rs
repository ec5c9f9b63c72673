//! Store port for user records.

use crate::error::StoreResult;
use crate::identity::domain::{User, UserId};
use async_trait::async_trait;

/// Read and write surface the tracker core requires from the user store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts or updates a user record.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StoreError`] if the store rejects the
    /// write.
    async fn save(&self, user: &User) -> StoreResult<()>;

    /// Finds a user by identifier, returning `None` when absent.
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Returns whether a user with the identifier exists.
    async fn exists(&self, id: UserId) -> StoreResult<bool>;
}
