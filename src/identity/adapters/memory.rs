//! In-memory implementation of the [`UserRepository`] port.

use crate::error::{StoreError, StoreResult};
use crate::identity::domain::{User, UserId};
use crate::identity::ports::UserRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe in-memory user store.
///
/// Clones share the same underlying map, so a clone can be handed to each
/// service that needs the port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.write().map_err(lock_poisoned)?;
        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(lock_poisoned)?;
        Ok(users.get(&id).cloned())
    }

    async fn exists(&self, id: UserId) -> StoreResult<bool> {
        let users = self.users.read().map_err(lock_poisoned)?;
        Ok(users.contains_key(&id))
    }
}

fn lock_poisoned<T>(err: PoisonError<T>) -> StoreError {
    StoreError::new(std::io::Error::other(err.to_string()))
}
