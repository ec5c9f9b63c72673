//! Read-side views of user records.

use crate::identity::domain::{User, UserId};
use serde::Serialize;

/// Flattened user reference embedded in task and team views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name: first and last name joined, trimmed.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl UserSummary {
    /// Projects a user record into its embedded summary form.
    #[must_use]
    pub fn project(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.display_name(),
            email: user.email().to_owned(),
        }
    }
}
