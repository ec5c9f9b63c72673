//! Read-side views projected from team aggregates.

use crate::identity::domain::User;
use crate::identity::projection::UserSummary;
use crate::team::domain::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Client-facing view of a team.
///
/// Membership is exposed only as a count; member identities never leave
/// the domain layer through this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    /// Team identifier.
    pub id: TeamId,
    /// Team name.
    pub name: String,
    /// Description, omitted when the team has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creator summary, omitted when the creator did not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserSummary>,
    /// Number of members, including the creator.
    pub member_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TeamView {
    /// Projects a team and its resolved creator into a view.
    ///
    /// An unresolved creator leaves the summary absent rather than failing
    /// the projection.
    #[must_use]
    pub fn project(team: &Team, creator: Option<&User>) -> Self {
        Self {
            id: team.id(),
            name: team.name().as_str().to_owned(),
            description: team.description().map(str::to_owned),
            created_by: creator.map(UserSummary::project),
            member_count: team.member_count(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}
