//! Domain model for teams and their membership.

mod ids;
mod team;

pub use ids::TeamId;
pub use team::{PersistedTeamData, Team, TeamName};
