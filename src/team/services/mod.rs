//! Application services for the team context.

mod membership;

pub use membership::{CreateTeamRequest, TeamMembershipService};
