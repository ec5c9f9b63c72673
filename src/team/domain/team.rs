//! Team aggregate root and its validated name.

use super::TeamId;
use crate::error::{InvalidInput, StateConflict};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Validated team name.
///
/// Names are trimmed, non-empty, at most [`TeamName::MAX_LENGTH`]
/// characters, and compared case-sensitively for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Maximum permitted name length in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Validates and normalizes a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyTeamName`] if the name is empty after
    /// trimming, or [`InvalidInput::TeamNameTooLong`] if it exceeds
    /// [`TeamName::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidInput> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(InvalidInput::EmptyTeamName);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(InvalidInput::TeamNameTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team aggregate root owning the member set.
///
/// # Invariants
///
/// - The member set always contains the creator.
/// - Membership gates task creation, assignment, and commenting within the
///   team; the workflow service consults [`Team::is_member`] before any of
///   those mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: TeamName,
    description: Option<String>,
    created_by: UserId,
    members: HashSet<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates a team whose member set contains exactly the creator.
    ///
    /// A blank description is stored as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargehand::identity::domain::UserId;
    /// use chargehand::team::domain::{Team, TeamName};
    /// use mockable::DefaultClock;
    ///
    /// let creator = UserId::new();
    /// let name = TeamName::new("Platform").expect("valid team name");
    /// let team = Team::create(name, None, creator, &DefaultClock);
    /// assert!(team.is_member(creator));
    /// assert_eq!(team.member_count(), 1);
    /// ```
    #[must_use]
    pub fn create(
        name: TeamName,
        description: Option<String>,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let mut members = HashSet::new();
        members.insert(created_by);
        Self {
            id: TeamId::new(),
            name,
            description: description.as_deref().and_then(normalized_text),
            created_by,
            members,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a team from persisted data without re-validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTeamData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_by: data.created_by,
            members: data.members,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team name.
    #[must_use]
    pub const fn name(&self) -> &TeamName {
        &self.name
    }

    /// Returns the description, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creating user.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modified timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the user belongs to the member set.
    #[must_use]
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.members.contains(&user_id)
    }

    /// Returns whether the user created this team.
    #[must_use]
    pub fn is_creator(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    /// Adds a user to the member set.
    ///
    /// # Errors
    ///
    /// Returns [`StateConflict::AlreadyMember`] if the user already belongs
    /// to the team.
    pub fn add_member(
        &mut self,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Result<(), StateConflict> {
        if !self.members.insert(user_id) {
            return Err(StateConflict::AlreadyMember {
                user_id,
                team_id: self.id,
            });
        }
        self.touch(clock);
        Ok(())
    }

    /// Removes a user from the member set.
    ///
    /// Task assignments held by the removed user are left untouched; they
    /// read as assigned to a former member until reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`StateConflict::CreatorMembershipRequired`] when removing
    /// the creator, or [`StateConflict::NotATeamMember`] if the user does
    /// not belong to the team.
    pub fn remove_member(
        &mut self,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Result<(), StateConflict> {
        if user_id == self.created_by {
            return Err(StateConflict::CreatorMembershipRequired { team_id: self.id });
        }
        if !self.members.remove(&user_id) {
            return Err(StateConflict::NotATeamMember {
                user_id,
                team_id: self.id,
            });
        }
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Raw team state loaded from a store adapter.
#[derive(Debug, Clone)]
pub struct PersistedTeamData {
    /// Team identifier.
    pub id: TeamId,
    /// Validated team name.
    pub name: TeamName,
    /// Optional description.
    pub description: Option<String>,
    /// Creating user.
    pub created_by: UserId,
    /// Member set, including the creator.
    pub members: HashSet<UserId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

fn normalized_text(value: &str) -> Option<String> {
    let normalized = value.trim();
    (!normalized.is_empty()).then_some(normalized.to_owned())
}
