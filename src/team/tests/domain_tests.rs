//! Domain tests for team name validation and membership invariants.

use crate::error::{InvalidInput, StateConflict};
use crate::identity::domain::UserId;
use crate::team::domain::{Team, TeamName};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

// ── TeamName ────────────────────────────────────────────────────────

#[rstest]
#[case("Platform", "Platform")]
#[case("  Platform  ", "Platform")]
#[case("Data & Insights", "Data & Insights")]
fn team_name_trims_surrounding_whitespace(#[case] raw: &str, #[case] expected: &str) {
    let name = TeamName::new(raw).expect("valid team name");
    assert_eq!(name.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn team_name_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TeamName::new(raw).err(), Some(InvalidInput::EmptyTeamName));
}

#[rstest]
fn team_name_accepts_maximum_length() {
    let raw = "x".repeat(TeamName::MAX_LENGTH);
    let name = TeamName::new(raw.clone()).expect("name at the limit is valid");
    assert_eq!(name.as_str(), raw);
}

#[rstest]
fn team_name_rejects_over_long_input() {
    let raw = "x".repeat(TeamName::MAX_LENGTH + 1);
    assert_eq!(
        TeamName::new(raw).err(),
        Some(InvalidInput::TeamNameTooLong {
            length: TeamName::MAX_LENGTH + 1,
            max: TeamName::MAX_LENGTH,
        })
    );
}

#[rstest]
fn team_name_length_counts_characters_not_bytes() {
    // Multi-byte characters: 100 of them is within the limit even though
    // the byte length is far above it.
    let raw = "é".repeat(TeamName::MAX_LENGTH);
    assert!(TeamName::new(raw).is_ok());
    let too_long = "é".repeat(TeamName::MAX_LENGTH + 1);
    assert_eq!(
        TeamName::new(too_long).err(),
        Some(InvalidInput::TeamNameTooLong {
            length: TeamName::MAX_LENGTH + 1,
            max: TeamName::MAX_LENGTH,
        })
    );
}

// ── Team ────────────────────────────────────────────────────────────

fn team_named(name: &str, creator: UserId, clock: &impl Clock) -> Team {
    let team_name = TeamName::new(name).expect("valid team name");
    Team::create(team_name, None, creator, clock)
}

#[rstest]
fn create_makes_the_creator_the_sole_member(clock: DefaultClock) {
    let creator = UserId::new();
    let team = team_named("Platform", creator, &clock);

    assert!(team.is_member(creator));
    assert!(team.is_creator(creator));
    assert_eq!(team.member_count(), 1);
    assert_eq!(team.created_at(), team.updated_at());
}

#[rstest]
fn create_stores_blank_description_as_absent(clock: DefaultClock) {
    let name = TeamName::new("Platform").expect("valid team name");
    let team = Team::create(name, Some("   ".to_owned()), UserId::new(), &clock);
    assert!(team.description().is_none());
}

#[rstest]
fn add_member_grows_the_member_set(clock: DefaultClock) {
    let creator = UserId::new();
    let newcomer = UserId::new();
    let mut team = team_named("Platform", creator, &clock);

    team.add_member(newcomer, &clock).expect("addition succeeds");

    assert!(team.is_member(newcomer));
    assert!(!team.is_creator(newcomer));
    assert_eq!(team.member_count(), 2);
    assert!(team.updated_at() >= team.created_at());
}

#[rstest]
fn add_member_rejects_an_existing_member(clock: DefaultClock) {
    let creator = UserId::new();
    let mut team = team_named("Platform", creator, &clock);

    assert_eq!(
        team.add_member(creator, &clock).err(),
        Some(StateConflict::AlreadyMember {
            user_id: creator,
            team_id: team.id(),
        })
    );
    assert_eq!(team.member_count(), 1);
}

#[rstest]
fn remove_member_shrinks_the_member_set(clock: DefaultClock) {
    let creator = UserId::new();
    let member = UserId::new();
    let mut team = team_named("Platform", creator, &clock);
    team.add_member(member, &clock).expect("addition succeeds");

    team.remove_member(member, &clock).expect("removal succeeds");

    assert!(!team.is_member(member));
    assert_eq!(team.member_count(), 1);
}

#[rstest]
fn remove_member_refuses_to_remove_the_creator(clock: DefaultClock) {
    let creator = UserId::new();
    let mut team = team_named("Platform", creator, &clock);

    assert_eq!(
        team.remove_member(creator, &clock).err(),
        Some(StateConflict::CreatorMembershipRequired { team_id: team.id() })
    );
    assert!(team.is_member(creator));
}

#[rstest]
fn remove_member_rejects_a_non_member(clock: DefaultClock) {
    let creator = UserId::new();
    let stranger = UserId::new();
    let mut team = team_named("Platform", creator, &clock);

    assert_eq!(
        team.remove_member(stranger, &clock).err(),
        Some(StateConflict::NotATeamMember {
            user_id: stranger,
            team_id: team.id(),
        })
    );
}
