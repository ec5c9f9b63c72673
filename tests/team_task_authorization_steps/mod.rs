//! Step definitions for team task authorization BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
