//! User identity context.
//!
//! The tracker core treats users as externally provisioned: they are
//! resolved by id for membership and permission checks and are never
//! mutated here. Only the read surface and an in-memory adapter live in
//! this crate.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod projection;
