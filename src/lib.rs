//! Chargehand: team task tracking core.
//!
//! This crate provides the domain, authorization, and state-transition
//! logic for a team task tracker: users form teams, teams own tasks, and
//! members move tasks through a permissive status workflow while every
//! mutation is gated by membership and role checks.
//!
//! # Architecture
//!
//! Chargehand follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//! - **Projections**: Pure read-side views assembled by the services
//!
//! # Modules
//!
//! - [`identity`]: User records and lookups
//! - [`team`]: Team aggregate, membership rules, and team services
//! - [`task`]: Task aggregate, workflow rules, and task services
//! - [`error`]: Shared failure taxonomy for service operations

pub mod error;
pub mod identity;
pub mod task;
pub mod team;
