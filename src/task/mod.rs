//! Task context: the task aggregate, workflow rules, and task services.
//!
//! Tasks are owned by teams and move through a permissive status workflow.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Read-side views in [`projection`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;

#[cfg(test)]
mod tests;
