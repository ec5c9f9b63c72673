//! Store adapters for the team context.

pub mod memory;
