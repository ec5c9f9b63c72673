//! Store adapters for the task context.

pub mod memory;
