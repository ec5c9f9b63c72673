//! Store adapters for the identity context.

pub mod memory;
