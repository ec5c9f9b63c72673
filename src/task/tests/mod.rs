//! Unit tests for the task context.
//!
//! Tests are organised by concern: domain invariants, service
//! orchestration with its permission rules, and read-side projection.

mod projection_tests;
