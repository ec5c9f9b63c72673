//! Tests for the team context.

mod domain_tests;
