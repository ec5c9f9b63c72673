//! Team context: the team aggregate, membership rules, and team services.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;

#[cfg(test)]
mod tests;
