//! Ports exposed by the team context.

mod repository;

pub use repository::TeamRepository;
