//! Repository traits abstracting persistent storage.
//!
//! Implementations live in [`crate::infrastructure::persistence`]; mocks are
//! generated with `mockall` under `cfg(test)` for service-level unit tests.

mod link_repository;
mod stats_repository;
mod user_repository;

pub use link_repository::{ActivityFilter, LinkRepository, ValidityFilter};
pub use stats_repository::{LinkStatsRow, StatsRepository, StatsSort};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
