//! Business logic services.

mod auth_service;
mod link_service;
mod stats_service;

pub use auth_service::AuthService;
pub use link_service::{DEFAULT_EXPIRE_SECONDS, LinkService};
pub use stats_service::{DEFAULT_STATS_TOP, StatsService};
