//! PostgreSQL persistence implementations of the domain repositories.

mod pg_link_repository;
mod pg_stats_repository;
mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_stats_repository::PgStatsRepository;
pub use pg_user_repository::PgUserRepository;
