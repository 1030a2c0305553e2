//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AuthService, LinkService, StatsService};
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository, PgUserRepository};

/// Application state shared across all request handlers.
///
/// Services are held behind `Arc` so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub stats_service: Arc<StatsService<PgStatsRepository>>,
    /// Public base URL prepended to short codes in API responses.
    pub base_url: String,
    pub db: PgPool,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub fn new(pool: PgPool, base_url: String) -> Self {
        Self::with_clock(pool, base_url, Arc::new(SystemClock))
    }

    /// Like [`AppState::new`] but with an explicit clock, for tests that
    /// need to pin time.
    pub fn with_clock(pool: PgPool, base_url: String, clock: Arc<dyn Clock>) -> Self {
        let pool_arc = Arc::new(pool.clone());

        let auth_service = Arc::new(AuthService::new(Arc::new(PgUserRepository::new(
            pool_arc.clone(),
        ))));
        let link_service = Arc::new(LinkService::new(
            Arc::new(PgLinkRepository::new(pool_arc.clone())),
            clock.clone(),
        ));
        let stats_service = Arc::new(StatsService::new(
            Arc::new(PgStatsRepository::new(pool_arc)),
            clock,
        ));

        Self {
            auth_service,
            link_service,
            stats_service,
            base_url,
            db: pool,
        }
    }
}
