//! Click statistics service: recording and window aggregation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, Link};
use crate::domain::repositories::{LinkStatsRow, StatsRepository, StatsSort};
use crate::error::AppError;

/// Default number of rows returned by owner-wide statistics.
pub const DEFAULT_STATS_TOP: i64 = 100;

/// Aggregates the click log into per-link window counts.
///
/// The three windows (last hour, last day, all time) are computed relative
/// to the injected clock, never the database clock, so tests can pin time.
pub struct StatsService<S: StatsRepository> {
    repository: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: StatsRepository> StatsService<S> {
    pub fn new(repository: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Appends a click event for a link, stamped with the current time.
    pub async fn record_click(&self, link_id: i64) -> Result<Click, AppError> {
        self.repository
            .record_click(link_id, self.clock.now())
            .await
    }

    /// Owner-wide statistics: one row per owned link, sorted descending
    /// by the requested window count, truncated to `top` after sorting.
    pub async fn stats_for_owner(
        &self,
        user_id: i64,
        top: i64,
        sort: StatsSort,
    ) -> Result<Vec<LinkStatsRow>, AppError> {
        self.repository
            .stats_for_owner(user_id, self.clock.now(), top, sort)
            .await
    }

    /// Statistics for a single, already ownership-checked link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link row vanished between the
    /// ownership check and the aggregation (concurrent delete).
    pub async fn stats_for_link(&self, link: &Link) -> Result<LinkStatsRow, AppError> {
        self.repository
            .stats_for_link(link.id, self.clock.now())
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Link not found",
                    json!({ "code": link.code, "reason": "missing" }),
                )
            })
    }
}
