//! Repository trait for click logging and window aggregation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::Click;
use crate::error::AppError;

/// Which window count drives the descending sort of owner-wide stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSort {
    Hour,
    Day,
    All,
}

/// Aggregated click counts for one link across the three fixed windows.
///
/// Window boundaries are half-open on the old end and inclusive of now:
/// a click lands in the hour window iff `clicked_at >= now - 1h`.
#[derive(Debug, Clone, FromRow)]
pub struct LinkStatsRow {
    pub orig_url: String,
    pub code: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub all_clicks: i64,
}

/// Repository interface for the click log and statistics queries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends a click event for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link no longer exists
    /// (foreign-key violation). Callers on the redirect path must treat
    /// this as non-fatal.
    async fn record_click(
        &self,
        link_id: i64,
        clicked_at: DateTime<Utc>,
    ) -> Result<Click, AppError>;

    /// Aggregates click counts for every link owned by `user_id`,
    /// regardless of active/valid state.
    ///
    /// Links with zero clicks appear with zero counts. Rows are sorted
    /// descending by the count selected with `sort` and truncated to `top`
    /// after sorting; ties are broken arbitrarily but stably.
    async fn stats_for_owner(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
        top: i64,
        sort: StatsSort,
    ) -> Result<Vec<LinkStatsRow>, AppError>;

    /// Aggregates click counts for a single link.
    ///
    /// Returns `None` if the link row is gone (the contract allows absence).
    async fn stats_for_link(
        &self,
        link_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<LinkStatsRow>, AppError>;
}
