//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Click;
use crate::domain::repositories::{LinkStatsRow, StatsRepository, StatsSort};
use crate::error::AppError;

/// PostgreSQL repository for the click log and window aggregation.
///
/// Counts are computed in one pass per query with `COUNT(*) FILTER`;
/// window edges come from the caller-supplied `now`, not the database
/// clock. The old edge is inclusive: a click at exactly `now - 1h` still
/// counts toward the hour window.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(
        &self,
        link_id: i64,
        clicked_at: DateTime<Utc>,
    ) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO clicks (link_id, clicked_at)
            VALUES ($1, $2)
            RETURNING id, link_id, clicked_at
            "#,
        )
        .bind(link_id)
        .bind(clicked_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn stats_for_owner(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
        top: i64,
        sort: StatsSort,
    ) -> Result<Vec<LinkStatsRow>, AppError> {
        // ORDER BY cannot take a bind parameter, so the sort column is
        // chosen from a fixed set of query strings.
        let order = match sort {
            StatsSort::Hour => "last_hour_clicks",
            StatsSort::Day => "last_day_clicks",
            StatsSort::All => "all_clicks",
        };

        let query = format!(
            r#"
            SELECT
                l.orig_url,
                l.code,
                COUNT(*) FILTER (WHERE c.clicked_at >= $2) AS last_hour_clicks,
                COUNT(*) FILTER (WHERE c.clicked_at >= $3) AS last_day_clicks,
                COUNT(c.id) AS all_clicks
            FROM links l
            LEFT JOIN clicks c ON c.link_id = l.id
            WHERE l.user_id = $1
            GROUP BY l.id, l.orig_url, l.code
            ORDER BY {order} DESC, l.id
            LIMIT $4
            "#
        );

        let rows = sqlx::query_as::<_, LinkStatsRow>(&query)
            .bind(user_id)
            .bind(now - Duration::hours(1))
            .bind(now - Duration::hours(24))
            .bind(top)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn stats_for_link(
        &self,
        link_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<LinkStatsRow>, AppError> {
        let row = sqlx::query_as::<_, LinkStatsRow>(
            r#"
            SELECT
                l.orig_url,
                l.code,
                COUNT(*) FILTER (WHERE c.clicked_at >= $2) AS last_hour_clicks,
                COUNT(*) FILTER (WHERE c.clicked_at >= $3) AS last_day_clicks,
                COUNT(c.id) AS all_clicks
            FROM links l
            LEFT JOIN clicks c ON c.link_id = l.id
            WHERE l.id = $1
            GROUP BY l.id, l.orig_url, l.code
            "#,
        )
        .bind(link_id)
        .bind(now - Duration::hours(1))
        .bind(now - Duration::hours(24))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
