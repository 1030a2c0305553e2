//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{ActivityFilter, LinkRepository, ValidityFilter};
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Time-based
/// predicates take `now` as a bind parameter rather than calling `now()`
/// in SQL, keeping results reproducible under an injected clock.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Folds a tri-state filter into a nullable boolean bind parameter:
/// `NULL` disables the predicate.
fn validity_param(filter: ValidityFilter) -> Option<bool> {
    match filter {
        ValidityFilter::OnlyValid => Some(true),
        ValidityFilter::OnlyExpired => Some(false),
        ValidityFilter::Any => None,
    }
}

fn activity_param(filter: ActivityFilter) -> Option<bool> {
    match filter {
        ActivityFilter::OnlyActive => Some(true),
        ActivityFilter::OnlyInactive => Some(false),
        ActivityFilter::Any => None,
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, orig_url, user_id, created_at, expire_at, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, orig_url, user_id, created_at, expire_at, is_active
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.orig_url)
        .bind(new_link.user_id)
        .bind(new_link.created_at)
        .bind(new_link.expire_at)
        .bind(new_link.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, orig_url, user_id, created_at, expire_at, is_active
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_usable_by_owner_and_url(
        &self,
        user_id: i64,
        orig_url: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        // Several unusable duplicates may exist; the usable one is unique
        // in practice, and the newest wins if an overlap ever slips in.
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, orig_url, user_id, created_at, expire_at, is_active
            FROM links
            WHERE user_id = $1 AND orig_url = $2 AND is_active AND expire_at > $3
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(orig_url)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn deactivate(&self, id: i64) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET is_active = FALSE
            WHERE id = $1
            RETURNING id, code, orig_url, user_id, created_at, expire_at, is_active
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        link.ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    async fn list_by_owner(
        &self,
        user_id: i64,
        validity: ValidityFilter,
        activity: ActivityFilter,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Link>, i64), AppError> {
        let valid = validity_param(validity);
        let active = activity_param(activity);

        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, orig_url, user_id, created_at, expire_at, is_active
            FROM links
            WHERE user_id = $1
              AND ($2::boolean IS NULL OR (expire_at > $3) = $2)
              AND ($4::boolean IS NULL OR is_active = $4)
            ORDER BY created_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(user_id)
        .bind(valid)
        .bind(now)
        .bind(active)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM links
            WHERE user_id = $1
              AND ($2::boolean IS NULL OR (expire_at > $3) = $2)
              AND ($4::boolean IS NULL OR is_active = $4)
            "#,
        )
        .bind(user_id)
        .bind(valid)
        .bind(now)
        .bind(active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok((links, total))
    }
}
