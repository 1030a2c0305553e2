//! Link entity representing a short alias for an original URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A short alias with TTL-based expiration and a one-way active flag.
///
/// A link is *valid* while `now < expire_at` and *usable for redirect* only
/// while additionally `is_active`. Expiration is purely a computed predicate;
/// no stored state changes when a link expires.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub orig_url: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Link {
    /// Returns true if the link has passed its expiration time as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire_at <= now
    }

    /// Returns true if the link may serve redirects as of `now`.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired(now)
    }
}

/// Input data for creating a new link.
///
/// Timestamps are computed by the caller from the injected clock so the
/// repository stays free of hidden time reads.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub orig_url: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub is_active: bool,
}
