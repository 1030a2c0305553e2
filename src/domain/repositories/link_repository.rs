//! Repository trait for short link data access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;

/// Validity filter for link listings: validity means `expire_at > now`.
///
/// An explicit tri-state enum rather than a nullable boolean, so the filter
/// contract stays visible at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityFilter {
    OnlyValid,
    OnlyExpired,
    Any,
}

impl From<Option<bool>> for ValidityFilter {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::OnlyValid,
            Some(false) => Self::OnlyExpired,
            None => Self::Any,
        }
    }
}

/// Activity filter for link listings, keyed on the `is_active` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityFilter {
    OnlyActive,
    OnlyInactive,
    Any,
}

impl From<Option<bool>> for ActivityFilter {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::OnlyActive,
            Some(false) => Self::OnlyInactive,
            None => Self::Any,
        }
    }
}

/// Repository interface for link persistence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (a concurrent generator produced the same code).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, regardless of state.
    ///
    /// Callers decide validity; this lookup never filters.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the usable link for an (owner, original URL) pair, if any.
    ///
    /// Usable means `is_active AND expire_at > now`. Used for
    /// dedup-on-create; inactive or expired duplicates are ignored.
    async fn find_usable_by_owner_and_url(
        &self,
        user_id: i64,
        orig_url: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError>;

    /// Sets `is_active = false` and returns the updated link.
    ///
    /// Deactivation is one-way; there is no reactivation path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the given id.
    async fn deactivate(&self, id: i64) -> Result<Link, AppError>;

    /// Lists an owner's links with tri-state filters and pagination.
    ///
    /// Results are ordered by creation time descending. The returned total
    /// counts the filtered set before `limit`/`offset` are applied.
    async fn list_by_owner(
        &self,
        user_id: i64,
        validity: ValidityFilter,
        activity: ActivityFilter,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Link>, i64), AppError>;
}
