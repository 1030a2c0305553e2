//! Link lifecycle service: creation, deduplication, deactivation, resolution.

use std::sync::Arc;

use chrono::Duration;
use serde_json::json;

use crate::domain::clock::Clock;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{ActivityFilter, LinkRepository, ValidityFilter};
use crate::error::AppError;
use crate::utils::short_code;

/// Default link TTL when the client does not request one (24 hours).
pub const DEFAULT_EXPIRE_SECONDS: i64 = 86_400;

/// Orchestrates the link lifecycle over a [`LinkRepository`].
///
/// State machine per link: non-existent, active-valid, active-expired,
/// inactive. Creation dedups against the single usable link per
/// (owner, URL) pair; expiration happens by clock advancement alone;
/// deactivation is one-way and owner-gated.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Creates a short link, or returns the existing usable one unchanged.
    ///
    /// # Deduplication
    ///
    /// If the owner already has a usable (active, unexpired) link for the
    /// same URL, that link is returned as-is — the create is idempotent.
    /// Inactive or expired duplicates do not block a fresh create.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse, if
    /// `expire_seconds` is below 1 or beyond the representable timestamp
    /// range, or if 10 consecutive generated codes all
    /// collided. Returns [`AppError::Conflict`] if the insert loses a
    /// short-code race at commit time; the caller may resubmit.
    pub async fn create_or_reuse(
        &self,
        user_id: i64,
        orig_url: String,
        expire_seconds: i64,
    ) -> Result<Link, AppError> {
        url::Url::parse(&orig_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if expire_seconds < 1 {
            return Err(AppError::bad_request(
                "expire_seconds must be at least 1",
                json!({ "expire_seconds": expire_seconds }),
            ));
        }

        let now = self.clock.now();

        // try_seconds + checked_add_signed reject TTLs past the chrono range.
        let expire_at = Duration::try_seconds(expire_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::bad_request(
                    "expire_seconds is too large",
                    json!({ "expire_seconds": expire_seconds }),
                )
            })?;

        if let Some(existing) = self
            .repository
            .find_usable_by_owner_and_url(user_id, &orig_url, now)
            .await?
        {
            return Ok(existing);
        }

        let code = self.generate_unique_code().await?;

        let new_link = NewLink {
            code,
            orig_url,
            user_id,
            created_at: now,
            expire_at,
            is_active: true,
        };

        self.repository.create(new_link).await
    }

    /// Deactivates a link owned by `user_id`.
    ///
    /// Expired links can still be deactivated; only ownership is checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the code and
    /// [`AppError::Forbidden`] if the requester is not the owner (the link
    /// is left unchanged).
    pub async fn deactivate(&self, user_id: i64, code: &str) -> Result<Link, AppError> {
        let link = self.find_existing(code).await?;

        if link.user_id != user_id {
            return Err(AppError::forbidden(
                "You do not have permission to deactivate this link",
                json!({ "code": code }),
            ));
        }

        self.repository.deactivate(link.id).await
    }

    /// Resolves a code for redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] in three observably distinct flavors —
    /// `missing`, `inactive`, `expired` (see the `reason` detail) — all
    /// reported outward as the same status.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self.find_existing(code).await?;

        if !link.is_active {
            return Err(AppError::not_found(
                "Link is inactive",
                json!({ "code": code, "reason": "inactive" }),
            ));
        }

        if link.is_expired(self.clock.now()) {
            return Err(AppError::not_found(
                "Link has expired",
                json!({ "code": code, "reason": "expired" }),
            ));
        }

        Ok(link)
    }

    /// Looks up a link by code and checks it belongs to `user_id`.
    ///
    /// Used by per-link statistics; state (active/expired) is not checked.
    pub async fn get_owned(&self, user_id: i64, code: &str) -> Result<Link, AppError> {
        let link = self.find_existing(code).await?;

        if link.user_id != user_id {
            return Err(AppError::forbidden(
                "You do not have permission to view this link",
                json!({ "code": code }),
            ));
        }

        Ok(link)
    }

    /// Lists an owner's links with filters and pagination.
    ///
    /// Returns the page of links plus the total of the filtered set.
    pub async fn list(
        &self,
        user_id: i64,
        validity: ValidityFilter,
        activity: ActivityFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Link>, i64), AppError> {
        self.repository
            .list_by_owner(user_id, validity, activity, self.clock.now(), limit, offset)
            .await
    }

    async fn find_existing(&self, code: &str) -> Result<Link, AppError> {
        self.repository.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found(
                "Link not found",
                json!({ "code": code, "reason": "missing" }),
            )
        })
    }

    /// Generates a short code not currently present in the store.
    ///
    /// The 10-attempt bound is a safety net; the unique constraint on
    /// `links.code` remains the real uniqueness guarantee.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = short_code::generate(short_code::CODE_LENGTH);

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::bad_request(
            "Could not create link: failed to generate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
