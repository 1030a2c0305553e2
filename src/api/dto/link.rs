//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::DEFAULT_EXPIRE_SECONDS;
use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to alias (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub orig_url: String,

    /// Link lifetime in seconds (default: 86400, one day).
    pub expire_seconds: Option<i64>,
}

impl CreateLinkRequest {
    pub fn expire_seconds_or_default(&self) -> i64 {
        self.expire_seconds.unwrap_or(DEFAULT_EXPIRE_SECONDS)
    }
}

/// Full link representation returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub short_id: String,
    pub short_url: String,
    pub orig_url: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub is_active: bool,
}

impl LinkResponse {
    /// Builds a response from a link entity, prefixing the public base URL.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.code);

        Self {
            id: link.id,
            short_id: link.code,
            short_url,
            orig_url: link.orig_url,
            user_id: link.user_id,
            created_at: link.created_at,
            expire_at: link.expire_at,
            is_active: link.is_active,
        }
    }
}

/// Paginated link listing.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
    pub items: Vec<LinkResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_short_url_joins_base_without_double_slash() {
        let now = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();
        let link = Link {
            id: 1,
            code: "abc12345".to_string(),
            orig_url: "https://example.com".to_string(),
            user_id: 7,
            created_at: now,
            expire_at: now,
            is_active: true,
        };

        let with_slash = LinkResponse::from_link(link, "http://localhost:3000/");
        assert_eq!(with_slash.short_url, "http://localhost:3000/abc12345");
    }

    #[test]
    fn test_expire_seconds_default() {
        let request = CreateLinkRequest {
            orig_url: "https://example.com".to_string(),
            expire_seconds: None,
        };
        assert_eq!(request.expire_seconds_or_default(), 86_400);

        let request = CreateLinkRequest {
            orig_url: "https://example.com".to_string(),
            expire_seconds: Some(60),
        };
        assert_eq!(request.expire_seconds_or_default(), 60);
    }
}
