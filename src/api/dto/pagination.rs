//! Pagination and filtering query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::DEFAULT_STATS_TOP;
use crate::domain::repositories::StatsSort;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(10);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&page_size) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        // Widen before multiplying so large page numbers cannot overflow u32.
        let offset = (page as i64 - 1) * page_size as i64;
        let limit = page_size as i64;

        Ok((offset, limit))
    }
}

/// Query parameters for the link listing endpoint.
///
/// `is_valid` / `is_active` are tri-state: absent means no filtering.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct LinkListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_valid: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Query parameters for the owner-wide statistics endpoint.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct StatsListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub top: Option<i64>,

    #[serde(default)]
    pub sort_by: Option<String>,
}

impl StatsListParams {
    /// Validates and resolves `top` (default: 100, must be >= 1).
    pub fn validate_and_get_top(&self) -> Result<i64, String> {
        let top = self.top.unwrap_or(DEFAULT_STATS_TOP);
        if top < 1 {
            return Err("top must be at least 1".to_string());
        }
        Ok(top)
    }

    /// Resolves `sort_by` to a sort column (default: `all`).
    pub fn parse_sort(&self) -> Result<StatsSort, String> {
        match self.sort_by.as_deref() {
            None | Some("all") => Ok(StatsSort::All),
            Some("hour") => Ok(StatsSort::Hour),
            Some("day") => Ok(StatsSort::Day),
            Some(other) => Err(format!(
                "sort_by must be one of 'hour', 'day', 'all', got '{}'",
                other
            )),
        }
    }
}
