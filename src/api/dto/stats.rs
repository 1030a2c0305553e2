//! DTOs for click statistics endpoints.

use serde::Serialize;

use crate::domain::repositories::LinkStatsRow;

/// Click counts for one link across the three fixed windows.
#[derive(Debug, Serialize)]
pub struct StatsItem {
    pub orig_url: String,
    pub short_url: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub all_clicks: i64,
}

impl StatsItem {
    /// Builds a response item, prefixing the public base URL.
    pub fn from_row(row: LinkStatsRow, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), row.code);

        Self {
            orig_url: row.orig_url,
            short_url,
            last_hour_clicks: row.last_hour_clicks,
            last_day_clicks: row.last_day_clicks,
            all_clicks: row.all_clicks,
        }
    }
}

/// Owner-wide statistics listing, ordered by the requested sort column.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub items: Vec<StatsItem>,
}
