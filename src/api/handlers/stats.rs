//! Handlers for click statistics endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::StatsListParams;
use crate::api::dto::stats::{StatsItem, StatsListResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves aggregated statistics for all of the user's links.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Query Parameters
///
/// - `top` (optional): Maximum rows returned (default: 100, min: 1)
/// - `sort_by` (optional): Window driving the descending sort, one of
///   `hour`, `day`, `all` (default: `all`)
///
/// Every owned link appears regardless of active or expired state; links
/// without clicks show zero counts.
///
/// # Errors
///
/// Returns 400 Bad Request for `top < 1` or an unknown `sort_by` value.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<StatsListParams>,
) -> Result<Json<StatsListResponse>, AppError> {
    let top = params
        .validate_and_get_top()
        .map_err(|e| AppError::bad_request(e, json!({})))?;
    let sort = params
        .parse_sort()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let rows = state.stats_service.stats_for_owner(user.id, top, sort).await?;

    let items = rows
        .into_iter()
        .map(|row| StatsItem::from_row(row, &state.base_url))
        .collect();

    Ok(Json(StatsListResponse { items }))
}

/// Retrieves statistics for a single link owned by the user.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 403 Forbidden when the
/// link belongs to another user.
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(code): Path<String>,
) -> Result<Json<StatsItem>, AppError> {
    let link = state.link_service.get_owned(user.id, &code).await?;

    let row = state.stats_service.stats_for_link(&link).await?;

    Ok(Json(StatsItem::from_row(row, &state.base_url)))
}
