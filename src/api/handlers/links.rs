//! Handlers for link management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::api::dto::pagination::LinkListParams;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "orig_url": "https://example.com/some/long/path",
///   "expire_seconds": 3600
/// }
/// ```
///
/// `expire_seconds` defaults to 86400 (one day).
///
/// # Idempotency
///
/// If the user already has an active, unexpired link for the same URL,
/// that link is returned instead of creating a new one. The status is
/// 201 either way.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or non-positive
/// `expire_seconds`, and 409 Conflict if a concurrent create won a
/// short-code race.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let expire_seconds = payload.expire_seconds_or_default();

    let link = state
        .link_service
        .create_or_reuse(user.id, payload.orig_url, expire_seconds)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.base_url)),
    ))
}

/// Deactivates a link owned by the authenticated user.
///
/// # Endpoint
///
/// `PATCH /api/links/{code}/deactivate`
///
/// Deactivation is one-way; there is no reactivation endpoint. Expired
/// links can still be deactivated.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 403 Forbidden when the
/// link belongs to another user.
pub async fn deactivate_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.deactivate(user.id, &code).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Lists the authenticated user's links with filters and pagination.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 10, max: 100)
/// - `is_valid` (optional): `true` keeps only unexpired links, `false`
///   only expired ones; absent applies no validity filter
/// - `is_active` (optional): same tri-state semantics for the active flag
///
/// # Response
///
/// Paginated listing ordered by creation time descending;
/// `total_items` counts the filtered set.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are out of range.
pub async fn links_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<LinkListParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = params.pagination.page.unwrap_or(1);
    let page_size = params.pagination.page_size.unwrap_or(10);

    let (links, total_items) = state
        .link_service
        .list(
            user.id,
            params.is_valid.into(),
            params.is_active.into(),
            limit,
            offset,
        )
        .await?;

    let items = links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.base_url))
        .collect();

    let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;

    Ok(Json(LinkListResponse {
        page,
        page_size,
        total_items,
        total_pages,
        items,
    }))
}
