//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code to a usable link (active and unexpired)
/// 2. Record a click event
/// 3. Return 307 Temporary Redirect to the original URL
///
/// # Click Tracking
///
/// Click recording is best-effort: a failed insert is logged and the
/// redirect still succeeds. The reverse does not hold; an unusable link
/// records nothing.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, the link is deactivated,
/// or the link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    if let Err(e) = state.stats_service.record_click(link.id).await {
        warn!("Failed to record click for link {}: {}", link.id, e);
    }

    Ok(Redirect::temporary(&link.orig_url))
}
