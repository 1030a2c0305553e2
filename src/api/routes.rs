//! API route configuration.
//!
//! All API endpoints require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, deactivate_link_handler, link_stats_handler, links_list_handler,
    stats_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// All API routes, protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST  /links`                    - Create a short link (idempotent per URL)
/// - `GET   /links`                    - List own links (filters + pagination)
/// - `PATCH /links/{code}/deactivate`  - Deactivate an owned link
/// - `GET   /stats`                    - Aggregated click statistics per link
/// - `GET   /stats/{code}`             - Statistics for a specific link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/links",
            get(links_list_handler).post(create_link_handler),
        )
        .route("/links/{code}/deactivate", patch(deactivate_link_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(link_stats_handler))
}
