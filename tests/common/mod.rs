#![allow(dead_code)]

use std::sync::Arc;

use axum::{Extension, Router, middleware};
use axum_test::TestServer;
use sqlx::PgPool;

use url_alias::api::middleware::auth::{self, CurrentUser};
use url_alias::api::routes::protected_routes;
use url_alias::domain::clock::Clock;
use url_alias::domain::entities::User;
use url_alias::state::AppState;
use url_alias::utils::password;

pub const TEST_BASE_URL: &str = "http://testserver";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool, TEST_BASE_URL.to_string())
}

/// Like [`create_test_state`] but with a pinned clock, so tests can move
/// time without touching stored rows.
pub fn create_test_state_with_clock(pool: PgPool, clock: Arc<dyn Clock>) -> AppState {
    AppState::with_clock(pool, TEST_BASE_URL.to_string(), clock)
}

/// Inserts a user with an Argon2-hashed password and returns its id.
pub async fn create_test_user(pool: &PgPool, username: &str, plain: &str) -> i64 {
    let hash = password::hash_password(plain).unwrap();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_user(pool: &PgPool, username: &str, plain: &str) -> i64 {
    let id = create_test_user(pool, username, plain).await;

    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();

    id
}

pub async fn get_user(pool: &PgPool, id: i64) -> User {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, is_active FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a link expiring `expire_offset_seconds` from now (negative for
/// already expired) and returns its id.
pub async fn create_test_link(
    pool: &PgPool,
    user_id: i64,
    code: &str,
    url: &str,
    expire_offset_seconds: i64,
    is_active: bool,
) -> i64 {
    create_test_link_aged(pool, user_id, code, url, 3600, expire_offset_seconds, is_active).await
}

/// Like [`create_test_link`] but with an explicit creation age, so tests
/// can observe creation-time ordering. `expire_offset_seconds` must be
/// `>= -created_age_seconds` to satisfy the schema check.
pub async fn create_test_link_aged(
    pool: &PgPool,
    user_id: i64,
    code: &str,
    url: &str,
    created_age_seconds: i64,
    expire_offset_seconds: i64,
    is_active: bool,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO links (code, orig_url, user_id, created_at, expire_at, is_active)
        VALUES ($1, $2, $3,
                NOW() - make_interval(secs => $4),
                NOW() + make_interval(secs => $5),
                $6)
        RETURNING id
        "#,
    )
    .bind(code)
    .bind(url)
    .bind(user_id)
    .bind(created_age_seconds as f64)
    .bind(expire_offset_seconds as f64)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a click `age_seconds` in the past.
pub async fn create_test_click(pool: &PgPool, link_id: i64, age_seconds: i64) {
    sqlx::query(
        "INSERT INTO clicks (link_id, clicked_at) VALUES ($1, NOW() - make_interval(secs => $2))",
    )
    .bind(link_id)
    .bind(age_seconds as f64)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_clicks(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks WHERE link_id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Builds a test server over the protected API routes with the auth
/// middleware bypassed: `user` is injected directly as the request
/// extension the middleware would normally add.
pub fn make_api_server_as(pool: PgPool, user: User) -> TestServer {
    let state = create_test_state(pool);

    let app = Router::new()
        .nest("/api", protected_routes())
        .layer(Extension(CurrentUser(user)))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Builds a test server with the real Basic-Auth middleware in place.
pub fn make_authed_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);

    let api_router = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new().nest("/api", api_router).with_state(state);

    TestServer::new(app).unwrap()
}
