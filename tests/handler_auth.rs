mod common;

use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test]
async fn test_missing_credentials(pool: PgPool) {
    let server = common::make_authed_server(pool);

    let response = server.get("/api/links").await;

    response.assert_status_unauthorized();
    assert_eq!(response.headers().get("www-authenticate").unwrap(), "Basic");
}

#[sqlx::test]
async fn test_unknown_user(pool: PgPool) {
    let server = common::make_authed_server(pool);

    server
        .get("/api/links")
        .add_header("Authorization", basic("ghost", "whatever"))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_wrong_password(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct").await;

    let server = common::make_authed_server(pool);

    server
        .get("/api/links")
        .add_header("Authorization", basic("alice", "wrong"))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_inactive_user_is_forbidden(pool: PgPool) {
    common::create_inactive_user(&pool, "alice", "pw").await;

    let server = common::make_authed_server(pool);

    server
        .get("/api/links")
        .add_header("Authorization", basic("alice", "pw"))
        .await
        .assert_status_forbidden();
}

#[sqlx::test]
async fn test_valid_credentials(pool: PgPool) {
    common::create_test_user(&pool, "alice", "open-sesame").await;

    let server = common::make_authed_server(pool);

    let response = server
        .get("/api/links")
        .add_header("Authorization", basic("alice", "open-sesame"))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total_items"], 0);
}

#[sqlx::test]
async fn test_handlers_act_as_authenticated_user(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice", "pw").await;
    common::create_test_user(&pool, "bob", "pw").await;
    common::create_test_link(&pool, alice, "alice001", "https://a.example", 3600, true).await;

    let server = common::make_authed_server(pool);

    // Bob sees an empty listing; ownership comes from the credentials.
    let body: Value = server
        .get("/api/links")
        .add_header("Authorization", basic("bob", "pw"))
        .await
        .json();
    assert_eq!(body["total_items"], 0);

    let body: Value = server
        .get("/api/links")
        .add_header("Authorization", basic("alice", "pw"))
        .await
        .json();
    assert_eq!(body["total_items"], 1);
}

fn basic(username: &str, password: &str) -> String {
    use base64::Engine as _;
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}
