mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use url_alias::AppError;
use url_alias::domain::entities::NewLink;
use url_alias::domain::repositories::{ActivityFilter, LinkRepository, ValidityFilter};
use url_alias::infrastructure::persistence::PgLinkRepository;

fn repo(pool: &PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool.clone()))
}

fn new_link(code: &str, url: &str, user_id: i64, ttl_seconds: i64) -> NewLink {
    let now = Utc::now();
    NewLink {
        code: code.to_string(),
        orig_url: url.to_string(),
        user_id,
        created_at: now,
        expire_at: now + Duration::seconds(ttl_seconds),
        is_active: true,
    }
}

#[sqlx::test]
async fn test_create_and_find_by_code(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "pw").await;
    let repo = repo(&pool);

    let created = repo
        .create(new_link("abc12345", "https://example.com", user_id, 3600))
        .await
        .unwrap();

    assert_eq!(created.code, "abc12345");
    assert!(created.is_active);

    let found = repo.find_by_code("abc12345").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.orig_url, "https://example.com");

    assert!(repo.find_by_code("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_create_duplicate_code_is_conflict(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "pw").await;
    let repo = repo(&pool);

    repo.create(new_link("dupe0001", "https://one.example", user_id, 3600))
        .await
        .unwrap();

    let err = repo
        .create(new_link("dupe0001", "https://two.example", user_id, 3600))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_usable_skips_inactive_and_expired(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "pw").await;
    let url = "https://example.com/page";

    common::create_test_link(&pool, user_id, "inact001", url, 3600, false).await;
    common::create_test_link(&pool, user_id, "exprd001", url, -60, true).await;

    let repo = repo(&pool);
    let now = Utc::now();

    assert!(
        repo.find_usable_by_owner_and_url(user_id, url, now)
            .await
            .unwrap()
            .is_none()
    );

    common::create_test_link(&pool, user_id, "usable01", url, 3600, true).await;

    let found = repo
        .find_usable_by_owner_and_url(user_id, url, now)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.code, "usable01");

    // Another user's link for the same URL is not a duplicate.
    let other_id = common::create_test_user(&pool, "bob", "pw").await;
    assert!(
        repo.find_usable_by_owner_and_url(other_id, url, now)
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_deactivate(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "pw").await;
    let link_id =
        common::create_test_link(&pool, user_id, "live0001", "https://example.com", 3600, true)
            .await;

    let repo = repo(&pool);

    let updated = repo.deactivate(link_id).await.unwrap();
    assert!(!updated.is_active);

    // Idempotent at the storage level.
    let again = repo.deactivate(link_id).await.unwrap();
    assert!(!again.is_active);

    let err = repo.deactivate(999_999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_list_by_owner_tri_state_filters(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "pw").await;

    // active+valid, active+expired, inactive+valid, inactive+expired
    common::create_test_link(&pool, user_id, "av000001", "https://a.example", 3600, true).await;
    common::create_test_link(&pool, user_id, "ae000001", "https://b.example", -60, true).await;
    common::create_test_link(&pool, user_id, "iv000001", "https://c.example", 3600, false).await;
    common::create_test_link(&pool, user_id, "ie000001", "https://d.example", -60, false).await;

    let repo = repo(&pool);
    let now = Utc::now();

    let (links, total) = repo
        .list_by_owner(user_id, ValidityFilter::Any, ActivityFilter::Any, now, 10, 0)
        .await
        .unwrap();
    assert_eq!(total, 4);
    assert_eq!(links.len(), 4);

    let (links, total) = repo
        .list_by_owner(
            user_id,
            ValidityFilter::OnlyValid,
            ActivityFilter::OnlyActive,
            now,
            10,
            0,
        )
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(links[0].code, "av000001");

    let (links, total) = repo
        .list_by_owner(
            user_id,
            ValidityFilter::OnlyExpired,
            ActivityFilter::Any,
            now,
            10,
            0,
        )
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert!(links.iter().all(|l| l.expire_at <= now));

    let (links, total) = repo
        .list_by_owner(
            user_id,
            ValidityFilter::Any,
            ActivityFilter::OnlyInactive,
            now,
            10,
            0,
        )
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert!(links.iter().all(|l| !l.is_active));
}

#[sqlx::test]
async fn test_list_by_owner_orders_newest_first(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "pw").await;

    // Link 7 is the newest, link 1 the oldest.
    for i in 1..=7i64 {
        let code = format!("ord000{:02}", i);
        let url = format!("https://example.com/{}", i);
        common::create_test_link_aged(&pool, user_id, &code, &url, (8 - i) * 60, 3600, true).await;
    }

    let repo = repo(&pool);
    let now = Utc::now();

    let (page1, total) = repo
        .list_by_owner(user_id, ValidityFilter::Any, ActivityFilter::Any, now, 3, 0)
        .await
        .unwrap();
    assert_eq!(total, 7);
    let codes: Vec<&str> = page1.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, ["ord00007", "ord00006", "ord00005"]);

    let (page2, _) = repo
        .list_by_owner(user_id, ValidityFilter::Any, ActivityFilter::Any, now, 3, 3)
        .await
        .unwrap();
    let codes: Vec<&str> = page2.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, ["ord00004", "ord00003", "ord00002"]);
}

#[sqlx::test]
async fn test_list_by_owner_pagination_and_scoping(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice", "pw").await;
    let bob = common::create_test_user(&pool, "bob", "pw").await;

    for i in 0..5 {
        let code = format!("alice{:03}", i);
        let url = format!("https://example.com/{}", i);
        common::create_test_link(&pool, alice, &code, &url, 3600, true).await;
    }
    common::create_test_link(&pool, bob, "bob00001", "https://bob.example", 3600, true).await;

    let repo = repo(&pool);
    let now = Utc::now();

    let (page1, total) = repo
        .list_by_owner(alice, ValidityFilter::Any, ActivityFilter::Any, now, 2, 0)
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page1.len(), 2);

    let (page3, _) = repo
        .list_by_owner(alice, ValidityFilter::Any, ActivityFilter::Any, now, 2, 4)
        .await
        .unwrap();
    assert_eq!(page3.len(), 1);

    // Only the owner's links are visible.
    assert!(page1.iter().all(|l| l.user_id == alice));
}
