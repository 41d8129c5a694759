use chrono::{Duration, Utc};
use petride_db::models::session::CreateSession;
use petride_db::repositories::SessionRepo;
use sqlx::PgPool;
use uuid::Uuid;

fn session(user_id: Uuid, hash: &str, expires_in: Duration) -> CreateSession {
    CreateSession {
        user_id,
        email: "jessica@petride.com".to_string(),
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + expires_in,
        user_agent: None,
        ip_address: None,
    }
}

#[sqlx::test]
async fn find_by_hash_only_returns_active(pool: PgPool) {
    let user_id = Uuid::new_v4();
    let created = SessionRepo::create(&pool, &session(user_id, "hash-a", Duration::days(7)))
        .await
        .unwrap();
    assert_eq!(created.email, "jessica@petride.com");

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap();
    assert!(found.is_some());

    // Expired sessions are filtered out.
    SessionRepo::create(&pool, &session(user_id, "hash-expired", Duration::days(-1)))
        .await
        .unwrap();
    let expired = SessionRepo::find_by_refresh_token_hash(&pool, "hash-expired")
        .await
        .unwrap();
    assert!(expired.is_none());
}

#[sqlx::test]
async fn revoke_hides_session(pool: PgPool) {
    let created = SessionRepo::create(
        &pool,
        &session(Uuid::new_v4(), "hash-b", Duration::days(7)),
    )
    .await
    .unwrap();

    assert!(SessionRepo::revoke(&pool, created.id).await.unwrap());
    // Revoking twice is a no-op.
    assert!(!SessionRepo::revoke(&pool, created.id).await.unwrap());

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-b")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn revoke_all_for_user(pool: PgPool) {
    let user_id = Uuid::new_v4();
    SessionRepo::create(&pool, &session(user_id, "hash-1", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session(user_id, "hash-2", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &session(Uuid::new_v4(), "hash-other", Duration::days(7)),
    )
    .await
    .unwrap();

    let revoked = SessionRepo::revoke_all_for_user(&pool, user_id).await.unwrap();
    assert_eq!(revoked, 2);

    // The other user's session is untouched.
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-other")
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test]
async fn cleanup_removes_expired_and_revoked(pool: PgPool) {
    let keep = SessionRepo::create(
        &pool,
        &session(Uuid::new_v4(), "hash-keep", Duration::days(7)),
    )
    .await
    .unwrap();
    SessionRepo::create(
        &pool,
        &session(Uuid::new_v4(), "hash-old", Duration::days(-1)),
    )
    .await
    .unwrap();
    let revoked = SessionRepo::create(
        &pool,
        &session(Uuid::new_v4(), "hash-revoked", Duration::days(7)),
    )
    .await
    .unwrap();
    SessionRepo::revoke(&pool, revoked.id).await.unwrap();

    let deleted = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(deleted, 2);

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-keep")
        .await
        .unwrap()
        .map(|s| s.id == keep.id)
        .unwrap_or(false));
}
