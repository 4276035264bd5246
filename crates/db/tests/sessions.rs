//! Refresh session redemption and lockout bookkeeping.

use chrono::{Duration, Utc};
use montage_db::models::admin::{Admin, CreateAdmin};
use montage_db::models::session::CreateSession;
use montage_db::repositories::{AdminRepo, SessionRepo};
use sqlx::PgPool;

async fn seed_admin(pool: &PgPool) -> Admin {
    let input = CreateAdmin {
        username: "editor".to_string(),
        password_hash: "not-a-real-hash".to_string(),
    };
    AdminRepo::create(pool, &input).await.unwrap()
}

async fn seed_session(pool: &PgPool, admin_id: i64, hash: &str, expires_in: Duration) {
    let input = CreateSession {
        admin_id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + expires_in,
    };
    SessionRepo::create(pool, &input).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_token_redeems_once(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    seed_session(&pool, admin.id, "abc123", Duration::days(7)).await;

    let first = SessionRepo::redeem_refresh_token(&pool, "abc123").await.unwrap();
    assert_eq!(first.unwrap().admin_id, admin.id);

    let second = SessionRepo::redeem_refresh_token(&pool, "abc123").await.unwrap();
    assert!(second.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_refresh_token_is_not_redeemed(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    seed_session(&pool, admin.id, "stale", Duration::minutes(-1)).await;

    let redeemed = SessionRepo::redeem_refresh_token(&pool, "stale").await.unwrap();
    assert!(redeemed.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clear_expired_lock_only_touches_expired_locks(pool: PgPool) {
    let admin = seed_admin(&pool).await;
    for _ in 0..5 {
        AdminRepo::increment_failed_login(&pool, admin.id).await.unwrap();
    }

    AdminRepo::lock_account(&pool, admin.id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();
    assert!(!AdminRepo::clear_expired_lock(&pool, admin.id).await.unwrap());

    AdminRepo::lock_account(&pool, admin.id, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();
    assert!(AdminRepo::clear_expired_lock(&pool, admin.id).await.unwrap());

    let reloaded = AdminRepo::find_by_id(&pool, admin.id).await.unwrap().unwrap();
    assert_eq!(reloaded.failed_login_count, 0);
    assert!(reloaded.locked_until.is_none());
    assert_eq!(
        AdminRepo::increment_failed_login(&pool, admin.id).await.unwrap(),
        1
    );
}
