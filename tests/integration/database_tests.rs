//! Store-level behavior

use crate::common::database::TestDatabase;
use regate::core::models::{Account, AccountStatus};
use regate::storage::database::DatabaseBackendType;
use regate::utils::crypto::token::generate_token;
use regate::utils::error::ServiceError;
use uuid::Uuid;

fn sample_account(email: &str) -> Account {
    Account::new(
        "tester".to_string(),
        email.to_string(),
        "$argon2id$fake-hash".to_string(),
        generate_token(),
    )
}

#[tokio::test]
async fn test_migrated_database_passes_health_check() {
    let db = TestDatabase::new().await;
    assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    db.db().health_check().await.unwrap();
}

#[tokio::test]
async fn test_insert_and_find_account() {
    let db = TestDatabase::new().await;

    let account = sample_account("find@example.com");
    db.db().insert_account(&account).await.unwrap();

    let by_email = db
        .db()
        .find_account_by_email("find@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, account.id);
    assert_eq!(by_email.status, AccountStatus::Inactive);

    let by_id = db.db().find_account_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, account.email);

    assert!(
        db.db()
            .find_account_by_email("other@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_email_lookup_is_exact_match() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_account(&sample_account("Case@Example.com"))
        .await
        .unwrap();

    assert!(
        db.db()
            .find_account_by_email("case@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_email_insert_is_a_conflict() {
    let db = TestDatabase::new().await;

    db.db()
        .insert_account(&sample_account("dup@example.com"))
        .await
        .unwrap();

    let err = db
        .db()
        .insert_account(&sample_account("dup@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn test_activate_by_token_consumes_the_token() {
    let db = TestDatabase::new().await;

    let account = sample_account("activate@example.com");
    let token = account.confirmation_token.clone().unwrap();
    db.db().insert_account(&account).await.unwrap();

    let activated = db.db().activate_by_token(&token).await.unwrap();
    assert_eq!(activated, Some(account.id));

    let stored = db.db().find_account_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(stored.status, AccountStatus::Active);
    assert!(stored.confirmation_token.is_none());

    assert!(db.db().activate_by_token(&token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_activate_by_unknown_token_is_none() {
    let db = TestDatabase::new().await;
    assert!(
        db.db()
            .activate_by_token(&generate_token())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_replace_token_refused_once_active() {
    let db = TestDatabase::new().await;

    let account = sample_account("replace@example.com");
    let token = account.confirmation_token.clone().unwrap();
    db.db().insert_account(&account).await.unwrap();

    assert!(
        db.db()
            .replace_confirmation_token(account.id, &generate_token())
            .await
            .unwrap()
    );

    // The original token was superseded by the replacement
    assert!(db.db().activate_by_token(&token).await.unwrap().is_none());

    let replacement = generate_token();
    db.db()
        .replace_confirmation_token(account.id, &replacement)
        .await
        .unwrap();
    db.db().activate_by_token(&replacement).await.unwrap().unwrap();

    assert!(
        !db.db()
            .replace_confirmation_token(account.id, &generate_token())
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_update_password_for_unknown_account() {
    let db = TestDatabase::new().await;

    let err = db
        .db()
        .update_account_password(Uuid::new_v4(), "$argon2id$new-hash")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn test_cleanup_sweeps_only_expired_tokens() {
    let db = TestDatabase::new().await;

    let account = sample_account("sweep@example.com");
    db.db().insert_account(&account).await.unwrap();

    let now = chrono::Utc::now();
    db.db()
        .insert_reset_token(account.id, &generate_token(), now - chrono::Duration::hours(2))
        .await
        .unwrap();
    db.db()
        .insert_reset_token(account.id, &generate_token(), now - chrono::Duration::seconds(1))
        .await
        .unwrap();
    let live = generate_token();
    db.db()
        .insert_reset_token(account.id, &live, now + chrono::Duration::hours(1))
        .await
        .unwrap();

    let swept = db.db().cleanup_expired_reset_tokens().await.unwrap();
    assert_eq!(swept, 2);

    assert_eq!(db.db().count_reset_tokens(account.id).await.unwrap(), 1);
    assert!(db.db().consume_reset_token(&live).await.unwrap().is_some());
}

#[tokio::test]
async fn test_expired_token_cannot_be_consumed() {
    let db = TestDatabase::new().await;

    let account = sample_account("expired@example.com");
    db.db().insert_account(&account).await.unwrap();

    let token = generate_token();
    db.db()
        .insert_reset_token(
            account.id,
            &token,
            chrono::Utc::now() - chrono::Duration::minutes(5),
        )
        .await
        .unwrap();

    assert!(db.db().consume_reset_token(&token).await.unwrap().is_none());
    assert_eq!(db.db().count_reset_tokens(account.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_consume_reset_token_deletes_the_row() {
    let db = TestDatabase::new().await;

    let account = sample_account("consume@example.com");
    db.db().insert_account(&account).await.unwrap();

    let token = generate_token();
    db.db()
        .insert_reset_token(
            account.id,
            &token,
            chrono::Utc::now() + chrono::Duration::hours(1),
        )
        .await
        .unwrap();

    assert_eq!(
        db.db().consume_reset_token(&token).await.unwrap(),
        Some(account.id)
    );
    assert_eq!(db.db().count_reset_tokens(account.id).await.unwrap(), 0);
    assert!(db.db().consume_reset_token(&token).await.unwrap().is_none());
}
