//! Password reset flow

use crate::common::{test_engine, wait_for_mail};
use regate::core::models::Account;
use regate::storage::database::entities::{self, reset_token};
use regate::utils::crypto::token::generate_token;
use regate::utils::error::ServiceError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::common::database::TestDatabase;

/// Register and confirm an account so it can log in
async fn active_account(
    engine: &regate::core::lifecycle::LifecycleEngine,
    username: &str,
    email: &str,
    password: &str,
) -> Account {
    let account = engine.register(username, email, password).await.unwrap();
    let token = account.confirmation_token.clone().unwrap();
    engine.confirm_email(&token).await.unwrap();
    account
}

/// Fetch the stored reset tokens for an account, oldest first
async fn stored_reset_tokens(db: &TestDatabase, account: &Account) -> Vec<String> {
    entities::ResetToken::find()
        .filter(reset_token::Column::AccountId.eq(account.id))
        .order_by_asc(reset_token::Column::Id)
        .all(db.db().connection())
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.token)
        .collect()
}

#[tokio::test]
async fn test_reset_round_trip_replaces_the_password() {
    let (engine, db, _mailer) = test_engine().await;
    let account = active_account(&engine, "alice", "alice@example.com", "old password").await;

    engine.request_reset("alice@example.com").await.unwrap();
    let tokens = stored_reset_tokens(&db, &account).await;
    assert_eq!(tokens.len(), 1);

    engine.redeem_reset(&tokens[0], "new password").await.unwrap();

    let err = engine
        .login("alice@example.com", "old password")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));

    let logged_in = engine
        .login("alice@example.com", "new password")
        .await
        .unwrap();
    assert_eq!(logged_in.id, account.id);
}

#[tokio::test]
async fn test_reset_token_is_single_use() {
    let (engine, db, _mailer) = test_engine().await;
    let account = active_account(&engine, "bob", "bob@example.com", "password123").await;

    engine.request_reset("bob@example.com").await.unwrap();
    let tokens = stored_reset_tokens(&db, &account).await;

    engine.redeem_reset(&tokens[0], "first new pass").await.unwrap();

    let err = engine
        .redeem_reset(&tokens[0], "second new pass")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidToken(_)));

    let logged_in = engine.login("bob@example.com", "first new pass").await.unwrap();
    assert_eq!(logged_in.id, account.id);
}

#[tokio::test]
async fn test_request_for_unknown_email_reports_success() {
    let (engine, _db, mailer) = test_engine().await;

    engine.request_reset("nobody@example.com").await.unwrap();

    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_reset_mail_carries_the_token() {
    let (engine, db, mailer) = test_engine().await;
    let account = active_account(&engine, "carol", "carol@example.com", "password123").await;
    let confirmation_mails = wait_for_mail(&mailer, 1).await.len();

    engine.request_reset("carol@example.com").await.unwrap();
    let sent = wait_for_mail(&mailer, confirmation_mails + 1).await;

    let reset_mail = sent.last().unwrap();
    assert_eq!(reset_mail.kind, "password reset");
    assert_eq!(reset_mail.to, "carol@example.com");

    let tokens = stored_reset_tokens(&db, &account).await;
    assert!(reset_mail.link.contains("/auth/reset-password?token="));
    assert!(reset_mail.link.ends_with(&tokens[0]));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let (engine, db, _mailer) = test_engine().await;
    let account = active_account(&engine, "dave", "dave@example.com", "password123").await;

    let token = generate_token();
    let expired = chrono::Utc::now() - chrono::Duration::minutes(1);
    db.db()
        .insert_reset_token(account.id, &token, expired)
        .await
        .unwrap();

    let err = engine.redeem_reset(&token, "new password").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidToken(_)));
}

#[tokio::test]
async fn test_token_near_expiry_still_works() {
    let (engine, db, _mailer) = test_engine().await;
    let account = active_account(&engine, "erin", "erin@example.com", "password123").await;

    let token = generate_token();
    let almost_expired = chrono::Utc::now() + chrono::Duration::seconds(30);
    db.db()
        .insert_reset_token(account.id, &token, almost_expired)
        .await
        .unwrap();

    engine.redeem_reset(&token, "new password").await.unwrap();
    engine.login("erin@example.com", "new password").await.unwrap();
}

#[tokio::test]
async fn test_outstanding_tokens_stay_independently_valid() {
    let (engine, db, _mailer) = test_engine().await;
    let account = active_account(&engine, "frank", "frank@example.com", "password123").await;

    engine.request_reset("frank@example.com").await.unwrap();
    engine.request_reset("frank@example.com").await.unwrap();

    let tokens = stored_reset_tokens(&db, &account).await;
    assert_eq!(tokens.len(), 2);
    assert_ne!(tokens[0], tokens[1]);

    engine.redeem_reset(&tokens[1], "second pass").await.unwrap();
    engine.redeem_reset(&tokens[0], "first pass").await.unwrap();

    engine.login("frank@example.com", "first pass").await.unwrap();
}

#[tokio::test]
async fn test_unknown_well_formed_token_is_rejected() {
    let (engine, _db, _mailer) = test_engine().await;

    let err = engine
        .redeem_reset(&generate_token(), "new password")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidToken(_)));
}

#[tokio::test]
async fn test_weak_replacement_password_leaves_token_live() {
    let (engine, db, _mailer) = test_engine().await;
    let account = active_account(&engine, "grace", "grace@example.com", "password123").await;

    engine.request_reset("grace@example.com").await.unwrap();
    let tokens = stored_reset_tokens(&db, &account).await;

    let err = engine.redeem_reset(&tokens[0], "short").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    engine.redeem_reset(&tokens[0], "long enough now").await.unwrap();
}
