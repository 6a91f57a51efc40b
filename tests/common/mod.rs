//! Shared test infrastructure

pub mod database;
pub mod mailer;

use regate::config::Config;
use regate::core::lifecycle::LifecycleEngine;
use std::sync::Arc;

use database::TestDatabase;
use mailer::{SentMail, TestMailer};

/// Build a lifecycle engine over a fresh in-memory database and a
/// recording mailer.
pub async fn test_engine() -> (Arc<LifecycleEngine>, TestDatabase, Arc<TestMailer>) {
    let db = TestDatabase::new().await;
    let mailer = Arc::new(TestMailer::new());
    let engine = Arc::new(LifecycleEngine::new(
        &Config::default(),
        db.db_arc(),
        mailer.clone(),
    ));
    (engine, db, mailer)
}

/// Wait until the recording mailer has seen at least `count` messages.
///
/// Delivery runs on a detached task, so tests that assert on mail
/// content have to let that task run first.
pub async fn wait_for_mail(mailer: &TestMailer, count: usize) -> Vec<SentMail> {
    for _ in 0..200 {
        let sent = mailer.sent();
        if sent.len() >= count {
            return sent;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("expected {} mails, got {:?}", count, mailer.sent());
}
