//! Recording mailer for tests

use async_trait::async_trait;
use regate::notify::Mailer;
use regate::utils::error::Result;
use std::sync::Mutex;

/// A recorded outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub kind: &'static str,
    pub to: String,
    pub link: String,
}

/// Mailer that records every send instead of delivering
#[derive(Default)]
pub struct TestMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl TestMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for TestMailer {
    async fn send_confirmation(&self, to: &str, link: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMail {
            kind: "confirmation",
            to: to.to_string(),
            link: link.to_string(),
        });
        Ok(())
    }

    async fn send_password_reset(&self, to: &str, link: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMail {
            kind: "password reset",
            to: to.to_string(),
            link: link.to_string(),
        });
        Ok(())
    }
}

/// Pull the token query parameter out of a mailed link
pub fn token_from_link(link: &str) -> &str {
    link.split("token=").nth(1).expect("link carries no token")
}
