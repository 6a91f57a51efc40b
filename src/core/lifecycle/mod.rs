//! Account lifecycle engine
//!
//! The state machine orchestrating registration, confirmation, login
//! gating, and the password reset flow. The engine is stateless between
//! calls; all durable state lives in the store, and every token-consuming
//! operation is a single conditional write there, so concurrent requests
//! resolve deterministically without application-level locking.

mod confirmation;
mod login;
mod registration;
mod reset;

use crate::config::Config;
use crate::notify::Mailer;
use crate::storage::Database;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The account lifecycle engine.
///
/// Constructed once at startup with its collaborators; no hidden statics.
pub struct LifecycleEngine {
    pub(super) db: Arc<Database>,
    pub(super) mailer: Arc<dyn Mailer>,
    base_url: String,
    reset_token_ttl: chrono::Duration,
}

impl LifecycleEngine {
    /// Create a new engine from configuration and collaborators
    pub fn new(config: &Config, db: Arc<Database>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db,
            mailer,
            base_url: config.email.public_base_url.trim_end_matches('/').to_string(),
            reset_token_ttl: chrono::Duration::seconds(config.accounts.reset_token_ttl_secs as i64),
        }
    }

    /// How long an issued reset token stays valid
    pub fn reset_token_ttl(&self) -> chrono::Duration {
        self.reset_token_ttl
    }

    pub(super) fn confirmation_link(&self, token: &str) -> String {
        format!("{}/auth/confirm?token={}", self.base_url, token)
    }

    pub(super) fn reset_link(&self, token: &str) -> String {
        format!("{}/auth/reset-password?token={}", self.base_url, token)
    }

    /// Spawn the periodic sweep deleting reset tokens past their expiry.
    ///
    /// Redemption already rejects expired tokens; this only keeps the
    /// table from accumulating dead rows.
    pub fn start_cleanup_task(self: &Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let engine = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match engine.db.cleanup_expired_reset_tokens().await {
                    Ok(0) => {}
                    Ok(n) => debug!("Swept {} expired reset tokens", n),
                    Err(e) => warn!("Reset token sweep failed: {}", e),
                }
            }
        })
    }
}

pub(super) fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(ServiceError::Validation("Username must not be empty".to_string()));
    }
    if username.len() > 255 {
        return Err(ServiceError::Validation("Username is too long".to_string()));
    }
    Ok(())
}

pub(super) fn validate_email(email: &str) -> Result<()> {
    let valid = email.len() <= 255
        && email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        });
    if !valid {
        return Err(ServiceError::Validation("Invalid email address".to_string()));
    }
    Ok(())
}

pub(super) fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(ServiceError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}
