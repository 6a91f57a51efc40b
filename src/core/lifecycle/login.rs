//! Login gating

use super::LifecycleEngine;
use crate::core::models::Account;
use crate::utils::crypto::password::verify_password;
use crate::utils::error::{Result, ServiceError};
use tracing::{info, warn};

impl LifecycleEngine {
    /// Authenticate by email and password.
    ///
    /// Unknown email, wrong password, and an unconfirmed account all fail
    /// with the same `Unauthorized`, so the response reveals nothing
    /// about which stage rejected the attempt.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        info!("Login attempt: {}", email);

        let Some(account) = self.db.find_account_by_email(email).await? else {
            warn!("Login attempt for unknown email");
            return Err(ServiceError::invalid_credentials());
        };

        if !verify_password(password, &account.password_hash)? {
            warn!("Login attempt with wrong password: {}", account.id);
            return Err(ServiceError::invalid_credentials());
        }

        if !account.is_active() {
            warn!("Login attempt on unconfirmed account: {}", account.id);
            return Err(ServiceError::invalid_credentials());
        }

        info!("Login succeeded: {}", account.id);
        Ok(account)
    }
}
