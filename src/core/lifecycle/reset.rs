//! Password reset flow

use super::{LifecycleEngine, validate_password};
use crate::notify::spawn_send;
use crate::utils::crypto::password::hash_password;
use crate::utils::crypto::token::{generate_token, is_well_formed};
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::{debug, info};

impl LifecycleEngine {
    /// Request a password reset for an email address.
    ///
    /// Reports success whether or not the account exists, so responses
    /// carry no enumeration signal. For an existing account a fresh
    /// time-boxed token is stored and mailed; earlier unexpired tokens
    /// stay valid.
    pub async fn request_reset(&self, email: &str) -> Result<()> {
        info!("Password reset requested");

        let Some(account) = self.db.find_account_by_email(email).await? else {
            debug!("Reset requested for unknown email; ignoring");
            return Ok(());
        };

        let token = generate_token();
        let expires_at = chrono::Utc::now() + self.reset_token_ttl();

        self.db
            .insert_reset_token(account.id, &token, expires_at)
            .await?;

        let mailer = Arc::clone(&self.mailer);
        let link = self.reset_link(&token);
        let to = account.email.clone();
        spawn_send("password reset", to.clone(), async move {
            mailer.send_password_reset(&to, &link).await
        });

        Ok(())
    }

    /// Redeem a reset token, replacing the account's credential.
    ///
    /// The token is deleted in the same conditional statement that
    /// validates it, so it cannot be redeemed twice; unknown, expired,
    /// consumed, and malformed tokens are indistinguishable to the
    /// caller.
    pub async fn redeem_reset(&self, token: &str, new_password: &str) -> Result<()> {
        info!("Password reset redemption");

        if !is_well_formed(token) {
            return Err(ServiceError::invalid_token());
        }
        validate_password(new_password)?;

        let Some(account_id) = self.db.consume_reset_token(token).await? else {
            return Err(ServiceError::invalid_token());
        };

        let password_hash = hash_password(new_password)?;
        self.db
            .update_account_password(account_id, &password_hash)
            .await?;

        info!("Password reset completed: {}", account_id);
        Ok(())
    }
}
