//! Registration and confirmation resend

use super::{LifecycleEngine, validate_email, validate_password, validate_username};
use crate::core::models::Account;
use crate::notify::spawn_send;
use crate::utils::crypto::password::hash_password;
use crate::utils::crypto::token::generate_token;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::info;

impl LifecycleEngine {
    /// Register a new account.
    ///
    /// The account starts inactive, carrying a fresh confirmation token
    /// that is mailed out and never returned over the public interface.
    /// The store's unique constraint on email decides the outcome of
    /// concurrent registrations: exactly one succeeds, the rest get
    /// `Conflict`.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Account> {
        info!("Registration attempt: {}", email);

        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;
        let token = generate_token();

        let account = Account::new(
            username.to_string(),
            email.to_string(),
            password_hash,
            token.clone(),
        );

        let account = self.db.insert_account(&account).await?;

        let mailer = Arc::clone(&self.mailer);
        let link = self.confirmation_link(&token);
        let to = account.email.clone();
        spawn_send("confirmation", to.clone(), async move {
            mailer.send_confirmation(&to, &link).await
        });

        info!("Account registered: {} ({})", account.email, account.id);
        Ok(account)
    }

    /// Re-issue the confirmation token for an inactive account.
    ///
    /// The previous token stops working; there is at most one live
    /// confirmation token per account. Returns the fresh token after
    /// handing it to the mail channel.
    pub async fn resend_confirmation(&self, email: &str) -> Result<String> {
        info!("Confirmation resend requested: {}", email);

        let account = self
            .db
            .find_account_by_email(email)
            .await?
            .filter(|a| !a.is_active())
            .ok_or_else(|| {
                ServiceError::NotFound("No unconfirmed account with this email".to_string())
            })?;

        let token = generate_token();

        // The guarded update loses against a concurrent confirmation;
        // treat that the same as an already-active account.
        if !self.db.replace_confirmation_token(account.id, &token).await? {
            return Err(ServiceError::NotFound(
                "No unconfirmed account with this email".to_string(),
            ));
        }

        let mailer = Arc::clone(&self.mailer);
        let link = self.confirmation_link(&token);
        let to = account.email.clone();
        spawn_send("confirmation", to.clone(), async move {
            mailer.send_confirmation(&to, &link).await
        });

        Ok(token)
    }
}
