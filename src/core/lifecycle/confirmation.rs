//! Email confirmation

use super::LifecycleEngine;
use crate::utils::crypto::token::is_well_formed;
use crate::utils::error::{Result, ServiceError};
use tracing::info;
use uuid::Uuid;

impl LifecycleEngine {
    /// Consume a confirmation token and activate its account.
    ///
    /// Malformed input is rejected before any store lookup but maps to
    /// the same error class as an unknown token. The store-side
    /// conditional update guarantees a token confirms at most once; a
    /// caller losing a concurrent race gets `InvalidToken` like anyone
    /// presenting a stale token.
    pub async fn confirm_email(&self, token: &str) -> Result<Uuid> {
        if !is_well_formed(token) {
            return Err(ServiceError::invalid_token());
        }

        match self.db.activate_by_token(token).await? {
            Some(account_id) => {
                info!("Account confirmed: {}", account_id);
                Ok(account_id)
            }
            None => Err(ServiceError::invalid_token()),
        }
    }
}
