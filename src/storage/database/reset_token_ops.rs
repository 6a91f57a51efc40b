//! Reset-token store operations
//!
//! Reset tokens live independently of the account row. Several may be
//! outstanding for one account at a time; each is valid until redeemed or
//! expired. Redemption deletes the row, which closes the replay window.

use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::entities::{self, reset_token};
use super::types::Database;

impl Database {
    /// Store a password reset token scoped to an account.
    ///
    /// Earlier unexpired tokens for the same account stay valid; the
    /// unique constraint on the token column rejects a generator
    /// collision instead of overwriting.
    pub async fn insert_reset_token(
        &self,
        account_id: Uuid,
        token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<()> {
        debug!("Storing password reset token for account: {}", account_id);

        let active_model = reset_token::ActiveModel {
            id: NotSet,
            account_id: Set(account_id),
            token: Set(token.to_string()),
            expires_at: Set(expires_at.into()),
            created_at: Set(chrono::Utc::now().into()),
        };

        entities::ResetToken::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(())
    }

    /// Consume a reset token: look it up while unexpired, then delete it.
    ///
    /// The delete is keyed and re-guarded on expiry, and only the caller
    /// whose delete affects a row wins; everyone else gets `None`. A
    /// consumed token is therefore indistinguishable from an unknown one.
    pub async fn consume_reset_token(&self, token: &str) -> Result<Option<Uuid>> {
        debug!("Consuming password reset token");

        let now = chrono::Utc::now();

        let token_model = entities::ResetToken::find()
            .filter(reset_token::Column::Token.eq(token))
            .filter(reset_token::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        let Some(token_model) = token_model else {
            return Ok(None);
        };

        let result = entities::ResetToken::delete_many()
            .filter(reset_token::Column::Id.eq(token_model.id))
            .filter(reset_token::Column::ExpiresAt.gt(now))
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok((result.rows_affected == 1).then_some(token_model.account_id))
    }

    /// Clean up expired password reset tokens
    pub async fn cleanup_expired_reset_tokens(&self) -> Result<u64> {
        debug!("Cleaning up expired password reset tokens");

        let result = entities::ResetToken::delete_many()
            .filter(reset_token::Column::ExpiresAt.lt(chrono::Utc::now()))
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected)
    }

    /// Count outstanding (unexpired) reset tokens for an account
    pub async fn count_reset_tokens(&self, account_id: Uuid) -> Result<u64> {
        let count = entities::ResetToken::find()
            .filter(reset_token::Column::AccountId.eq(account_id))
            .filter(reset_token::Column::ExpiresAt.gt(chrono::Utc::now()))
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(count)
    }
}
