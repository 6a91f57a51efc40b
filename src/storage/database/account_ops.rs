//! Account store operations
//!
//! The operations that consume or supersede confirmation tokens are single
//! guarded statements, so concurrent callers are serialized by the store
//! and exactly one of them observes `rows_affected == 1`.

use crate::core::models::{Account, AccountStatus};
use crate::utils::error::{Result, ServiceError};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::entities::{self, account};
use super::types::Database;

impl Database {
    /// Find account by ID
    pub async fn find_account_by_id(&self, account_id: Uuid) -> Result<Option<Account>> {
        debug!("Finding account by ID: {}", account_id);

        let model = entities::Account::find_by_id(account_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(|m| m.to_domain_account()))
    }

    /// Find account by email (exact match, as stored)
    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        debug!("Finding account by email: {}", email);

        let model = entities::Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(|m| m.to_domain_account()))
    }

    /// Insert a new account.
    ///
    /// The unique constraint on email is the final arbiter of the
    /// registration race: a violation maps to `Conflict`, so of N
    /// concurrent inserts for one email exactly one succeeds.
    pub async fn insert_account(&self, account: &Account) -> Result<Account> {
        debug!("Inserting account: {}", account.email);

        let active_model = account::Model::from_domain_account(account);

        entities::Account::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    ServiceError::Conflict("Email already registered".to_string())
                }
                _ => ServiceError::Database(e),
            })?;

        Ok(account.clone())
    }

    /// Consume a confirmation token, activating its account.
    ///
    /// One conditional update (`WHERE confirmation_token = ? AND status =
    /// 'inactive'`) flips the state and clears the token together, so a
    /// token is consumed exactly once even under concurrent redemption.
    /// Returns the activated account id, or `None` when the token is
    /// unknown, already consumed, or lost a concurrent race.
    pub async fn activate_by_token(&self, token: &str) -> Result<Option<Uuid>> {
        debug!("Activating account by confirmation token");

        let candidate = entities::Account::find()
            .filter(account::Column::ConfirmationToken.eq(token))
            .filter(account::Column::Status.eq(AccountStatus::Inactive.as_str()))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        let Some(model) = candidate else {
            return Ok(None);
        };

        let result = entities::Account::update_many()
            .col_expr(
                account::Column::Status,
                Expr::value(AccountStatus::Active.as_str()),
            )
            .col_expr(
                account::Column::ConfirmationToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(account::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(account::Column::Id.eq(model.id))
            .filter(account::Column::ConfirmationToken.eq(token))
            .filter(account::Column::Status.eq(AccountStatus::Inactive.as_str()))
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok((result.rows_affected == 1).then_some(model.id))
    }

    /// Replace the confirmation token of an inactive account.
    ///
    /// The guard on status keeps a resend from reviving a token on an
    /// account that activated in the meantime. Returns false when no
    /// inactive row matched.
    pub async fn replace_confirmation_token(
        &self,
        account_id: Uuid,
        token: &str,
    ) -> Result<bool> {
        debug!("Replacing confirmation token for account: {}", account_id);

        let result = entities::Account::update_many()
            .col_expr(
                account::Column::ConfirmationToken,
                Expr::value(Some(token.to_string())),
            )
            .col_expr(account::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(account::Column::Id.eq(account_id))
            .filter(account::Column::Status.eq(AccountStatus::Inactive.as_str()))
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected == 1)
    }

    /// Update the stored credential of an account
    pub async fn update_account_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<()> {
        debug!("Updating password for account: {}", account_id);

        let result = entities::Account::update_many()
            .col_expr(
                account::Column::PasswordHash,
                Expr::value(password_hash.to_string()),
            )
            .col_expr(account::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(account::Column::Id.eq(account_id))
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Account not found".to_string()));
        }

        Ok(())
    }
}
