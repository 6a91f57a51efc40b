//! Account database model

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::models::{Account, AccountStatus};

/// Account database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Account ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name
    pub username: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Password hash
    pub password_hash: String,

    /// Activation state ("inactive" or "active")
    pub status: String,

    /// Live confirmation token; NULL once activated.
    /// Unique so a generator collision fails the insert instead of
    /// silently aliasing two accounts.
    #[sea_orm(unique)]
    pub confirmation_token: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Account entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Password reset tokens relation
    #[sea_orm(has_many = "super::reset_token::Entity")]
    ResetTokens,
}

impl Related<super::reset_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResetTokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and the domain model
impl Model {
    /// Convert SeaORM model to the domain account model
    pub fn to_domain_account(&self) -> Account {
        Account {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            status: AccountStatus::from_str(&self.status).unwrap_or(AccountStatus::Inactive),
            confirmation_token: self.confirmation_token.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert the domain account model to a SeaORM active model
    pub fn from_domain_account(account: &Account) -> ActiveModel {
        ActiveModel {
            id: Set(account.id),
            username: Set(account.username.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            status: Set(account.status.as_str().to_string()),
            confirmation_token: Set(account.confirmation_token.clone()),
            created_at: Set(account.created_at.into()),
            updated_at: Set(account.updated_at.into()),
        }
    }
}
