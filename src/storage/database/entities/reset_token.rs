//! Password reset token database model

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Password reset token database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "password_reset_tokens")]
pub struct Model {
    /// Token ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Account this token belongs to
    pub account_id: Uuid,

    /// Reset token (unique)
    #[sea_orm(unique)]
    pub token: String,

    /// Token expiration timestamp
    pub expires_at: DateTimeWithTimeZone,

    /// Token creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Password reset token entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to account relation
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
