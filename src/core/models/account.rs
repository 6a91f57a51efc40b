//! Account domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Activation state of an account.
///
/// The only transition is `Inactive -> Active`, guarded by the confirmation
/// token; it fires at most once and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Created but email not yet confirmed; login refused
    Inactive,
    /// Email confirmed; usable for login
    Active,
}

impl AccountStatus {
    /// Stable string form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Inactive => "inactive",
            AccountStatus::Active => "active",
        }
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inactive" => Ok(AccountStatus::Inactive),
            "active" => Ok(AccountStatus::Active),
            other => Err(format!("unknown account status: {}", other)),
        }
    }
}

/// A user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity, assigned at creation
    pub id: Uuid,
    /// Free-form display name
    pub username: String,
    /// Unique login identifier, matched exactly as stored
    pub email: String,
    /// Argon2 hash of the credential
    pub password_hash: String,
    /// Activation state
    pub status: AccountStatus,
    /// Live confirmation token; present only while inactive
    pub confirmation_token: Option<String>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Maintained on mutation
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new inactive account carrying a fresh confirmation token
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        confirmation_token: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            status: AccountStatus::Inactive,
            confirmation_token: Some(confirmation_token),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account may log in
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
