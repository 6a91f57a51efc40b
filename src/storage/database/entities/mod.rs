//! Database entities

/// Account entity module
pub mod account;
/// Password reset token entity module
pub mod reset_token;

pub use account::Entity as Account;
pub use reset_token::Entity as ResetToken;
