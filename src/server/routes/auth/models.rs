//! Request and response models for the account endpoints

use crate::core::models::Account;
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration response.
///
/// The confirmation token is deliberately absent; it only travels over
/// the mail channel.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub account_id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub message: String,
}

/// Confirmation link query (`GET /auth/confirm?token=...`)
#[derive(Debug, Deserialize)]
pub struct ConfirmQuery {
    pub token: String,
}

/// Confirmation resend request
#[derive(Debug, Deserialize)]
pub struct ResendConfirmationRequest {
    pub email: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response (without sensitive data)
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub account_id: uuid::Uuid,
    pub username: String,
    pub email: String,
}

/// Forgot password request
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset password request
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Account> for LoginResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            username: account.username,
            email: account.email,
        }
    }
}
