//! Error types for the account service

use thiserror::Error;

/// Result type alias for the account service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the account service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Duplicate email at registration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed, unknown, already-consumed, or expired token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Operation targets an account whose absence is safe to disclose
    #[error("Not found: {0}")]
    NotFound(String),

    /// Login failure; deliberately undifferentiated
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Crypto errors (password hashing)
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Email delivery errors; confined to the dispatch task, never
    /// surfaced to the triggering request
    #[error("Email error: {0}")]
    Email(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Shorthand for a `Unauthorized` with the uniform login message
    pub fn invalid_credentials() -> Self {
        ServiceError::Unauthorized("Invalid email or password".to_string())
    }

    /// Shorthand for an `InvalidToken` with the uniform token message
    pub fn invalid_token() -> Self {
        ServiceError::InvalidToken("Invalid or expired token".to_string())
    }
}
