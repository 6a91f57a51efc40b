//! HTTP response handling for errors

use super::types::ServiceError;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Error detail in an HTTP error body
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// JSON body for error responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

impl ErrorResponse {
    fn new(code: &str, message: String) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        }
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        // Storage, crypto, and delivery details stay in the logs; callers
        // get a generic message for anything internal.
        let (status_code, error_code, message) = match self {
            ServiceError::Conflict(_) => (
                actix_web::http::StatusCode::CONFLICT,
                "CONFLICT",
                self.to_string(),
            ),
            ServiceError::InvalidToken(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_TOKEN",
                self.to_string(),
            ),
            ServiceError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            ServiceError::Unauthorized(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                self.to_string(),
            ),
            ServiceError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            ServiceError::Database(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            ServiceError::Crypto(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
            ServiceError::Config(_)
            | ServiceError::Io(_)
            | ServiceError::Serialization(_)
            | ServiceError::Yaml(_)
            | ServiceError::Email(_)
            | ServiceError::Internal(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        };

        if status_code.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        HttpResponse::build(status_code).json(ErrorResponse::new(error_code, message))
    }
}
