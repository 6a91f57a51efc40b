//! Password reset endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, web};
use tracing::error;

use super::models::{ForgotPasswordRequest, MessageResponse, ResetPasswordRequest};

/// Forgot password endpoint.
///
/// Always answers 200 with the same body, whether or not the email is
/// registered, so responses carry no enumeration signal. Only a store
/// failure breaks that rule; it is logged and masked like any internal
/// error.
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ServiceError> {
    if let Err(e) = state.engine.request_reset(&request.email).await {
        match e {
            ServiceError::Database(_) => return Err(e),
            other => error!("Unexpected reset-request failure: {}", other),
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "If the email is registered, a reset link has been sent".to_string(),
    })))
}

/// Reset password endpoint
///
/// `400 InvalidToken` for an unknown, expired, consumed, or malformed
/// token; success replaces the stored credential and retires the token.
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ServiceError> {
    state
        .engine
        .redeem_reset(&request.token, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "Password updated successfully".to_string(),
    })))
}
