//! Email confirmation endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, web};

use super::models::{ConfirmQuery, MessageResponse, ResendConfirmationRequest};

/// Confirmation endpoint, reached from the mailed link.
///
/// The token arrives verbatim as a query parameter; success activates
/// the account, anything else is `InvalidToken`.
pub async fn confirm_email(
    state: web::Data<AppState>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse, ServiceError> {
    state.engine.confirm_email(&query.token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "Account confirmed successfully".to_string(),
    })))
}

/// Confirmation resend endpoint.
///
/// `404 Not Found` when there is no unconfirmed account with this email;
/// here absence is safe to disclose, unlike the reset flow.
pub async fn resend_confirmation(
    state: web::Data<AppState>,
    request: web::Json<ResendConfirmationRequest>,
) -> Result<HttpResponse, ServiceError> {
    // The fresh token is handed to the mail channel, not the caller.
    let _token = state.engine.resend_confirmation(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "Confirmation email sent".to_string(),
    })))
}
