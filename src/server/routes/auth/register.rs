//! Registration endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, web};

use super::models::{RegisterRequest, RegisterResponse};

/// Registration endpoint
///
/// `201 Created` with the new account id; `409 Conflict` when the email
/// is already registered. The confirmation link goes out by mail and is
/// not part of the response.
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ServiceError> {
    let account = state
        .engine
        .register(&request.username, &request.email, &request.password)
        .await?;

    let response = RegisterResponse {
        account_id: account.id,
        username: account.username,
        email: account.email,
        message: "Confirmation email sent".to_string(),
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}
