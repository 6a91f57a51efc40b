//! Login endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, web};

use super::models::{LoginRequest, LoginResponse};

/// Login endpoint
///
/// `401 Unauthorized` for unknown email, wrong password, or an
/// unconfirmed account; the engine keeps the three indistinguishable.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let account = state
        .engine
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse::from(account))))
}
