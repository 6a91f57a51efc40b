//! HTTP route handlers outside the account surface

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.database.health_check().await {
        Ok(()) => "healthy",
        Err(_) => "unhealthy",
    };

    HttpResponse::Ok().json(json!({
        "status": database,
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "build": env!("GIT_HASH"),
    }))
}
