//! Account endpoints
//!
//! This module provides the public account lifecycle API.

mod confirm;
mod login;
mod models;
mod password;
mod register;

pub use confirm::{confirm_email, resend_confirmation};
pub use login::login;
pub use models::{
    ConfirmQuery, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, ResendConfirmationRequest, ResetPasswordRequest,
};
pub use password::{forgot_password, reset_password};
pub use register::register;

use actix_web::web;

/// Configure account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/confirm", web::get().to(confirm_email))
            .route("/resend-confirmation", web::post().to(resend_confirmation))
            .route("/login", web::post().to(login))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/reset-password", web::post().to(reset_password)),
    );
}
