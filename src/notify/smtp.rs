//! SMTP delivery via lettre

use crate::config::EmailConfig;
use crate::utils::error::{Result, ServiceError};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::Mailer;

/// Mailer delivering through an SMTP relay with STARTTLS
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Build a mailer from email configuration
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| ServiceError::Email(format!("Failed to create SMTP transport: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<()> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| ServiceError::Email(format!("Invalid from address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| ServiceError::Email(format!("Invalid to address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| ServiceError::Email(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| ServiceError::Email(format!("Failed to send email: {}", e)))?;

        debug!("Email sent to {}", to);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send_confirmation(&self, to: &str, link: &str) -> Result<()> {
        let body = format!(
            "Welcome!\n\n\
            Please confirm your registration by visiting the link below:\n\n\
            {}\n\n\
            If you did not create this account, you can ignore this email.\n",
            link
        );
        self.send(to, "Confirm your registration", body).await
    }

    async fn send_password_reset(&self, to: &str, link: &str) -> Result<()> {
        let body = format!(
            "Hello,\n\n\
            A password reset was requested for your account.\n\n\
            To choose a new password, visit the link below within the next hour:\n\n\
            {}\n\n\
            If you did not request this reset, you can ignore this email.\n",
            link
        );
        self.send(to, "Password reset request", body).await
    }
}
