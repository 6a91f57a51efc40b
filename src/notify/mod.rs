//! Outbound notification side channel
//!
//! The lifecycle engine talks to a [`Mailer`] and nothing else: "send this
//! link to this address". Delivery is fire-and-forget; the request that
//! triggered a send completes without waiting for it, and a delivery
//! failure is logged, never propagated.

mod smtp;

pub use smtp::SmtpMailer;

use crate::config::EmailConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Narrow interface to the mail side channel
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Send a registration confirmation link
    async fn send_confirmation(&self, to: &str, link: &str) -> Result<()>;

    /// Send a password reset link
    async fn send_password_reset(&self, to: &str, link: &str) -> Result<()>;
}

/// Build the mailer described by the configuration.
///
/// With email disabled the service still works end to end; links are
/// logged instead of delivered.
pub fn mailer_from_config(config: &EmailConfig) -> Result<Arc<dyn Mailer>> {
    if config.enabled {
        Ok(Arc::new(SmtpMailer::new(config)?))
    } else {
        info!("Email delivery disabled; links will be logged only");
        Ok(Arc::new(LogMailer))
    }
}

/// Dispatch a send without blocking the caller.
///
/// The future is handed to the runtime and forgotten; the triggering
/// operation has already committed its state change and must respond
/// regardless of what happens here.
pub fn spawn_send<F>(kind: &'static str, to: String, send: F)
where
    F: std::future::Future<Output = Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = send.await {
            warn!("Failed to send {} email to {}: {}", kind, to, e);
        }
    });
}

/// Mailer that logs instead of delivering
pub struct LogMailer;

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send_confirmation(&self, to: &str, link: &str) -> Result<()> {
        info!("confirmation link for {}: {}", to, link);
        Ok(())
    }

    async fn send_password_reset(&self, to: &str, link: &str) -> Result<()> {
        info!("password reset link for {}: {}", to, link);
        Ok(())
    }
}
