//! Outbound email configuration

use super::default_smtp_port;
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// SMTP and link-building configuration.
///
/// When `enabled` is false the service logs the links it would have mailed
/// instead of connecting to an SMTP server; useful for development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Enable real SMTP delivery
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay hostname
    #[serde(default)]
    pub smtp_host: String,
    /// SMTP relay port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username
    #[serde(default)]
    pub username: String,
    /// SMTP password
    #[serde(default)]
    pub password: String,
    /// From address on outbound mail
    #[serde(default)]
    pub from: String,
    /// Base URL used when building confirmation and reset links
    #[serde(default = "default_base_url")]
    pub public_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from: String::new(),
            public_base_url: default_base_url(),
        }
    }
}

impl EmailConfig {
    /// Validate email configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if self.smtp_host.is_empty() {
                return Err(ServiceError::Config(
                    "SMTP host is required when email is enabled".to_string(),
                ));
            }
            if self.from.is_empty() {
                return Err(ServiceError::Config(
                    "From address is required when email is enabled".to_string(),
                ));
            }
        }
        if self.public_base_url.is_empty() {
            return Err(ServiceError::Config(
                "public_base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
