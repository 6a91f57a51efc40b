//! Configuration management for the account service
//!
//! Configuration is an explicitly constructed struct handed to each
//! component at startup; there is no ambient global state.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the account service
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Outbound email configuration
    #[serde(default)]
    pub email: EmailConfig,
    /// Account lifecycle settings
    #[serde(default)]
    pub accounts: AccountsConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables, over defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment variables onto this configuration
    pub fn apply_env(&mut self) -> Result<()> {
        use std::env;

        if let Ok(host) = env::var("REGATE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("REGATE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("REGATE_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| ServiceError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Ok(db_url) = env::var("DATABASE_URL") {
            self.storage.database.url = db_url;
        }
        if let Ok(max_conn) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections = max_conn
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid max connections: {}", e)))?;
        }
        if let Ok(host) = env::var("SMTP_HOST") {
            self.email.smtp_host = host;
            self.email.enabled = true;
        }
        if let Ok(port) = env::var("SMTP_PORT") {
            self.email.smtp_port = port
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid SMTP port: {}", e)))?;
        }
        if let Ok(user) = env::var("SMTP_USER") {
            self.email.username = user;
        }
        if let Ok(password) = env::var("SMTP_PASSWORD") {
            self.email.password = password;
        }
        if let Ok(from) = env::var("SMTP_FROM") {
            self.email.from = from;
        }
        if let Ok(base_url) = env::var("PUBLIC_BASE_URL") {
            self.email.public_base_url = base_url;
        }
        Ok(())
    }

    /// Validate the configuration before use
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.email.validate()?;
        self.accounts.validate()?;
        Ok(())
    }
}
