//! Server startup with automatic configuration loading

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Default configuration file location
const CONFIG_PATH: &str = "config/regate.yaml";

/// Run the server with automatic configuration loading.
///
/// Loads `config/regate.yaml` when present, otherwise starts from
/// defaults; environment variables overlay either source.
pub async fn run_server() -> Result<()> {
    info!("Starting regate account service");

    let mut config = match Config::from_file(CONFIG_PATH).await {
        Ok(config) => {
            info!("Configuration file loaded: {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            info!("No usable configuration file ({}), using defaults", e);
            Config::default()
        }
    };

    config.apply_env()?;
    config.validate()?;

    let server = HttpServer::new(&config).await?;

    info!("Endpoints:");
    info!("   GET  /health");
    info!("   POST /auth/register");
    info!("   GET  /auth/confirm?token=...");
    info!("   POST /auth/resend-confirmation");
    info!("   POST /auth/login");
    info!("   POST /auth/forgot-password");
    info!("   POST /auth/reset-password");

    server.start().await
}
