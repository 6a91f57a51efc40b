//! HTTP server core implementation

use crate::config::Config;
use crate::core::lifecycle::LifecycleEngine;
use crate::notify;
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::Database;
use crate::utils::error::{Result, ServiceError};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    config: Arc<Config>,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server: connect storage, run migrations, build
    /// the mailer and the lifecycle engine, and assemble shared state.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let database = Arc::new(Database::new(&config.storage.database).await?);
        database.migrate().await?;

        let mailer = notify::mailer_from_config(&config.email)?;
        let engine = Arc::new(LifecycleEngine::new(config, Arc::clone(&database), mailer));

        // Hourly sweep of expired reset tokens; redemption does not
        // depend on it.
        let _cleanup = engine.start_cleanup_task(Duration::from_secs(3600));

        let state = AppState::new(config.clone(), engine, database);

        Ok(Self {
            config: Arc::new(config.clone()),
            state,
        })
    }

    /// Shared application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Start the server and block until shutdown
    pub async fn start(self) -> Result<()> {
        let server_config = self.config.server.clone();
        let cors_config = self.config.server.cors.clone();
        let state = web::Data::new(self.state);

        info!(
            "Server starting at: http://{}:{}",
            server_config.host, server_config.port
        );

        let mut server = ActixHttpServer::new(move || {
            let cors = if cors_config.enabled {
                if cors_config.allows_all_origins() {
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header()
                } else {
                    let mut cors = Cors::default().allow_any_method().allow_any_header();
                    for origin in &cors_config.allowed_origins {
                        cors = cors.allowed_origin(origin);
                    }
                    cors
                }
            } else {
                Cors::default()
            };

            App::new()
                .app_data(state.clone())
                .wrap(Logger::default())
                .wrap(cors)
                .route("/health", web::get().to(health_check))
                .configure(routes::auth::configure_routes)
        });

        if let Some(workers) = server_config.workers {
            server = server.workers(workers);
        }

        server
            .bind((server_config.host.as_str(), server_config.port))
            .map_err(|e| {
                warn!("Failed to bind server: {}", e);
                ServiceError::Io(e)
            })?
            .run()
            .await
            .map_err(ServiceError::Io)
    }
}
