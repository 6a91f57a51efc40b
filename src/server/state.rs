//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::lifecycle::LifecycleEngine;
use crate::storage::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Account lifecycle engine
    pub engine: Arc<LifecycleEngine>,
    /// Database handle, for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, engine: Arc<LifecycleEngine>, database: Arc<Database>) -> Self {
        Self {
            config: Arc::new(config),
            engine,
            database,
        }
    }
}
