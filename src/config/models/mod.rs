//! Configuration models

mod accounts;
mod email;
mod server;
mod storage;

pub use accounts::AccountsConfig;
pub use email::EmailConfig;
pub use server::{CorsConfig, ServerConfig};
pub use storage::{DatabaseConfig, StorageConfig};

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_max_connections() -> u32 {
    10
}

pub(crate) fn default_connection_timeout() -> u64 {
    10
}

pub(crate) fn default_reset_token_ttl() -> u64 {
    3600
}

pub(crate) fn default_smtp_port() -> u16 {
    587
}

pub(crate) fn default_true() -> bool {
    true
}
