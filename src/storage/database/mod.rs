//! Database storage implementation using SeaORM

mod account_ops;
mod connection;
/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
mod reset_token_ops;
mod types;

pub use types::{Database, DatabaseBackendType};
