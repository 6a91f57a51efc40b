//! Database wrapper types

use sea_orm::DatabaseConnection;

/// SeaORM-backed database holding accounts and reset tokens
#[derive(Debug, Clone)]
pub struct Database {
    pub(super) db: DatabaseConnection,
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    /// PostgreSQL backend
    PostgreSQL,
    /// SQLite backend
    SQLite,
}
