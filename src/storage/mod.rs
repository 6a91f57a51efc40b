//! Storage layer
//!
//! All durable state lives here: the account store and the reset-token
//! store, both behind one SeaORM-backed `Database`.

pub mod database;

pub use database::Database;
