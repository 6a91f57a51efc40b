//! # Regate
//!
//! A small user-account service: registration, email confirmation, login,
//! and password reset, backed by a relational store with an outbound SMTP
//! side channel.
//!
//! The correctness-sensitive part is the account lifecycle state machine in
//! [`core::lifecycle`]: accounts are created inactive with a single-use
//! confirmation token, activate exactly once, and gate login on activation;
//! password resets are time-boxed, account-scoped tokens consumed on first
//! use. Everything else (HTTP routing, SMTP delivery, configuration,
//! database bootstrapping) is plumbing around that engine.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use regate::config::Config;
//! use regate::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/regate.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod notify;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export the types most callers need
pub use config::Config;
pub use core::lifecycle::LifecycleEngine;
pub use utils::error::{Result, ServiceError};
