//! Error handling for the account service
//!
//! This module defines all error types used throughout the service.

mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, ServiceError};
