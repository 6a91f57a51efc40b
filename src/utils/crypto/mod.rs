//! Token generation and password hashing

pub mod password;
pub mod token;
