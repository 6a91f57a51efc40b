//! Core account lifecycle logic

pub mod lifecycle;
pub mod models;
