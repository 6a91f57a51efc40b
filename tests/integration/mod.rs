//! Integration test suites

pub mod database_tests;
pub mod reset_tests;
