//! Domain models

mod account;

pub use account::{Account, AccountStatus};
