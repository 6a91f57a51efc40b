//! Account lifecycle settings

use super::default_reset_token_ttl;
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Settings for the account lifecycle engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Lifetime of a password-reset token, in seconds
    #[serde(default = "default_reset_token_ttl")]
    pub reset_token_ttl_secs: u64,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            reset_token_ttl_secs: default_reset_token_ttl(),
        }
    }
}

impl AccountsConfig {
    /// Validate account settings
    pub fn validate(&self) -> Result<()> {
        if self.reset_token_ttl_secs == 0 {
            return Err(ServiceError::Config(
                "reset_token_ttl_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
