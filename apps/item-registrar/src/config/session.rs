//! Session and startup registration configuration.

use serde::{Deserialize, Serialize};

/// Account logged in at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Dealer account.
    #[serde(default = "default_account")]
    pub account: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            account: default_account(),
        }
    }
}

/// Item registered at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Instrument code.
    #[serde(default = "default_item_code")]
    pub item_code: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            item_code: default_item_code(),
        }
    }
}

fn default_account() -> String {
    "A1".to_string()
}

fn default_item_code() -> String {
    "TXFJ4".to_string()
}
