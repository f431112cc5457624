//! Item code value object for dealer instruments.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum length of a dealer item code.
pub const MAX_ITEM_CODE_LEN: usize = 20;

/// A dealer instrument code (commodity ID).
///
/// Examples:
/// - Futures: "TXFJ4", "MXFJ4"
///
/// Codes are kept exactly as the dealer reports them; catalog membership
/// is a case-sensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

impl ItemCode {
    /// Create a new ItemCode.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the code before it is sent to the dealer.
    ///
    /// # Errors
    ///
    /// Returns error if the code is blank, too long, or contains characters
    /// other than ASCII letters and digits.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.trim().is_empty() {
            return Err(DomainError::invalid_value(
                "item_code",
                "Item code cannot be empty",
            ));
        }

        if self.0.len() > MAX_ITEM_CODE_LEN {
            return Err(DomainError::invalid_value(
                "item_code",
                "Item code exceeds maximum length",
            ));
        }

        if !self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::invalid_value(
                "item_code",
                "Item code contains invalid characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
