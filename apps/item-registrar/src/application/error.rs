//! Application Errors
//!
//! Error types returned by the registration use cases.

use thiserror::Error;

use super::ports::DealerError;
use crate::domain::shared::DomainError;

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl From<DomainError> for FieldError {
    fn from(err: DomainError) -> Self {
        let DomainError::InvalidValue { field, message } = err;
        Self { field, message }
    }
}

/// Request failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a validation error from the violated rules.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// The violated rules, in field order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

fn summarize(errors: &[FieldError]) -> String {
    let details: Vec<String> = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect();
    format!("validation failed: {}", details.join("; "))
}

/// Errors returned by the register and unregister item use cases.
#[derive(Debug, Clone, Error)]
pub enum RegisterItemError {
    /// Malformed request; raised before any collaborator is touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Login failed: no active session.
    #[error("Account {account} not login")]
    Authentication {
        /// Account from the request.
        account: String,
    },

    /// Item code absent from the dealer catalog.
    #[error("{item_code} is not found")]
    NotFound {
        /// The requested code.
        item_code: String,
    },

    /// Dealer client failure, passed through unchanged.
    #[error(transparent)]
    Dealer(#[from] DealerError),
}

impl RegisterItemError {
    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(account: impl Into<String>) -> Self {
        Self::Authentication {
            account: account.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(item_code: impl Into<String>) -> Self {
        Self::NotFound {
            item_code: item_code.into(),
        }
    }

    /// Check if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
