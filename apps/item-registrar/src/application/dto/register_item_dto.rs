//! Register Item DTOs

use serde::{Deserialize, Serialize};

use crate::application::error::{FieldError, ValidationError};
use crate::domain::shared::{AccountId, DomainError, ItemCode};

/// Maximum length of an account identifier.
pub const MAX_ACCOUNT_LEN: usize = 32;

/// Request DTO for registering an item for tick updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterItemRequestDto {
    /// Dealer account.
    pub account: String,
    /// Instrument code.
    pub item_code: String,
}

/// Unregistration carries the same fields as registration.
pub type UnregisterItemRequestDto = RegisterItemRequestDto;

impl RegisterItemRequestDto {
    /// Create a new request.
    #[must_use]
    pub fn new(account: impl Into<String>, item_code: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            item_code: item_code.into(),
        }
    }

    /// Validate the request, collecting every violated rule.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing each offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = validate_account(&self.account) {
            errors.push(FieldError::from(e));
        }

        if let Err(e) = self.item_code().validate() {
            errors.push(FieldError::from(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Account as a domain identifier.
    #[must_use]
    pub fn account_id(&self) -> AccountId {
        AccountId::new(&self.account)
    }

    /// Item code as a domain value.
    #[must_use]
    pub fn item_code(&self) -> ItemCode {
        ItemCode::new(&self.item_code)
    }
}

fn validate_account(account: &str) -> Result<(), DomainError> {
    if account.trim().is_empty() {
        return Err(DomainError::invalid_value(
            "account",
            "Account cannot be empty",
        ));
    }

    if account.chars().count() > MAX_ACCOUNT_LEN {
        return Err(DomainError::invalid_value(
            "account",
            "Account exceeds maximum length",
        ));
    }

    if account.chars().any(char::is_whitespace) {
        return Err(DomainError::invalid_value(
            "account",
            "Account cannot contain whitespace",
        ));
    }

    Ok(())
}

/// Result DTO handed to the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterItemResultDto {
    /// Dealer account.
    pub account: String,
    /// Instrument code.
    pub item_code: String,
    /// Whether the instrument is registered for tick delivery.
    pub is_registered: bool,
}

impl RegisterItemResultDto {
    /// Result of a successful registration.
    #[must_use]
    pub fn registered(account: &AccountId, item_code: &ItemCode) -> Self {
        Self {
            account: account.to_string(),
            item_code: item_code.to_string(),
            is_registered: true,
        }
    }

    /// Result of a successful unregistration.
    #[must_use]
    pub fn unregistered(account: &AccountId, item_code: &ItemCode) -> Self {
        Self {
            account: account.to_string(),
            item_code: item_code.to_string(),
            is_registered: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn valid_request_passes() {
        assert!(RegisterItemRequestDto::new("A1", "TXFJ4").validate().is_ok());
    }

    #[test_case("", "TXFJ4", &["account"] ; "empty account")]
    #[test_case("   ", "TXFJ4", &["account"] ; "blank account")]
    #[test_case("A 1", "TXFJ4", &["account"] ; "account with whitespace")]
    #[test_case("A1", "", &["item_code"] ; "empty item code")]
    #[test_case("A1", "TXF-J4", &["item_code"] ; "item code with symbol")]
    #[test_case("A1", "TXFJ4TXFJ4TXFJ4TXFJ4X", &["item_code"] ; "item code too long")]
    #[test_case("", "", &["account", "item_code"] ; "both empty")]
    fn invalid_request_reports_fields(account: &str, item_code: &str, fields: &[&str]) {
        let err = RegisterItemRequestDto::new(account, item_code)
            .validate()
            .unwrap_err();

        let reported: Vec<&str> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(reported, fields);
    }

    #[test]
    fn account_length_limit() {
        let at_limit = "A".repeat(MAX_ACCOUNT_LEN);
        let over_limit = "A".repeat(MAX_ACCOUNT_LEN + 1);

        assert!(RegisterItemRequestDto::new(at_limit, "TXFJ4").validate().is_ok());
        assert!(RegisterItemRequestDto::new(over_limit, "TXFJ4").validate().is_err());
    }

    #[test]
    fn result_dto_serializes_flat() {
        let dto = RegisterItemResultDto::registered(&AccountId::new("A1"), &ItemCode::new("TXFJ4"));
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"account": "A1", "item_code": "TXFJ4", "is_registered": true})
        );
    }
}
