//! JSON presenter.

use serde_json::{Value, json};

use crate::application::dto::RegisterItemResultDto;
use crate::application::ports::RegisterItemPresenter;

/// Renders registration results as JSON objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRegisterItemPresenter;

impl RegisterItemPresenter for JsonRegisterItemPresenter {
    type Output = Value;

    fn present(&self, result: RegisterItemResultDto) -> Self::Output {
        let (action, verb) = if result.is_registered {
            ("register_item", "registered")
        } else {
            ("unregister_item", "unregistered")
        };

        json!({
            "action": action,
            "account": result.account,
            "item_code": result.item_code,
            "is_registered": result.is_registered,
            "message": format!("Account {} {} item {}", result.account, verb, result.item_code),
        })
    }
}
