//! Session Bounded Context
//!
//! The authenticated user context. Its lifecycle belongs to the session
//! manager; use cases only look it up.

use serde::{Deserialize, Serialize};

use crate::domain::shared::AccountId;

/// The currently logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Dealer account of the user.
    pub account: AccountId,
}

impl User {
    /// Create a user for the given account.
    #[must_use]
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: AccountId::new(account),
        }
    }
}
