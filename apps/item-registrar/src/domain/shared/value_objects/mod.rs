//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod item_code;
mod timestamp;

pub use identifiers::{AccountId, SubscriptionId};
pub use item_code::ItemCode;
pub use timestamp::Timestamp;
