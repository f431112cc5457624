//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod register_item;
mod unregister_item;

pub use register_item::RegisterItemUseCase;
pub use unregister_item::UnregisterItemUseCase;
