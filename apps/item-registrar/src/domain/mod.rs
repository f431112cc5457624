//! Domain Layer
//!
//! The innermost layer, free of infrastructure concerns.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Entities**: The authenticated user and dealer instruments
//! - **Events**: Tick updates pushed by the dealer
//!
//! # Bounded Contexts
//!
//! - [`market_data`]: Instruments and tick events
//! - [`session`]: The authenticated user context

pub mod market_data;
pub mod session;
pub mod shared;
