//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with external systems
//! - **Use Cases**: Application-specific business rules
//! - **DTOs**: Data transfer objects for use case boundaries
//! - **Errors**: The error taxonomy callers receive

pub mod dto;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use error::*;
pub use ports::*;
pub use use_cases::*;
