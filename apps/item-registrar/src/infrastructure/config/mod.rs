//! Configuration Infrastructure
//!
//! Dependency injection container.

mod container;

pub use container::Container;
