//! Session Adapters
//!
//! Implementations of `SessionManagerPort`.

mod in_memory;

pub use in_memory::InMemorySessionManager;
