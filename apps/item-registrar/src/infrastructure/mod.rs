//! Infrastructure Layer
//!
//! This module contains the adapters (implementations) for the ports
//! defined in the application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `dealer/`: Simulated dealer quote subsystem and its tick bus
//!   - `session/`: In-memory session manager
//!   - `presenter/`: JSON presenter
//!   - `logging/`: Tracing-backed logger
//!   - `handlers/`: Tick event handlers
//!
//! - **Wiring**
//!   - `config/`: Dependency injection container

pub mod config;
pub mod dealer;
pub mod handlers;
pub mod logging;
pub mod presenter;
pub mod session;
