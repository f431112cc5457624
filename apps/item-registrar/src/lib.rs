// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Item Registrar - Rust Core Library
//!
//! Registers dealer instruments for real-time tick delivery on behalf of a
//! logged-in account.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Value objects and entities
//!   - `shared`: `AccountId`, `ItemCode`, `Timestamp`, `DomainError`
//!   - `session`: The logged-in `User`
//!   - `market_data`: `Instrument`, `TickEvent`
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Session manager, dealer client, presenter, logger, tick handlers
//!   - `use_cases`: `RegisterItem`, `UnregisterItem`
//!   - `dto`: Request validation and result DTOs
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `dealer`: Simulated dealer with a tick event bus
//!   - `session`: In-memory session manager
//!   - `presenter`: JSON presenter
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business types with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

// =============================================================================
// Runtime Support
// =============================================================================

/// YAML configuration loading.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::dto::{RegisterItemRequestDto, RegisterItemResultDto, UnregisterItemRequestDto};
pub use application::error::{FieldError, RegisterItemError, ValidationError};
pub use application::ports::{
    DealerClientPort, DealerError, LoggerPort, RegisterItemPresenter, SessionManagerPort,
    TickEventHandler, TickSubscription,
};
pub use application::use_cases::{RegisterItemUseCase, UnregisterItemUseCase};
pub use domain::market_data::{Instrument, TickEvent};
pub use domain::session::User;
pub use domain::shared::{AccountId, DomainError, ItemCode, SubscriptionId};
