//! Application Ports (Driven)
//!
//! Ports define how the use cases reach collaborators they do not own:
//! the session manager, the dealer client, the presenter, and the logger.
//! Infrastructure provides the implementations.

mod dealer_client_port;
mod logger_port;
mod presenter_port;
mod session_manager_port;
mod tick_subscription;

pub use dealer_client_port::{DealerClientPort, DealerError};
pub use logger_port::{LoggerPort, NoOpLogger};
pub use presenter_port::RegisterItemPresenter;
pub use session_manager_port::SessionManagerPort;
#[cfg(test)]
pub use session_manager_port::MockSessionManagerPort;
pub use tick_subscription::{TickEventHandler, TickHandlerRegistry, TickSubscription};
