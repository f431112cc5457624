//! Dealer Adapters
//!
//! Implementations of `DealerClientPort`.

mod simulated;
mod tick_bus;

pub use simulated::{DEFAULT_BASE_PRICE, SimulatedDealerClient};
pub use tick_bus::TickEventBus;
