//! Market Data Bounded Context
//!
//! Instruments offered by the dealer and the tick events it pushes for
//! registered instruments.

mod instrument;
mod tick;

pub use instrument::{Instrument, contains_code};
pub use tick::TickEvent;
