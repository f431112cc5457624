//! Tick event pushed by the dealer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{ItemCode, Timestamp};

/// A real-time trade update for a registered instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    /// Instrument the trade happened on.
    pub item_code: ItemCode,
    /// Trade price.
    pub price: Decimal,
    /// Trade volume (contracts).
    pub volume: u64,
    /// Exchange time of the trade.
    pub timestamp: Timestamp,
}

impl TickEvent {
    /// Create a tick stamped with the current time.
    #[must_use]
    pub fn new(item_code: ItemCode, price: Decimal, volume: u64) -> Self {
        Self {
            item_code,
            price,
            volume,
            timestamp: Timestamp::now(),
        }
    }
}
