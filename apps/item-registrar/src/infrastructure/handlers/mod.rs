//! Tick Event Handlers
//!
//! Implementations of `TickEventHandler` used by the binary.

use tokio::sync::broadcast;

use crate::application::ports::TickEventHandler;
use crate::domain::market_data::TickEvent;

/// Channel capacity for tick updates.
pub const TICK_CHANNEL_CAPACITY: usize = 1024;

/// Forwards ticks into a broadcast channel.
///
/// Slow receivers lag and drop ticks instead of blocking the dealer's
/// dispatch path.
#[derive(Debug, Clone)]
pub struct BroadcastTickHandler {
    tick_tx: broadcast::Sender<TickEvent>,
}

impl BroadcastTickHandler {
    /// Create a handler with its own channel.
    #[must_use]
    pub fn new() -> Self {
        let (tick_tx, _) = broadcast::channel(TICK_CHANNEL_CAPACITY);
        Self { tick_tx }
    }

    /// Get a receiver for tick updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TickEvent> {
        self.tick_tx.subscribe()
    }
}

impl Default for BroadcastTickHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickEventHandler for BroadcastTickHandler {
    fn on_tick(&self, tick: &TickEvent) {
        // No receivers is fine; ticks are simply dropped.
        let _ = self.tick_tx.send(tick.clone());
    }
}

/// Logs every tick at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTickHandler;

impl TickEventHandler for LoggingTickHandler {
    fn on_tick(&self, tick: &TickEvent) {
        tracing::debug!(
            item_code = %tick.item_code,
            price = %tick.price,
            volume = tick.volume,
            timestamp = %tick.timestamp,
            "Tick"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::ItemCode;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn broadcast_handler_forwards_ticks() {
        let handler = BroadcastTickHandler::new();
        let mut rx = handler.subscribe();
        let tick = TickEvent::new(ItemCode::new("TXFJ4"), Decimal::new(22_950, 0), 4);

        handler.on_tick(&tick);

        assert_eq!(rx.recv().await.unwrap(), tick);
    }

    #[test]
    fn broadcast_handler_without_receivers() {
        let handler = BroadcastTickHandler::new();
        let tick = TickEvent::new(ItemCode::new("TXFJ4"), Decimal::new(22_950, 0), 4);

        handler.on_tick(&tick);
        LoggingTickHandler.on_tick(&tick);
    }
}
