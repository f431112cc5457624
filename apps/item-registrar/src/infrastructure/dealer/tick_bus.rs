//! Tick event bus.
//!
//! Handler table behind the dealer's tick stream. Every attachment gets its
//! own `SubscriptionId`, so attaching the same handler twice yields two
//! independent entries that are detached independently.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::application::ports::{TickEventHandler, TickHandlerRegistry, TickSubscription};
use crate::domain::market_data::TickEvent;
use crate::domain::shared::SubscriptionId;

/// Fan-out of tick events to attached handlers.
#[derive(Default)]
pub struct TickEventBus {
    handlers: RwLock<HashMap<SubscriptionId, Arc<dyn TickEventHandler>>>,
}

impl TickEventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Attach a handler and return its subscription.
    pub fn attach(self: &Arc<Self>, handler: Arc<dyn TickEventHandler>) -> TickSubscription {
        let id = SubscriptionId::generate();
        self.handlers.write().insert(id.clone(), handler);
        tracing::debug!(subscription = %id, "Tick handler attached");
        let registry: Weak<Self> = Arc::downgrade(self);
        TickSubscription::new(id, registry)
    }

    /// Deliver a tick to every attached handler.
    ///
    /// Returns the number of handlers invoked. Handlers run outside the
    /// table lock and may unsubscribe from within `on_tick`.
    pub fn dispatch(&self, tick: &TickEvent) -> usize {
        let handlers: Vec<Arc<dyn TickEventHandler>> =
            self.handlers.read().values().cloned().collect();

        for handler in &handlers {
            handler.on_tick(tick);
        }

        handlers.len()
    }

    /// Number of attached handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl TickHandlerRegistry for TickEventBus {
    fn detach(&self, id: &SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(id).is_some();
        if removed {
            tracing::debug!(subscription = %id, "Tick handler detached");
        }
        removed
    }
}
