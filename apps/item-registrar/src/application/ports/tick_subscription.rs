//! Tick event handlers and the subscriptions that attach them.
//!
//! Attaching a handler yields a [`TickSubscription`]. The handle is the only
//! way to detach the handler again; dropping it leaves the handler attached.

use std::sync::Weak;

use crate::domain::market_data::TickEvent;
use crate::domain::shared::SubscriptionId;

/// Receiver of tick events pushed by the dealer.
///
/// Called on the dealer's dispatch path, so implementations must not block.
pub trait TickEventHandler: Send + Sync {
    /// Handle a single tick.
    fn on_tick(&self, tick: &TickEvent);
}

impl<F> TickEventHandler for F
where
    F: Fn(&TickEvent) + Send + Sync,
{
    fn on_tick(&self, tick: &TickEvent) {
        self(tick);
    }
}

/// Handler table a subscription detaches from.
pub trait TickHandlerRegistry: Send + Sync {
    /// Remove the handler attached under `id`.
    ///
    /// Returns `false` if no such handler was attached.
    fn detach(&self, id: &SubscriptionId) -> bool;
}

/// Handle for an attached tick handler.
#[derive(Debug, Clone)]
pub struct TickSubscription {
    id: SubscriptionId,
    registry: Weak<dyn TickHandlerRegistry>,
}

impl TickSubscription {
    /// Create a handle for a handler attached to `registry` under `id`.
    #[must_use]
    pub fn new(id: SubscriptionId, registry: Weak<dyn TickHandlerRegistry>) -> Self {
        Self { id, registry }
    }

    /// Get the subscription ID.
    #[must_use]
    pub const fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Detach the handler.
    ///
    /// Idempotent: returns `true` only for the call that actually removed
    /// the handler. Returns `false` once the registry itself is gone.
    pub fn unsubscribe(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.detach(&self.id))
    }

    /// Check whether the registry the handler was attached to still exists.
    #[must_use]
    pub fn is_registry_alive(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::shared::ItemCode;

    #[derive(Default)]
    struct SetRegistry {
        attached: Mutex<HashSet<SubscriptionId>>,
    }

    impl TickHandlerRegistry for SetRegistry {
        fn detach(&self, id: &SubscriptionId) -> bool {
            self.attached.lock().remove(id)
        }
    }

    fn attach(registry: &Arc<SetRegistry>) -> TickSubscription {
        let id = SubscriptionId::generate();
        registry.attached.lock().insert(id.clone());
        let weak: Weak<SetRegistry> = Arc::downgrade(registry);
        TickSubscription::new(id, weak)
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let registry = Arc::new(SetRegistry::default());
        let subscription = attach(&registry);

        assert!(subscription.unsubscribe());
        assert!(!subscription.unsubscribe());
        assert!(registry.attached.lock().is_empty());
    }

    #[test]
    fn unsubscribe_after_registry_dropped() {
        let registry = Arc::new(SetRegistry::default());
        let subscription = attach(&registry);
        drop(registry);

        assert!(!subscription.is_registry_alive());
        assert!(!subscription.unsubscribe());
    }

    #[test]
    fn closures_are_handlers() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let handler = move |_: &TickEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        let tick = TickEvent::new(ItemCode::new("TXFJ4"), Decimal::new(22_950, 0), 2);
        handler.on_tick(&tick);
        handler.on_tick(&tick);

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
