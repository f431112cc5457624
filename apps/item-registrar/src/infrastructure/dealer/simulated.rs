//! Simulated Dealer Client
//!
//! In-process stand-in for the broker's quote subsystem. It lists a
//! configurable catalog, tracks registered instruments, and can run a
//! random-walk tick feed for them.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use rand::Rng;
use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::tick_bus::TickEventBus;
use crate::application::ports::{
    DealerClientPort, DealerError, TickEventHandler, TickSubscription,
};
use crate::domain::market_data::{Instrument, TickEvent, contains_code};
use crate::domain::shared::ItemCode;

/// Opening price for instruments without a previous tick.
pub const DEFAULT_BASE_PRICE: Decimal = Decimal::from_parts(20_000, 0, 0, false, 0);

/// Largest price move per simulated tick, in whole points.
const MAX_STEP_POINTS: i64 = 5;

/// Simulated dealer client.
pub struct SimulatedDealerClient {
    catalog: RwLock<Vec<Instrument>>,
    registered: RwLock<HashSet<ItemCode>>,
    bus: Arc<TickEventBus>,
    last_prices: Mutex<HashMap<ItemCode, Decimal>>,
    fetch_calls: AtomicUsize,
    register_calls: AtomicUsize,
    fail_next_register: AtomicBool,
}

impl SimulatedDealerClient {
    /// Create a dealer listing `catalog`.
    #[must_use]
    pub fn new(catalog: Vec<Instrument>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            registered: RwLock::new(HashSet::new()),
            bus: TickEventBus::new(),
            last_prices: Mutex::new(HashMap::new()),
            fetch_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            fail_next_register: AtomicBool::new(false),
        }
    }

    /// Create a dealer whose catalog lists the given codes, named after themselves.
    #[must_use]
    pub fn with_codes<I, C>(codes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ItemCode>,
    {
        let catalog = codes
            .into_iter()
            .map(|code| {
                let code = code.into();
                let name = code.to_string();
                Instrument::new(code, name)
            })
            .collect();
        Self::new(catalog)
    }

    /// Replace the catalog, as the dealer does when contracts roll.
    pub fn set_catalog(&self, catalog: Vec<Instrument>) {
        *self.catalog.write() = catalog;
    }

    /// Make the next `register_instrument` call fail with a connection error.
    pub fn fail_next_register(&self) {
        self.fail_next_register.store(true, Ordering::SeqCst);
    }

    /// Check if an instrument is registered for data delivery.
    #[must_use]
    pub fn is_registered(&self, code: &ItemCode) -> bool {
        self.registered.read().contains(code)
    }

    /// Registered instruments, sorted by code.
    #[must_use]
    pub fn registered_codes(&self) -> Vec<ItemCode> {
        let mut codes: Vec<ItemCode> = self.registered.read().iter().cloned().collect();
        codes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        codes
    }

    /// Number of catalog fetches served.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of registration requests received.
    #[must_use]
    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    /// Number of attached tick handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.bus.handler_count()
    }

    /// Push a tick to the attached handlers.
    ///
    /// Ticks for instruments that are not registered are dropped. Returns
    /// the number of handlers that received the tick.
    pub fn publish_tick(&self, tick: &TickEvent) -> usize {
        if !self.is_registered(&tick.item_code) {
            tracing::trace!(item_code = %tick.item_code, "Dropping tick for unregistered item");
            return 0;
        }
        self.last_prices
            .lock()
            .insert(tick.item_code.clone(), tick.price);
        self.bus.dispatch(tick)
    }

    /// Run a random-walk tick feed for all registered instruments.
    ///
    /// The task emits one tick per registered instrument every `interval`
    /// until `shutdown` is cancelled.
    pub fn start_feed(
        self: &Arc<Self>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> JoinHandle<()> {
        let dealer = Arc::clone(self);
        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);

        tokio::spawn(async move {
            tracing::info!(interval_ms, "Simulated tick feed started");
            loop {
                tokio::select! {
                    () = tokio::time::sleep(interval) => {
                        for code in dealer.registered_codes() {
                            let tick = dealer.next_tick(code);
                            dealer.publish_tick(&tick);
                        }
                    }
                    () = shutdown.cancelled() => {
                        tracing::info!("Simulated tick feed stopped");
                        break;
                    }
                }
            }
        })
    }

    fn next_tick(&self, code: ItemCode) -> TickEvent {
        let mut rng = rand::rng();
        let step = Decimal::from(rng.random_range(-MAX_STEP_POINTS..=MAX_STEP_POINTS));
        let volume = rng.random_range(1..=10);

        let last = self
            .last_prices
            .lock()
            .get(&code)
            .copied()
            .unwrap_or(DEFAULT_BASE_PRICE);
        let price = (last + step).max(Decimal::ONE);

        TickEvent::new(code, price, volume)
    }
}

#[async_trait]
impl DealerClientPort for SimulatedDealerClient {
    async fn fetch_instrument_catalog(&self) -> Result<Vec<Instrument>, DealerError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.read().clone())
    }

    async fn register_instrument(&self, code: &ItemCode) -> Result<(), DealerError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_register.swap(false, Ordering::SeqCst) {
            return Err(DealerError::ConnectionError {
                message: "quote server unreachable".to_string(),
            });
        }

        if !contains_code(&self.catalog.read(), code) {
            return Err(DealerError::UnknownInstrument {
                item_code: code.to_string(),
            });
        }

        if self.registered.write().insert(code.clone()) {
            tracing::info!(item_code = %code, "Instrument registered");
        } else {
            tracing::debug!(item_code = %code, "Instrument already registered");
        }
        Ok(())
    }

    async fn unregister_instrument(&self, code: &ItemCode) -> Result<(), DealerError> {
        if !self.registered.write().remove(code) {
            return Err(DealerError::NotRegistered {
                item_code: code.to_string(),
            });
        }
        self.last_prices.lock().remove(code);
        tracing::info!(item_code = %code, "Instrument unregistered");
        Ok(())
    }

    async fn subscribe_ticks(
        &self,
        handler: Arc<dyn TickEventHandler>,
    ) -> Result<TickSubscription, DealerError> {
        Ok(self.bus.attach(handler))
    }
}
