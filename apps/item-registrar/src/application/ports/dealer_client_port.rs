//! Dealer Client Port (Driven Port)
//!
//! Interface to the broker's quote subsystem: instrument discovery,
//! instrument registration, and the tick event stream.

use std::sync::Arc;

use async_trait::async_trait;

use super::tick_subscription::{TickEventHandler, TickSubscription};
use crate::domain::market_data::Instrument;
use crate::domain::shared::ItemCode;

/// Dealer client error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DealerError {
    /// Connection error.
    #[error("Dealer connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// The dealer does not list the instrument.
    #[error("Unknown instrument: {item_code}")]
    UnknownInstrument {
        /// The rejected code.
        item_code: String,
    },

    /// The instrument is not registered for data delivery.
    #[error("Instrument not registered: {item_code}")]
    NotRegistered {
        /// The code that was not registered.
        item_code: String,
    },

    /// Tick handler could not be attached.
    #[error("Tick subscription error: {message}")]
    SubscriptionError {
        /// Error details.
        message: String,
    },

    /// API error reported by the dealer.
    #[error("Dealer API error: {message}")]
    ApiError {
        /// Error details.
        message: String,
    },
}

/// Port for the dealer's quote subsystem.
///
/// Thread-safety of concurrent calls is the implementation's concern; the
/// use cases hold no dealer state of their own.
#[async_trait]
pub trait DealerClientPort: Send + Sync {
    /// Fetch the full instrument catalog. Never cached by callers.
    async fn fetch_instrument_catalog(&self) -> Result<Vec<Instrument>, DealerError>;

    /// Register an instrument for data delivery.
    async fn register_instrument(&self, code: &ItemCode) -> Result<(), DealerError>;

    /// Stop data delivery for an instrument.
    async fn unregister_instrument(&self, code: &ItemCode) -> Result<(), DealerError>;

    /// Attach a handler to the tick event stream.
    ///
    /// The handler receives ticks for every registered instrument until the
    /// returned subscription is unsubscribed.
    async fn subscribe_ticks(
        &self,
        handler: Arc<dyn TickEventHandler>,
    ) -> Result<TickSubscription, DealerError>;
}
