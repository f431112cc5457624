//! Register Item Use Case
//!
//! Registers a dealer instrument for tick delivery and attaches the
//! configured tick handler to the dealer's tick stream.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::dto::{RegisterItemRequestDto, RegisterItemResultDto};
use crate::application::error::RegisterItemError;
use crate::application::ports::{
    DealerClientPort, LoggerPort, RegisterItemPresenter, SessionManagerPort, TickEventHandler,
    TickSubscription,
};
use crate::domain::market_data::contains_code;
use crate::domain::shared::SubscriptionId;

/// Use case for registering an item for tick updates.
///
/// Every successful call re-registers the instrument and re-attaches the
/// tick handler. The subscription from the previous attachment is released
/// at that point, so at most one handler attachment is alive per use case.
pub struct RegisterItemUseCase<S, D, P, L>
where
    S: SessionManagerPort,
    D: DealerClientPort,
    P: RegisterItemPresenter,
    L: LoggerPort,
{
    session_manager: Arc<S>,
    dealer: Arc<D>,
    presenter: Arc<P>,
    logger: Arc<L>,
    tick_handler: Arc<dyn TickEventHandler>,
    subscription: Mutex<Option<TickSubscription>>,
}

impl<S, D, P, L> RegisterItemUseCase<S, D, P, L>
where
    S: SessionManagerPort,
    D: DealerClientPort,
    P: RegisterItemPresenter,
    L: LoggerPort,
{
    /// Create a new `RegisterItemUseCase`.
    pub fn new(
        session_manager: Arc<S>,
        dealer: Arc<D>,
        presenter: Arc<P>,
        logger: Arc<L>,
        tick_handler: Arc<dyn TickEventHandler>,
    ) -> Self {
        Self {
            session_manager,
            dealer,
            presenter,
            logger,
            tick_handler,
            subscription: Mutex::new(None),
        }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// - `Validation` if the request is malformed (nothing else is touched)
    /// - `Authentication` if no user is logged in
    /// - `NotFound` if the dealer catalog does not list the item code
    /// - `Dealer` if any dealer call fails
    pub async fn execute(
        &self,
        request: RegisterItemRequestDto,
    ) -> Result<P::Output, RegisterItemError> {
        // 1. Validate before touching any collaborator
        request.validate()?;
        let account = request.account_id();
        let item_code = request.item_code();

        // 2. Require an active session
        let Some(user) = self.session_manager.current_user().await else {
            let error = RegisterItemError::authentication(account.as_str());
            self.logger.log_info(&error.to_string());
            return Err(error);
        };
        tracing::debug!(account = %account, session = %user.account, "Session resolved");

        // 3. Catalog is fetched fresh; the dealer may list new contracts at any time
        let catalog = self.dealer.fetch_instrument_catalog().await?;
        if !contains_code(&catalog, &item_code) {
            let error = RegisterItemError::not_found(item_code.as_str());
            self.logger.log_info(&error.to_string());
            return Err(error);
        }

        // 4. Register the instrument and attach the tick handler
        self.dealer.register_instrument(&item_code).await?;
        let subscription = self
            .dealer
            .subscribe_ticks(Arc::clone(&self.tick_handler))
            .await?;
        self.replace_subscription(subscription);

        // 5. Present
        let output = self
            .presenter
            .present(RegisterItemResultDto::registered(&account, &item_code));
        self.logger.log_info(&format!(
            "Account {account} register item {item_code} successfully"
        ));

        Ok(output)
    }

    /// ID of the live tick subscription, if any.
    pub fn active_subscription(&self) -> Option<SubscriptionId> {
        self.subscription
            .lock()
            .as_ref()
            .map(|subscription| subscription.id().clone())
    }

    /// Detach the tick handler.
    ///
    /// Returns `true` if a live subscription was released.
    pub fn release_subscription(&self) -> bool {
        let released = self.subscription.lock().take();
        released.is_some_and(|subscription| subscription.unsubscribe())
    }

    fn replace_subscription(&self, subscription: TickSubscription) {
        let previous = self.subscription.lock().replace(subscription);
        if let Some(previous) = previous {
            if previous.unsubscribe() {
                tracing::debug!(subscription = %previous.id(), "Released previous tick subscription");
            }
        }
    }
}
