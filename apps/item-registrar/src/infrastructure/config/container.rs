//! Dependency Injection Container
//!
//! Manages creation and wiring of the registration use cases.

use std::sync::Arc;

use crate::application::ports::{
    DealerClientPort, LoggerPort, RegisterItemPresenter, SessionManagerPort, TickEventHandler,
};
use crate::application::use_cases::{RegisterItemUseCase, UnregisterItemUseCase};

/// Dependency injection container.
///
/// Holds the wired ports. Every use case built from the same container
/// shares the same session manager and dealer. The registrar is built once
/// and shared, so its tick handler is attached at most once per container.
pub struct Container<S, D, P, L>
where
    S: SessionManagerPort + 'static,
    D: DealerClientPort + 'static,
    P: RegisterItemPresenter + 'static,
    L: LoggerPort + 'static,
{
    // Ports
    session_manager: Arc<S>,
    dealer: Arc<D>,
    presenter: Arc<P>,
    logger: Arc<L>,
    register_item: Arc<RegisterItemUseCase<S, D, P, L>>,
}

impl<S, D, P, L> Container<S, D, P, L>
where
    S: SessionManagerPort + 'static,
    D: DealerClientPort + 'static,
    P: RegisterItemPresenter + 'static,
    L: LoggerPort + 'static,
{
    /// Create a new container with all dependencies.
    pub fn new(
        session_manager: Arc<S>,
        dealer: Arc<D>,
        presenter: Arc<P>,
        logger: Arc<L>,
        tick_handler: Arc<dyn TickEventHandler>,
    ) -> Self {
        let register_item = Arc::new(RegisterItemUseCase::new(
            Arc::clone(&session_manager),
            Arc::clone(&dealer),
            Arc::clone(&presenter),
            Arc::clone(&logger),
            tick_handler,
        ));

        Self {
            session_manager,
            dealer,
            presenter,
            logger,
            register_item,
        }
    }

    /// Get the session manager.
    pub fn session_manager(&self) -> Arc<S> {
        Arc::clone(&self.session_manager)
    }

    /// Get the dealer client.
    pub fn dealer(&self) -> Arc<D> {
        Arc::clone(&self.dealer)
    }

    /// Get the shared `RegisterItemUseCase`.
    pub fn register_item_use_case(&self) -> Arc<RegisterItemUseCase<S, D, P, L>> {
        Arc::clone(&self.register_item)
    }

    /// Create an `UnregisterItemUseCase`.
    pub fn unregister_item_use_case(&self) -> UnregisterItemUseCase<S, D, P, L> {
        UnregisterItemUseCase::new(
            Arc::clone(&self.session_manager),
            Arc::clone(&self.dealer),
            Arc::clone(&self.presenter),
            Arc::clone(&self.logger),
        )
    }
}
