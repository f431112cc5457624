//! Unregister Item Use Case

use std::sync::Arc;

use crate::application::dto::{RegisterItemResultDto, UnregisterItemRequestDto};
use crate::application::error::RegisterItemError;
use crate::application::ports::{
    DealerClientPort, LoggerPort, RegisterItemPresenter, SessionManagerPort,
};

/// Use case for stopping tick delivery for an item.
///
/// Tick handlers stay attached; they simply stop receiving ticks for the
/// unregistered instrument.
pub struct UnregisterItemUseCase<S, D, P, L>
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
}

impl<S, D, P, L> UnregisterItemUseCase<S, D, P, L>
where
    S: SessionManagerPort,
    D: DealerClientPort,
    P: RegisterItemPresenter,
    L: LoggerPort,
{
    /// Create a new `UnregisterItemUseCase`.
    pub const fn new(
        session_manager: Arc<S>,
        dealer: Arc<D>,
        presenter: Arc<P>,
        logger: Arc<L>,
    ) -> Self {
        Self {
            session_manager,
            dealer,
            presenter,
            logger,
        }
    }

    /// Execute the use case.
    pub async fn execute(
        &self,
        request: UnregisterItemRequestDto,
    ) -> Result<P::Output, RegisterItemError> {
        request.validate()?;
        let account = request.account_id();
        let item_code = request.item_code();

        if self.session_manager.current_user().await.is_none() {
            let error = RegisterItemError::authentication(account.as_str());
            self.logger.log_info(&error.to_string());
            return Err(error);
        }

        self.dealer.unregister_instrument(&item_code).await?;

        let output = self
            .presenter
            .present(RegisterItemResultDto::unregistered(&account, &item_code));
        self.logger.log_info(&format!(
            "Account {account} unregister item {item_code} successfully"
        ));

        Ok(output)
    }
}
