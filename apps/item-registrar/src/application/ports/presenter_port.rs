//! Presenter Port (Driven Port)
//!
//! Formatting of use case results is owned by the presenter; the use case
//! hands over the result and returns whatever the presenter produces.

use crate::application::dto::RegisterItemResultDto;

/// Port for presenting registration results.
pub trait RegisterItemPresenter: Send + Sync {
    /// Presenter output handed back to the caller.
    type Output: Send;

    /// Present a registration result, taking ownership of it.
    fn present(&self, result: RegisterItemResultDto) -> Self::Output;
}
