//! Session Manager Port (Driven Port)

use async_trait::async_trait;

use crate::domain::session::User;

/// Port for looking up the authenticated user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionManagerPort: Send + Sync {
    /// Get the currently logged-in user, if any.
    async fn current_user(&self) -> Option<User>;
}
