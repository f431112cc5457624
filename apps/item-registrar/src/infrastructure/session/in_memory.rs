//! In-memory session manager.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::SessionManagerPort;
use crate::domain::session::User;

/// Session manager holding at most one logged-in user.
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Default)]
pub struct InMemorySessionManager {
    current: RwLock<Option<User>>,
}

impl InMemorySessionManager {
    /// Create a session manager with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in `account`, replacing any previous session.
    pub fn login(&self, account: impl Into<String>) -> User {
        let user = User::new(account);
        tracing::info!(account = %user.account, "Logged in");
        *self.current.write() = Some(user.clone());
        user
    }

    /// End the current session.
    ///
    /// Returns the user that was logged in, if any.
    pub fn logout(&self) -> Option<User> {
        let user = self.current.write().take();
        if let Some(user) = &user {
            tracing::info!(account = %user.account, "Logged out");
        }
        user
    }
}

#[async_trait]
impl SessionManagerPort for InMemorySessionManager {
    async fn current_user(&self) -> Option<User> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_user_before_login() {
        let sessions = InMemorySessionManager::new();
        assert!(sessions.current_user().await.is_none());
    }

    #[tokio::test]
    async fn login_then_logout() {
        let sessions = InMemorySessionManager::new();

        sessions.login("A1");
        assert_eq!(sessions.current_user().await, Some(User::new("A1")));

        assert_eq!(sessions.logout(), Some(User::new("A1")));
        assert!(sessions.current_user().await.is_none());
        assert!(sessions.logout().is_none());
    }

    #[tokio::test]
    async fn login_replaces_session() {
        let sessions = InMemorySessionManager::new();
        sessions.login("A1");
        sessions.login("B2");

        assert_eq!(sessions.current_user().await, Some(User::new("B2")));
    }
}
