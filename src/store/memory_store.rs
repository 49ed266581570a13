use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Store;
use crate::models::{Loading, Session, User};

/// The in-process store backend. Holds the loading and session state
/// behind a single lock so each mutation is atomic.
pub struct MemoryStore {
    inner: RwLock<State>,
}

#[derive(Default)]
struct State {
    loading: Loading,
    session: Session,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: RwLock::new(State::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn loading(&self) -> Loading {
        self.inner.read().await.loading.clone()
    }

    async fn session(&self) -> Session {
        self.inner.read().await.session.clone()
    }

    async fn set_loading(&self, active: bool, text: Option<String>) {
        let mut state = self.inner.write().await;
        state.loading.active = active;
        if let Some(text) = text {
            state.loading.text = text;
        }
    }

    async fn set_token(&self, token: Option<String>) {
        self.inner.write().await.session.token = token;
    }

    async fn set_user(&self, user: Option<User>) {
        self.inner.write().await.session.user = user;
    }

    async fn logout(&self) {
        let mut state = self.inner.write().await;
        state.session.token = None;
        state.session.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loading::DEFAULT_LOADING_TEXT;

    /// Test that a fresh store reports the default loading state.
    #[tokio::test]
    async fn test_defaults() {
        let store = MemoryStore::new();
        let loading = store.loading().await;
        assert!(!loading.active);
        assert_eq!(loading.text, DEFAULT_LOADING_TEXT);

        let session = store.session().await;
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }

    /// Test that set_loading with a text stores both flag and text.
    #[tokio::test]
    async fn test_set_loading_with_text() {
        let store = MemoryStore::new();
        store.set_loading(true, Some("Fetching users".to_string())).await;

        let loading = store.loading().await;
        assert!(loading.active);
        assert_eq!(loading.text, "Fetching users");
    }

    /// Test that set_loading without a text preserves the previous text.
    #[tokio::test]
    async fn test_set_loading_preserves_text() {
        let store = MemoryStore::new();
        store.set_loading(true, Some("Saving".to_string())).await;
        store.set_loading(false, None).await;

        let loading = store.loading().await;
        assert!(!loading.active);
        assert_eq!(loading.text, "Saving");
    }

    /// Test that logout clears token and user regardless of prior state.
    #[tokio::test]
    async fn test_logout_clears_session() {
        let store = MemoryStore::new();
        store.set_token(Some("abc123".to_string())).await;
        store
            .set_user(Some(User::new(1, "adam", "adam@example.com")))
            .await;

        store.logout().await;

        let session = store.session().await;
        assert!(session.token.is_none());
        assert!(session.user.is_none());

        // Logging out of an already-empty session stays empty.
        store.logout().await;
        assert_eq!(store.session().await, Session::default());
    }

    /// Test that token and user mutations are last-write-wins.
    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.set_token(Some("first".to_string())).await;
        store.set_token(Some("second".to_string())).await;
        assert_eq!(store.session().await.token.as_deref(), Some("second"));

        store.set_user(Some(User::new(1, "adam", "adam@example.com"))).await;
        store.set_user(None).await;
        assert!(store.session().await.user.is_none());
    }
}
