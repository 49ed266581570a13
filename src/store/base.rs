use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::memory_store::MemoryStore;
use crate::client::TokenSource;
use crate::config::{StoreBackend, StoreConfig};
use crate::models::{Loading, Session, User};

/// The Store trait abstracts the global application state: the loading
/// indicator and the authenticated session. It is injected by reference
/// into whatever needs it; there is no ambient singleton.
///
/// All mutations are last-write-wins and atomic from the caller's
/// perspective.
#[async_trait]
pub trait Store: Send + Sync {
    /// Current loading indicator state.
    async fn loading(&self) -> Loading;
    /// Current session state.
    async fn session(&self) -> Session;
    /// Toggle the loading flag. A `None` text preserves the previously
    /// set text.
    async fn set_loading(&self, active: bool, text: Option<String>);
    /// Replace the session token.
    async fn set_token(&self, token: Option<String>);
    /// Replace the session user.
    async fn set_user(&self, user: Option<User>);
    /// Clear token and user, regardless of prior state.
    async fn logout(&self);
}

/// Creates a concrete store implementation based on the StoreConfig.
pub fn create_store(config: &StoreConfig) -> Arc<dyn Store> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store.");
            Arc::new(MemoryStore::new())
        }
    }
}

/// We also implement the client::TokenSource trait for `Arc<dyn Store>`,
/// so the session token can sign outbound requests where an embedder
/// wires the store in as the source.
#[async_trait]
impl TokenSource for Arc<dyn Store> {
    async fn token(&self) -> Option<String> {
        let token = self.session().await.token;
        if token.is_none() {
            debug!("No session token in store; request will be unsigned.");
        }
        token
    }
}
