//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the global store, and the API client.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::ConfigV1;
use crate::store::Store;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler. The store and the
/// API client are injected here at startup; nothing in the crate
/// reaches for an ambient singleton.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Global store holding loading and session state.
    pub store: Arc<dyn Store>,
    /// Pre-configured HTTP client for the upstream REST API.
    pub api: Arc<ApiClient>,
}
