//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including initialization of the global store, the API client, and route setup.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::client::{ApiClient, FileTokenSource, StaticTokenSource, TokenSource};
use crate::config::ConfigV1;
use crate::routes;
use crate::state::AppState;
use crate::store::create_store;

/// Initializes and runs the application server.
///
/// Sets up the global store, the token source, and the API client, then
/// serves the configured routes. Binds to the address specified in the
/// configuration and starts serving requests.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or the server
/// fails to bind to the specified address.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let store = create_store(&config.store);

    // The token that signs outbound requests comes from the token file,
    // not from the store's session state. The two are independent copies.
    let tokens: Arc<dyn TokenSource> = match &config.client.token_file {
        Some(path) => Arc::new(FileTokenSource::new(path.clone())),
        None => Arc::new(StaticTokenSource::none()),
    };
    let api = Arc::new(ApiClient::new(&config.client, tokens)?);

    info!("Starting server on {}", config.bind_address);

    let state = AppState {
        config: config.clone(),
        store,
        api,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
