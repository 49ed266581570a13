//! HTTP route definitions and handlers.
//!
//! This module organizes the endpoints into logical groups: the page
//! routes of the application shell and health checks. Unmatched paths
//! fall through to an explicit 404 handler.

mod health_routes;
mod page_routes;

use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router and attaches
/// the application state for access in handlers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes::routes())
        .merge(health_routes::routes())
        .fallback(not_found)
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Explicit handler for unmatched paths: the route table resolves a
/// request to exactly one registered view or to this 404.
async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!("No route registered for '{}'", uri.path());
    let body = ErrorResponse {
        error: format!("No route for {}", uri.path()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
