//! Page handlers for the application shell.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;
use crate::views;

/// Registers the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(layout))
        .route("/details", get(details))
}

/// Root path: renders the layout view, wiring the store's loading state
/// into it.
async fn layout(State(state): State<AppState>) -> Html<String> {
    let loading = state.store.loading().await;
    Html(views::layout::render(&loading))
}

/// Details path: a placeholder heading.
async fn details() -> Html<&'static str> {
    Html("<h1>Details</h1>")
}
