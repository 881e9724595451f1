//! Route definitions for the tool server.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, threading `AppState` through.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(tool_routes())
        .with_state(state)
}

/// Liveness endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/_status", get(handlers::health::status))
}

/// Discovery document and tool invocation
fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/discovery", get(handlers::discovery::discovery))
        .route("/tools/{name}", post(handlers::tools::invoke))
}
