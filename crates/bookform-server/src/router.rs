//! Router assembly for the submission API.
//!
//! [`build_router`] wires the submission handlers to their route with
//! CORS and tracing middleware layers.
//!
//! CORS is permissive (the form may be served from a different origin).
//! TraceLayer provides request-level logging via tracing.

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/submit",
            post(handlers::submit::submit).get(handlers::submit::list),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
