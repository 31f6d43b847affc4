//! Binary entrypoint for the bookform submission server.
//!
//! Reads configuration from environment variables:
//! - `BOOKFORM_PORT`: server listen port (default: "3000")
//! - `BOOKFORM_DELAY_MS`: artificial delay before successful submission
//!   responses, in milliseconds (default: "500"; "0" disables)

use std::sync::Arc;
use std::time::Duration;

use bookform_server::router::build_router;
use bookform_server::state::AppState;
use bookform_store::InMemoryStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("BOOKFORM_PORT").unwrap_or_else(|_| "3000".to_string());
    let delay_ms = std::env::var("BOOKFORM_DELAY_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(500);

    let store = Arc::new(InMemoryStore::new());
    let state = AppState::with_response_delay(store, Duration::from_millis(delay_ms));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("bookform server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
