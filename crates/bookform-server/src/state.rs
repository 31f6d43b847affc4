//! Shared application state with an injected submission store.
//!
//! The store is constructed explicitly and passed in rather than living
//! as a module-level global, so tests instantiate isolated stores and the
//! binary decides the backend. `Arc<dyn SubmissionStore>` keeps the
//! handlers backend-agnostic; the store synchronizes internally, so no
//! additional locking is layered on top.

use std::sync::Arc;
use std::time::Duration;

use bookform_store::{InMemoryStore, SubmissionStore};

/// Artificial latency applied before a successful submission response,
/// simulating a realistic booking backend.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Shared state for the submission endpoint.
#[derive(Clone)]
pub struct AppState {
    /// The injected submission store.
    pub store: Arc<dyn SubmissionStore>,
    /// Delay before responding to an accepted submission.
    pub response_delay: Duration,
}

impl AppState {
    /// Wraps an injected store with the default response delay.
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        AppState {
            store,
            response_delay: DEFAULT_RESPONSE_DELAY,
        }
    }

    /// Wraps an injected store with a custom response delay.
    pub fn with_response_delay(store: Arc<dyn SubmissionStore>, response_delay: Duration) -> Self {
        AppState {
            store,
            response_delay,
        }
    }

    /// A fresh in-memory store with no response delay (for testing).
    pub fn in_memory() -> Self {
        AppState {
            store: Arc::new(InMemoryStore::new()),
            response_delay: Duration::ZERO,
        }
    }
}
