//! Storage error types.

use thiserror::Error;

/// Errors produced by submission store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's internal lock was poisoned by a panicking writer.
    #[error("submission store lock poisoned")]
    Poisoned,
}
