//! Client error types.

use thiserror::Error;

/// Errors produced by the bookform-client crate.
///
/// Submission outcomes are not errors -- they land in the form state's
/// error map. This type covers construction and plumbing failures only.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request never completed (connect failure, timeout, ...).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with an unexpected status.
    #[error("unexpected response status {status}")]
    UnexpectedStatus { status: u16 },
}
