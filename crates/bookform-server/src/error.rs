//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] implements `axum::response::IntoResponse` so handlers can
//! return `Result<_, ApiError>` and get the wire format for free. Field
//! validation failures carry their error map onto the wire; everything
//! else is logged server-side and collapsed into a generic body that
//! leaks no internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use bookform_core::ErrorMap;
use bookform_store::StoreError;

/// API errors for the submission endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The payload failed field validation (400).
    #[error("validation failed: {} field(s)", .0.len())]
    Validation(ErrorMap),

    /// The request body was not parseable JSON (500).
    #[error("malformed request body: {0}")]
    Malformed(String),

    /// The submission store failed (500).
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "errors": errors })),
            )
                .into_response(),
            ApiError::Malformed(detail) => {
                tracing::error!(detail = %detail, "rejecting malformed submission body");
                generic_failure()
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "submission store failure");
                generic_failure()
            }
        }
    }
}

fn generic_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "errors": { "form": "The submission could not be processed" }
        })),
    )
        .into_response()
}
