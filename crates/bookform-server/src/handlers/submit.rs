//! Submission endpoint handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use bookform_store::Submission;
use bookform_validate::validate_submission;

use crate::error::ApiError;
use crate::schema::submit::{ListResponse, SubmitRequest, SubmitResponse};
use crate::state::AppState;

/// Accepts a booking submission.
///
/// `POST /api/submit`
///
/// An empty body is treated as an empty payload and fails validation like
/// any other incomplete submission; a body that is present but not valid
/// JSON is a server error. Accepted submissions are appended to the store
/// and echoed back with their generated id and timestamp.
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: SubmitRequest = if body.is_empty() {
        SubmitRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|err| ApiError::Malformed(err.to_string()))?
    };

    let errors = validate_submission(
        request.first_name.as_deref(),
        request.last_name.as_deref(),
        request.email.as_deref(),
    );
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let submission = Submission::new(request.into_fields());
    state.store.append(submission.clone())?;
    tracing::info!(id = %submission.id, "submission accepted");

    // Simulated backend latency; callers must not assume instant responses.
    if !state.response_delay.is_zero() {
        tokio::time::sleep(state.response_delay).await;
    }

    Ok((
        StatusCode::CREATED,
        [(header::CACHE_CONTROL, "no-store")],
        Json(SubmitResponse {
            success: true,
            data: submission,
        }),
    ))
}

/// Returns all stored submissions, oldest first.
///
/// `GET /api/submit`
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let submissions = state.store.list()?;

    Ok((
        StatusCode::OK,
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Json(ListResponse {
            success: true,
            data: submissions,
        }),
    ))
}
