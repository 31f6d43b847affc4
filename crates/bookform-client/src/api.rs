//! HTTP calls to the submission endpoint.

use serde::Deserialize;

use bookform_core::{ErrorMap, SubmitPayload};

use crate::error::ClientError;

/// Route of the submission endpoint, relative to the service base URL.
pub const SUBMIT_PATH: &str = "/api/submit";

/// Error body shape returned by the endpoint on rejection.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Option<ErrorMap>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a submission POST that completed at the HTTP layer.
#[derive(Debug)]
pub(crate) enum PostOutcome {
    /// 2xx: the submission was stored.
    Accepted,
    /// Non-2xx: rejected, with whatever detail the body carried.
    Rejected {
        errors: Option<ErrorMap>,
        message: Option<String>,
    },
}

/// Posts a submission payload. `Err` means the request never completed.
pub(crate) async fn post_submission(
    http: &reqwest::Client,
    endpoint: &str,
    payload: &SubmitPayload,
) -> Result<PostOutcome, ClientError> {
    let url = format!("{}{}", endpoint.trim_end_matches('/'), SUBMIT_PATH);
    let response = http.post(&url).json(payload).send().await?;

    if response.status().is_success() {
        return Ok(PostOutcome::Accepted);
    }

    // A rejection body that fails to parse still counts as a rejection.
    let body: ErrorBody = response.json().await.unwrap_or_default();
    Ok(PostOutcome::Rejected {
        errors: body.errors,
        message: body.message,
    })
}

#[derive(Debug, Default, Deserialize)]
struct ListBody {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

/// Fetches all stored submissions from the endpoint.
pub async fn fetch_submissions(endpoint: &str) -> Result<Vec<serde_json::Value>, ClientError> {
    let url = format!("{}{}", endpoint.trim_end_matches('/'), SUBMIT_PATH);
    let response = reqwest::Client::new().get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }

    let body: ListBody = response.json().await?;
    Ok(body.data)
}
