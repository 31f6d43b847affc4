//! Submission request/response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use bookform_store::Submission;

/// Incoming submission payload.
///
/// Only the three required fields are modeled; every other key is
/// captured untouched and passed through into the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl SubmitRequest {
    /// Reassembles the full payload map: pass-through keys plus the
    /// required fields that were present.
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = self.rest;
        if let Some(first_name) = self.first_name {
            fields.insert("firstName".into(), Value::String(first_name));
        }
        if let Some(last_name) = self.last_name {
            fields.insert("lastName".into(), Value::String(last_name));
        }
        if let Some(email) = self.email {
            fields.insert("email".into(), Value::String(email));
        }
        fields
    }
}

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Always `true`.
    pub success: bool,
    /// The stored record.
    pub data: Submission,
}

/// Response for listing stored submissions.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    /// Always `true`.
    pub success: bool,
    /// All stored submissions, oldest first.
    pub data: Vec<Submission>,
}
