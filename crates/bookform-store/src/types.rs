//! Stored submission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// An accepted booking submission.
///
/// Immutable after creation: the accepted payload fields plus a generated
/// identifier and creation timestamp. Serializes flat -- `id` and
/// `createdAt` sit alongside the payload's own keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Generated identifier.
    pub id: Uuid,
    /// Creation time, RFC 3339 on the wire.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// The accepted payload, passed through untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Submission {
    /// Stamps a validated payload with a fresh id and the current time.
    pub fn new(fields: Map<String, Value>) -> Self {
        Submission {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            fields,
        }
    }
}
