//! Core error types for bookform-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Note that
//! validation failures are not errors -- they are data, carried in an
//! [`ErrorMap`](crate::field::ErrorMap).

use thiserror::Error;

use crate::field::FieldId;

/// Core errors produced by the bookform-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A [`FieldValue`](crate::field::FieldValue) of the wrong kind was
    /// assigned to a field.
    #[error("field '{field}' cannot hold a {kind} value")]
    FieldKindMismatch { field: FieldId, kind: &'static str },
}
