//! The [`SubmissionStore`] trait defining the storage contract.
//!
//! All backends are append-only and order-preserving: submissions are
//! never mutated or deleted within the store's lifetime. Implementations
//! synchronize internally, so handlers share a store through `Arc<dyn
//! SubmissionStore>` without extra locking.

use crate::error::StoreError;
use crate::types::Submission;

/// The storage contract for accepted submissions.
pub trait SubmissionStore: Send + Sync {
    /// Appends an accepted submission. Atomic with respect to concurrent
    /// appends; arrival order is preserved.
    fn append(&self, submission: Submission) -> Result<(), StoreError>;

    /// Returns a snapshot of all stored submissions, oldest first.
    /// Read-only and safe under concurrent reads.
    fn list(&self) -> Result<Vec<Submission>, StoreError>;

    /// Number of stored submissions.
    fn len(&self) -> Result<usize, StoreError>;
}
