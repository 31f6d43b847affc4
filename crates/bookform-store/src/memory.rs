//! In-memory implementation of [`SubmissionStore`].
//!
//! The production backend: a `Vec` behind an `RwLock`, giving atomic
//! ordered appends and concurrent snapshot reads. Process-lifetime only.

use std::sync::RwLock;

use crate::error::StoreError;
use crate::traits::SubmissionStore;
use crate::types::Submission;

/// Append-only in-memory submission list.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl SubmissionStore for InMemoryStore {
    fn append(&self, submission: Submission) -> Result<(), StoreError> {
        let mut submissions = self.submissions.write().map_err(|_| StoreError::Poisoned)?;
        submissions.push(submission);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let submissions = self.submissions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(submissions.clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let submissions = self.submissions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(submissions.len())
    }
}
