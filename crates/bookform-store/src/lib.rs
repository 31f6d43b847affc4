//! Submission storage for the booking endpoint.
//!
//! [`SubmissionStore`] is the storage contract; [`InMemoryStore`] is the
//! process-lifetime backend the endpoint runs on (explicitly not durable
//! -- everything is lost on restart). Stores are constructed explicitly
//! and injected into the server state, so tests can instantiate isolated
//! instances instead of sharing a process-global list.

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use traits::SubmissionStore;
pub use types::Submission;
