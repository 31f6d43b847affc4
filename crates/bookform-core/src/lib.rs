//! Core data model for the bookform booking form.
//!
//! Pure data, no I/O: field identifiers and values, the [`FormState`]
//! record that every consumer of the form reads from, bounded occupancy
//! counters, the staged form definition, and locale/label lookup. The
//! reducer that mutates [`FormState`] lives in `bookform-client`; the
//! validation rules live in `bookform-validate`.

pub mod counter;
pub mod error;
pub mod field;
pub mod input;
pub mod locale;
pub mod state;

// Re-export commonly used types
pub use counter::OccupancyCounter;
pub use error::CoreError;
pub use field::{ErrorMap, FieldId, FieldValue};
pub use locale::Locale;
pub use state::{DateRange, FormState, SubmitPayload};
