//! Actions accepted by the form reducer.

use bookform_core::{ErrorMap, FieldId, FieldValue};

/// A state transition command for the booking form.
///
/// Dispatched by [`FormController`](crate::controller::FormController);
/// the reducer is the only code that applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Write one field and clear its error entry.
    UpdateField { field: FieldId, value: FieldValue },
    /// Replace the error map (failed client-side validation).
    SetErrors(ErrorMap),
    /// Enter the submitting state.
    StartSubmit,
    /// Submission accepted: terminal success.
    SubmitSuccess,
    /// Submission rejected or transport failed: back to editable.
    SubmitError(ErrorMap),
    /// Discard everything and return to the defaults.
    Reset,
}
