//! Pure state-transition function for the booking form.
//!
//! The submission lifecycle forms a small state machine:
//! `Idle -> {Idle (errors present), Submitting} -> {Submitted (terminal),
//! Idle (errors present, resubmittable)}`. The reducer is total and
//! side-effect free; the network call that moves the machine between
//! `Submitting` and its successors lives in the controller.

use bookform_core::FormState;

use crate::action::FormAction;

/// Applies one action to the state, returning the next state.
///
/// `UpdateField` clears the edited field's error entry even before any
/// re-validation; a kind-mismatched value changes nothing at all.
/// `SubmitSuccess` clears every error and leaves `is_submitting` false,
/// keeping the lifecycle flags mutually exclusive.
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();
    match action {
        FormAction::UpdateField { field, value } => {
            if next.set(field, value).is_ok() {
                next.errors.shift_remove(field.as_str());
            }
        }
        FormAction::SetErrors(errors) => next.errors = errors,
        FormAction::StartSubmit => next.is_submitting = true,
        FormAction::SubmitSuccess => {
            next.is_submitting = false;
            next.is_submitted = true;
            next.errors.clear();
        }
        FormAction::SubmitError(errors) => {
            next.is_submitting = false;
            next.errors = errors;
        }
        FormAction::Reset => next = FormState::default(),
    }
    next
}

#[cfg(test)]
mod tests {
    use bookform_core::{ErrorMap, FieldId, FieldValue};

    use super::*;

    fn errors_with(field: &str, message: &str) -> ErrorMap {
        let mut errors = ErrorMap::new();
        errors.insert(field.into(), message.into());
        errors
    }

    #[test]
    fn update_field_writes_and_clears_the_error() {
        let mut state = FormState::new();
        state.errors = errors_with("email", "This field is required");

        let next = reduce(
            &state,
            FormAction::UpdateField {
                field: FieldId::Email,
                value: FieldValue::text("john@example.com"),
            },
        );

        assert_eq!(next.email, "john@example.com");
        assert!(!next.errors.contains_key("email"));
    }

    #[test]
    fn update_field_clears_the_error_regardless_of_validity() {
        let state_with_error = reduce(
            &FormState::new(),
            FormAction::SetErrors(errors_with("email", "Please enter a valid email address")),
        );

        // Still invalid content, but the edit alone clears the entry.
        let next = reduce(
            &state_with_error,
            FormAction::UpdateField {
                field: FieldId::Email,
                value: FieldValue::text("still-bad"),
            },
        );
        assert!(next.errors.is_empty());
    }

    #[test]
    fn kind_mismatch_changes_nothing() {
        let mut state = FormState::new();
        state.errors = errors_with("email", "This field is required");

        let next = reduce(
            &state,
            FormAction::UpdateField {
                field: FieldId::Email,
                value: FieldValue::Count(5),
            },
        );

        // No edit happened, so the error entry stays too.
        assert_eq!(next, state);
    }

    #[test]
    fn set_errors_replaces_the_map() {
        let mut state = FormState::new();
        state.errors = errors_with("email", "old");

        let next = reduce(&state, FormAction::SetErrors(errors_with("firstName", "new")));
        assert_eq!(next.errors.len(), 1);
        assert!(next.errors.contains_key("firstName"));
    }

    #[test]
    fn start_submit_sets_the_gate() {
        let next = reduce(&FormState::new(), FormAction::StartSubmit);
        assert!(next.is_submitting);
        assert!(!next.is_submitted);
    }

    #[test]
    fn submit_success_is_terminal_and_exclusive() {
        let submitting = reduce(&FormState::new(), FormAction::StartSubmit);
        let next = reduce(&submitting, FormAction::SubmitSuccess);

        assert!(next.is_submitted);
        assert!(!next.is_submitting);
        assert!(next.errors.is_empty());
    }

    #[test]
    fn submit_error_returns_to_editable_with_errors() {
        let submitting = reduce(&FormState::new(), FormAction::StartSubmit);
        let next = reduce(&submitting, FormAction::SubmitError(errors_with("form", "boom")));

        assert!(!next.is_submitting);
        assert!(!next.is_submitted);
        assert_eq!(next.errors.get("form").map(String::as_str), Some("boom"));
    }

    #[test]
    fn reset_restores_the_defaults() {
        let mut state = FormState::new();
        state.set(FieldId::FirstName, FieldValue::text("John")).unwrap();
        state.errors = errors_with("email", "This field is required");
        state.is_submitted = true;

        let next = reduce(&state, FormAction::Reset);
        assert_eq!(next, FormState::default());
    }
}
