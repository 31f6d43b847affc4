//! The form state controller.
//!
//! Wraps the pure reducer with the one suspending effect: the submission
//! POST. Everything a rendered form needs goes through this type --
//! field updates, validation, submission, reset -- and every outcome is
//! readable from [`state`](FormController::state) afterwards.

use std::time::Duration;

use bookform_core::{ErrorMap, FieldId, FieldValue, FormState, Locale};
use bookform_validate::{messages, validate_form};

use crate::action::FormAction;
use crate::api::{self, PostOutcome};
use crate::error::ClientError;
use crate::reducer::reduce;

/// Bound on the submission request. The endpoint applies artificial
/// latency, so the bound is generous; expiry surfaces as an ordinary
/// transport failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Drives one booking form session against a submission endpoint.
pub struct FormController {
    state: FormState,
    locale: Locale,
    endpoint: String,
    http: reqwest::Client,
}

impl FormController {
    /// Creates a controller for `endpoint` with the default request
    /// timeout.
    pub fn new(endpoint: impl Into<String>, locale: Locale) -> Result<Self, ClientError> {
        Self::with_timeout(endpoint, locale, DEFAULT_TIMEOUT)
    }

    /// Creates a controller with a custom request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        locale: Locale,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(FormController {
            state: FormState::new(),
            locale,
            endpoint: endpoint.into(),
            http,
        })
    }

    /// The current form state. The sole source of truth for consumers.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The session locale used for validation messages.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn dispatch(&mut self, action: FormAction) {
        self.state = reduce(&self.state, action);
    }

    /// Writes one field and clears its error entry. A kind-mismatched
    /// value is ignored.
    pub fn update_field(&mut self, field: FieldId, value: FieldValue) {
        self.dispatch(FormAction::UpdateField { field, value });
    }

    /// Validates the current state without mutating it.
    pub fn validate(&self) -> ErrorMap {
        validate_form(&self.state, self.locale)
    }

    /// Runs the submission lifecycle.
    ///
    /// No-ops while a submission is in flight. Validates first and stores
    /// the errors without any network call if the form is invalid.
    /// Otherwise POSTs the full field set and folds the outcome back into
    /// the state: acceptance marks the session submitted; rejection and
    /// transport failure return it to an editable state with errors
    /// surfaced. No automatic retry.
    pub async fn submit(&mut self) {
        if self.state.is_submitting {
            return;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.dispatch(FormAction::SetErrors(errors));
            return;
        }

        self.dispatch(FormAction::StartSubmit);
        let payload = self.state.payload();
        let locale = self.locale;

        match api::post_submission(&self.http, &self.endpoint, &payload).await {
            Ok(PostOutcome::Accepted) => self.dispatch(FormAction::SubmitSuccess),
            Ok(PostOutcome::Rejected { errors, message }) => {
                let errors = match errors.filter(|map| !map.is_empty()) {
                    Some(map) => map,
                    None => {
                        let message =
                            message.unwrap_or_else(|| messages::submission_failed(locale).into());
                        form_error(message)
                    }
                };
                self.dispatch(FormAction::SubmitError(errors));
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission transport failure");
                self.dispatch(FormAction::SubmitError(form_error(
                    messages::transport_failure(locale),
                )));
            }
        }
    }

    /// Discards the session and returns to the defaults.
    pub fn reset(&mut self) {
        self.dispatch(FormAction::Reset);
    }
}

/// A single generic form-level error map.
fn form_error(message: impl Into<String>) -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.insert("form".into(), message.into());
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FormController {
        // Unroutable endpoint: tests here never complete a request.
        FormController::new("http://127.0.0.1:9", Locale::En).unwrap()
    }

    #[test]
    fn update_field_flows_into_state() {
        let mut form = controller();
        form.update_field(FieldId::FirstName, FieldValue::text("John"));
        assert_eq!(form.state().first_name, "John");
    }

    #[tokio::test]
    async fn invalid_submit_stores_errors_without_a_network_call() {
        let mut form = controller();
        form.update_field(FieldId::LastName, FieldValue::text("Doe"));
        form.update_field(FieldId::Email, FieldValue::text("bad"));

        // The endpoint is unreachable; reaching the network would surface
        // a form-level transport error instead of field errors.
        form.submit().await;

        let state = form.state();
        assert!(!state.is_submitting);
        assert!(!state.is_submitted);
        assert_eq!(
            state.errors.get("firstName").map(String::as_str),
            Some("This field is required")
        );
        assert_eq!(
            state.errors.get("email").map(String::as_str),
            Some("Please enter a valid email address")
        );
        assert!(!state.errors.contains_key("form"));
    }

    #[tokio::test]
    async fn submit_is_gated_while_in_flight() {
        let mut form = controller();
        form.state = reduce(&form.state, FormAction::StartSubmit);

        form.submit().await;

        // Still submitting, and no error was recorded: the call no-oped.
        assert!(form.state().is_submitting);
        assert!(form.state().errors.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_a_generic_form_error() {
        let mut form = controller();
        form.update_field(FieldId::FirstName, FieldValue::text("John"));
        form.update_field(FieldId::LastName, FieldValue::text("Doe"));
        form.update_field(FieldId::Email, FieldValue::text("john@example.com"));
        form.update_field(FieldId::TravelPurpose, FieldValue::text("personal"));

        form.submit().await;

        let state = form.state();
        assert!(!state.is_submitting);
        assert!(!state.is_submitted);
        assert_eq!(
            state.errors.get("form").map(String::as_str),
            Some("An unexpected error occurred. Please try again.")
        );
    }

    #[test]
    fn reset_clears_a_dirty_session() {
        let mut form = controller();
        form.update_field(FieldId::Notes, FieldValue::text("late arrival"));
        form.reset();
        assert_eq!(form.state(), &FormState::default());
    }
}
