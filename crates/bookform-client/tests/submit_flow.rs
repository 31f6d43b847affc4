//! End-to-end tests for the submission lifecycle.
//!
//! Each test serves the real submission router on an ephemeral local port
//! and drives a `FormController` against it, so the whole path is
//! exercised: reducer -> validation -> reqwest -> axum -> store.

use std::sync::Arc;

use bookform_client::api::fetch_submissions;
use bookform_client::FormController;
use bookform_core::{FieldId, FieldValue, Locale};
use bookform_server::router::build_router;
use bookform_server::state::AppState;
use bookform_store::{InMemoryStore, SubmissionStore};

/// Serves a fresh router on an ephemeral port; returns the endpoint base
/// URL and the store behind it.
async fn spawn_server() -> (String, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::with_response_delay(store.clone(), std::time::Duration::ZERO);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), store)
}

fn fill_valid(form: &mut FormController) {
    form.update_field(FieldId::FirstName, FieldValue::text("John"));
    form.update_field(FieldId::LastName, FieldValue::text("Doe"));
    form.update_field(FieldId::Email, FieldValue::text("john@example.com"));
    form.update_field(FieldId::TravelPurpose, FieldValue::text("personal"));
}

#[tokio::test]
async fn valid_submission_reaches_the_store_exactly_once() {
    let (endpoint, store) = spawn_server().await;
    let mut form = FormController::new(&endpoint, Locale::En).unwrap();

    fill_valid(&mut form);
    form.update_field(FieldId::SingleOccupancy, FieldValue::Count(2));
    form.submit().await;

    let state = form.state();
    assert!(state.is_submitted);
    assert!(!state.is_submitting);
    assert!(state.errors.is_empty());

    assert_eq!(store.len().unwrap(), 1);
    let stored = &store.list().unwrap()[0];
    assert_eq!(stored.fields["firstName"], "John");
    assert_eq!(stored.fields["singleOccupancy"], 2);
}

#[tokio::test]
async fn invalid_form_never_touches_the_server() {
    let (endpoint, store) = spawn_server().await;
    let mut form = FormController::new(&endpoint, Locale::En).unwrap();

    form.update_field(FieldId::LastName, FieldValue::text("Doe"));
    form.update_field(FieldId::Email, FieldValue::text("bad"));
    form.submit().await;

    let state = form.state();
    assert!(!state.is_submitted);
    assert!(state.errors.contains_key("firstName"));
    assert!(state.errors.contains_key("email"));
    assert_eq!(store.len().unwrap(), 0);
}

#[tokio::test]
async fn stored_submissions_are_readable_through_the_list_call() {
    let (endpoint, _store) = spawn_server().await;
    let mut form = FormController::new(&endpoint, Locale::En).unwrap();

    fill_valid(&mut form);
    form.submit().await;
    assert!(form.state().is_submitted);

    let first = fetch_submissions(&endpoint).await.unwrap();
    let second = fetch_submissions(&endpoint).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0]["id"], second[0]["id"]);
    assert_eq!(first[0]["email"], "john@example.com");
}

#[tokio::test]
async fn corrected_form_can_be_resubmitted() {
    let (endpoint, store) = spawn_server().await;
    let mut form = FormController::new(&endpoint, Locale::En).unwrap();

    form.submit().await;
    assert!(!form.state().errors.is_empty());
    assert_eq!(store.len().unwrap(), 0);

    fill_valid(&mut form);
    form.submit().await;
    assert!(form.state().is_submitted);
    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn german_sessions_get_german_field_errors() {
    let (endpoint, _store) = spawn_server().await;
    let mut form = FormController::new(&endpoint, Locale::De).unwrap();

    form.submit().await;
    assert_eq!(
        form.state().errors.get("firstName").map(String::as_str),
        Some("Dieses Feld ist erforderlich")
    );
}
