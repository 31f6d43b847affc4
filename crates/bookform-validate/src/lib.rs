//! Pure validation for the booking form.
//!
//! Validation failures are data, not errors: every check returns an
//! [`ErrorMap`](bookform_core::ErrorMap) and never mutates state or
//! throws. [`form::validate_form`] implements the client-side rules with
//! localized messages; [`submission::validate_submission`] is the
//! server-side defense-in-depth subset -- the server never trusts the
//! client's checks.

pub mod form;
pub mod messages;
pub mod rules;
pub mod submission;

pub use form::validate_form;
pub use submission::validate_submission;
