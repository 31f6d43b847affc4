//! Server-side submission validation.
//!
//! The endpoint revalidates every payload independently of the client's
//! checks. Only the three required fields are inspected; everything else
//! is pass-through. Failures accumulate -- multiple invalid fields are
//! all reported together, never short-circuited.

use bookform_core::{ErrorMap, FieldId};

use crate::rules;

/// Validates the required submission fields, in order: firstName,
/// lastName, email. Missing and empty are equivalent.
pub fn validate_submission(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if first_name.unwrap_or_default().is_empty() {
        errors.insert(FieldId::FirstName.as_str().into(), "First name is required".into());
    }
    if last_name.unwrap_or_default().is_empty() {
        errors.insert(FieldId::LastName.as_str().into(), "Last name is required".into());
    }
    match email.unwrap_or_default() {
        "" => {
            errors.insert(FieldId::Email.as_str().into(), "Email is required".into());
        }
        value if !rules::is_valid_email(value) => {
            errors.insert(
                FieldId::Email.as_str().into(),
                "Please enter a valid email address".into(),
            );
        }
        _ => {}
    }

    errors
}
