//! Client-side form validation.
//!
//! A pure function of the current [`FormState`]: no mutation, no I/O.
//! Fields that pass are absent from the returned map, so an empty map
//! means the form may be submitted.

use bookform_core::{ErrorMap, FieldId, FormState, Locale};

use crate::messages;
use crate::rules;

/// Validates the whole form, returning one message per failing field in
/// form order.
///
/// Rules:
/// - first name, last name: required
/// - email: required, then shape-checked
/// - phone: optional, shape-checked only when non-empty
/// - travel purpose: must be selected
/// - travel dates: each entered date must be an ISO calendar date, and
///   the end must not precede the start
pub fn validate_form(state: &FormState, locale: Locale) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if state.first_name.is_empty() {
        errors.insert(FieldId::FirstName.as_str().into(), messages::required(locale).into());
    }
    if state.last_name.is_empty() {
        errors.insert(FieldId::LastName.as_str().into(), messages::required(locale).into());
    }

    if state.email.is_empty() {
        errors.insert(FieldId::Email.as_str().into(), messages::required(locale).into());
    } else if !rules::is_valid_email(&state.email) {
        errors.insert(FieldId::Email.as_str().into(), messages::invalid_email(locale).into());
    }

    if !state.phone_number.is_empty() && !rules::is_plausible_phone(&state.phone_number) {
        errors.insert(FieldId::PhoneNumber.as_str().into(), messages::invalid_phone(locale).into());
    }

    if state.travel_purpose.is_empty() {
        errors.insert(
            FieldId::TravelPurpose.as_str().into(),
            messages::select_purpose(locale).into(),
        );
    }

    if let Some(message) = travel_dates_error(state, locale) {
        errors.insert(FieldId::TravelDates.as_str().into(), message.into());
    }

    errors
}

fn travel_dates_error(state: &FormState, locale: Locale) -> Option<&'static str> {
    let range = &state.travel_dates;
    if range.is_empty() {
        return None;
    }

    // Empty ends are fine (open-ended period); an entered date that fails
    // to parse is invalid outright.
    let parse = |value: &str| match value.is_empty() {
        true => Ok(None),
        false => rules::parse_iso_date(value).map(Some).ok_or(()),
    };
    match (parse(&range.start), parse(&range.end)) {
        (Ok(Some(start)), Ok(Some(end))) if end < start => {
            Some(messages::invalid_travel_dates(locale))
        }
        (Ok(_), Ok(_)) => None,
        _ => Some(messages::invalid_travel_dates(locale)),
    }
}
