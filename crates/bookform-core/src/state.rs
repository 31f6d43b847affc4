//! The booking form's single source of truth.
//!
//! [`FormState`] owns every field value, the per-field error map, and the
//! submission lifecycle flags. It is mutated exclusively through the
//! reducer in `bookform-client`; this module provides the typed setter the
//! reducer builds on, plus the derived views (progress percentage, wire
//! payload).

use serde::Serialize;

use crate::counter::OccupancyCounter;
use crate::error::CoreError;
use crate::field::{ErrorMap, FieldId, FieldValue};

/// A travel period as a pair of ISO calendar date strings.
///
/// Empty strings mean unset. The pair is updated together because the
/// date-range widget reports both ends on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// True when neither end of the range has been entered.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

/// All state for one booking form session.
///
/// Created with all-empty defaults when the form mounts, discarded on
/// unmount or reset. `is_submitting` and `is_submitted` are mutually
/// exclusive; the reducer maintains that invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub travel_purpose: String,
    pub package_choice: String,
    pub notes: String,
    pub school_trip: bool,
    pub accessible_room: bool,
    pub travelling_with_children: bool,
    pub single_occupancy: OccupancyCounter,
    pub double_occupancy: OccupancyCounter,
    pub travel_dates: DateRange,
    /// Per-field validation messages; absent key = valid.
    pub errors: ErrorMap,
    /// Exactly one submission in flight at a time.
    pub is_submitting: bool,
    /// Terminal success marker.
    pub is_submitted: bool,
}

impl FormState {
    /// A fresh session with every field at its default.
    pub fn new() -> Self {
        FormState::default()
    }

    /// Assigns `value` to `field`.
    ///
    /// The value's kind must match the field; a mismatch leaves the state
    /// untouched and returns [`CoreError::FieldKindMismatch`]. Counter
    /// fields clamp into their bounds.
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> Result<(), CoreError> {
        match (field, value) {
            (FieldId::Title, FieldValue::Text(v)) => self.title = v,
            (FieldId::FirstName, FieldValue::Text(v)) => self.first_name = v,
            (FieldId::LastName, FieldValue::Text(v)) => self.last_name = v,
            (FieldId::Email, FieldValue::Text(v)) => self.email = v,
            (FieldId::PhoneNumber, FieldValue::Text(v)) => self.phone_number = v,
            (FieldId::TravelPurpose, FieldValue::Text(v)) => self.travel_purpose = v,
            (FieldId::PackageChoice, FieldValue::Text(v)) => self.package_choice = v,
            (FieldId::Notes, FieldValue::Text(v)) => self.notes = v,
            (FieldId::SchoolTrip, FieldValue::Flag(v)) => self.school_trip = v,
            (FieldId::AccessibleRoom, FieldValue::Flag(v)) => self.accessible_room = v,
            (FieldId::TravellingWithChildren, FieldValue::Flag(v)) => {
                self.travelling_with_children = v
            }
            (FieldId::SingleOccupancy, FieldValue::Count(v)) => self.single_occupancy.set(v),
            (FieldId::DoubleOccupancy, FieldValue::Count(v)) => self.double_occupancy.set(v),
            (FieldId::TravelDates, FieldValue::DateRange { start, end }) => {
                self.travel_dates = DateRange { start, end }
            }
            (field, value) => {
                return Err(CoreError::FieldKindMismatch {
                    field,
                    kind: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Percentage of the tracked contact/booking fields that are filled,
    /// rounded to the nearest integer.
    pub fn progress(&self) -> u8 {
        let tracked = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone_number,
            &self.travel_purpose,
        ];
        let filled = tracked.iter().filter(|value| !value.is_empty()).count();
        ((filled as f64 / tracked.len() as f64) * 100.0).round() as u8
    }

    /// The full field set as a structured wire payload.
    pub fn payload(&self) -> SubmitPayload {
        SubmitPayload {
            title: self.title.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            travel_purpose: self.travel_purpose.clone(),
            package_choice: self.package_choice.clone(),
            notes: self.notes.clone(),
            school_trip: self.school_trip,
            accessible_room: self.accessible_room,
            travelling_with_children: self.travelling_with_children,
            single_occupancy: self.single_occupancy.value(),
            double_occupancy: self.double_occupancy.value(),
            travel_start: self.travel_dates.start.clone(),
            travel_end: self.travel_dates.end.clone(),
        }
    }
}

/// Wire payload for a submission POST. Serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub travel_purpose: String,
    pub package_choice: String,
    pub notes: String,
    pub school_trip: bool,
    pub accessible_room: bool,
    pub travelling_with_children: bool,
    pub single_occupancy: u32,
    pub double_occupancy: u32,
    pub travel_start: String,
    pub travel_end: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let state = FormState::new();
        assert!(state.first_name.is_empty());
        assert!(state.errors.is_empty());
        assert!(!state.is_submitting);
        assert!(!state.is_submitted);
        assert_eq!(state.single_occupancy.value(), 0);
        assert!(state.travel_dates.is_empty());
    }

    #[test]
    fn set_writes_matching_kinds() {
        let mut state = FormState::new();
        state.set(FieldId::FirstName, FieldValue::text("John")).unwrap();
        state.set(FieldId::SchoolTrip, FieldValue::Flag(true)).unwrap();
        state.set(FieldId::SingleOccupancy, FieldValue::Count(2)).unwrap();
        state
            .set(
                FieldId::TravelDates,
                FieldValue::DateRange {
                    start: "2026-09-01".into(),
                    end: "2026-09-05".into(),
                },
            )
            .unwrap();
        assert_eq!(state.first_name, "John");
        assert!(state.school_trip);
        assert_eq!(state.single_occupancy.value(), 2);
        assert_eq!(state.travel_dates.start, "2026-09-01");
    }

    #[test]
    fn set_rejects_kind_mismatch() {
        let mut state = FormState::new();
        let err = state.set(FieldId::Email, FieldValue::Count(3)).unwrap_err();
        assert!(matches!(err, CoreError::FieldKindMismatch { field: FieldId::Email, .. }));
        assert!(state.email.is_empty());
    }

    #[test]
    fn set_clamps_counters() {
        let mut state = FormState::new();
        state.set(FieldId::DoubleOccupancy, FieldValue::Count(50)).unwrap();
        assert_eq!(state.double_occupancy.value(), 10);
    }

    #[test]
    fn progress_counts_tracked_fields() {
        let mut state = FormState::new();
        assert_eq!(state.progress(), 0);
        state.set(FieldId::FirstName, FieldValue::text("John")).unwrap();
        state.set(FieldId::LastName, FieldValue::text("Doe")).unwrap();
        assert_eq!(state.progress(), 40);
        state.set(FieldId::Email, FieldValue::text("john@example.com")).unwrap();
        state.set(FieldId::PhoneNumber, FieldValue::text("1234567890")).unwrap();
        state.set(FieldId::TravelPurpose, FieldValue::text("personal")).unwrap();
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let mut state = FormState::new();
        state.set(FieldId::FirstName, FieldValue::text("John")).unwrap();
        let json = serde_json::to_value(state.payload()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["singleOccupancy"], 0);
        assert!(json.get("first_name").is_none());
    }
}
