//! Field identifiers and values for the booking form.
//!
//! All IDs are variants of a single [`FieldId`] enum, providing type safety
//! so that handlers and validators cannot address a field that does not
//! exist. The canonical string form of an ID is its camelCase wire name,
//! used in JSON payloads and error maps.

use std::fmt;

use indexmap::IndexMap;

/// Mapping from wire field name to a human-readable validation message.
///
/// Absence of a key (or an empty message) means the field is currently
/// valid. Insertion order is preserved so messages surface in form order.
pub type ErrorMap = IndexMap<String, String>;

/// Identifies one named, independently validated field of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    TravelPurpose,
    PackageChoice,
    Notes,
    SchoolTrip,
    AccessibleRoom,
    TravellingWithChildren,
    SingleOccupancy,
    DoubleOccupancy,
    TravelDates,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 14] = [
        FieldId::Title,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::PhoneNumber,
        FieldId::TravelPurpose,
        FieldId::PackageChoice,
        FieldId::Notes,
        FieldId::SchoolTrip,
        FieldId::AccessibleRoom,
        FieldId::TravellingWithChildren,
        FieldId::SingleOccupancy,
        FieldId::DoubleOccupancy,
        FieldId::TravelDates,
    ];

    /// The camelCase wire name, as used in payloads and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Title => "title",
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::PhoneNumber => "phoneNumber",
            FieldId::TravelPurpose => "travelPurpose",
            FieldId::PackageChoice => "packageChoice",
            FieldId::Notes => "notes",
            FieldId::SchoolTrip => "schoolTrip",
            FieldId::AccessibleRoom => "accessibleRoom",
            FieldId::TravellingWithChildren => "travellingWithChildren",
            FieldId::SingleOccupancy => "singleOccupancy",
            FieldId::DoubleOccupancy => "doubleOccupancy",
            FieldId::TravelDates => "travelDates",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value destined for one field, tagged by kind.
///
/// The kind must match the target field: text for the string fields,
/// `Flag` for the booleans, `Count` for the occupancy counters, and
/// `DateRange` for the travel dates (the date-range widget reports both
/// ends together).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Count(u32),
    DateRange { start: String, end: String },
}

impl FieldValue {
    /// Short kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::Count(_) => "count",
            FieldValue::DateRange { .. } => "date range",
        }
    }

    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(FieldId::FirstName.as_str(), "firstName");
        assert_eq!(FieldId::TravellingWithChildren.as_str(), "travellingWithChildren");
        assert_eq!(format!("{}", FieldId::Email), "email");
    }

    #[test]
    fn all_lists_every_field_once() {
        let mut seen = std::collections::HashSet::new();
        for field in FieldId::ALL {
            assert!(seen.insert(field.as_str()), "duplicate field {field}");
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn value_kinds() {
        assert_eq!(FieldValue::text("x").kind(), "text");
        assert_eq!(FieldValue::Flag(true).kind(), "flag");
        assert_eq!(FieldValue::Count(2).kind(), "count");
    }
}
