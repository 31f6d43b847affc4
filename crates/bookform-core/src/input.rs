//! Staged form definition with tagged input kinds.
//!
//! Each widget kind is one variant of [`InputKind`], carrying only the
//! data that kind needs. Renderers (the CLI's form printer, a UI layer)
//! dispatch on the variant in a single place instead of probing optional
//! fields on a flat record.

use crate::counter::{DEFAULT_MAX, DEFAULT_MIN};
use crate::field::FieldId;

/// One selectable option of a select or radio control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Stored field value.
    pub value: &'static str,
    /// Catalog key for the displayed label.
    pub label_key: &'static str,
}

/// The widget kind of a form field, tagged per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free-text input.
    Text,
    /// Phone input with a country-code prefix.
    Phone { country_code: &'static str },
    /// Text input with a leading icon.
    ImageText { icon: &'static str },
    /// Paired start/end calendar date input.
    DateRange,
    /// Dropdown select.
    Select { options: &'static [SelectOption] },
    /// Radio button group.
    Radio { options: &'static [SelectOption] },
    /// Bounded room counter with a description line.
    Counter {
        min: u32,
        max: u32,
        description_key: &'static str,
    },
    /// Boolean checkbox.
    Checkbox,
}

/// One field's place in the rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FieldId,
    /// Catalog key for the field label.
    pub label_key: &'static str,
    /// Rendered with a required marker; enforcement lives in the
    /// validation rules, not here.
    pub required: bool,
    pub kind: InputKind,
}

/// One collapsible section of the multi-step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// Catalog key for the stage title.
    pub title_key: &'static str,
    pub fields: &'static [FieldSpec],
}

const TITLE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "mr", label_key: "personal.titleOptions.mr" },
    SelectOption { value: "mrs", label_key: "personal.titleOptions.mrs" },
    SelectOption { value: "ms", label_key: "personal.titleOptions.ms" },
    SelectOption { value: "dr", label_key: "personal.titleOptions.dr" },
];

const PURPOSE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "personal", label_key: "booking.purposeOptions.personal" },
    SelectOption { value: "business", label_key: "booking.purposeOptions.business" },
    SelectOption { value: "tmc", label_key: "booking.purposeOptions.tmc" },
    SelectOption { value: "agent", label_key: "booking.purposeOptions.agent" },
];

const PACKAGE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "basic", label_key: "booking.packageOptions.basic" },
    SelectOption { value: "comfort", label_key: "booking.packageOptions.comfort" },
    SelectOption { value: "premium", label_key: "booking.packageOptions.premium" },
];

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: FieldId::Title,
        label_key: "personal.titleField",
        required: false,
        kind: InputKind::Select { options: TITLE_OPTIONS },
    },
    FieldSpec {
        field: FieldId::FirstName,
        label_key: "personal.firstName",
        required: true,
        kind: InputKind::Text,
    },
    FieldSpec {
        field: FieldId::LastName,
        label_key: "personal.lastName",
        required: true,
        kind: InputKind::Text,
    },
    FieldSpec {
        field: FieldId::Email,
        label_key: "personal.email",
        required: true,
        kind: InputKind::ImageText { icon: "@" },
    },
    FieldSpec {
        field: FieldId::PhoneNumber,
        label_key: "personal.phone",
        required: false,
        kind: InputKind::Phone { country_code: "+44" },
    },
];

const BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: FieldId::TravelPurpose,
        label_key: "booking.purpose",
        required: true,
        kind: InputKind::Radio { options: PURPOSE_OPTIONS },
    },
    FieldSpec {
        field: FieldId::TravelDates,
        label_key: "booking.travelDates",
        required: false,
        kind: InputKind::DateRange,
    },
    FieldSpec {
        field: FieldId::SingleOccupancy,
        label_key: "booking.occupancy.single",
        required: false,
        kind: InputKind::Counter {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            description_key: "booking.occupancy.singleDesc",
        },
    },
    FieldSpec {
        field: FieldId::DoubleOccupancy,
        label_key: "booking.occupancy.double",
        required: false,
        kind: InputKind::Counter {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            description_key: "booking.occupancy.doubleDesc",
        },
    },
    FieldSpec {
        field: FieldId::PackageChoice,
        label_key: "booking.package",
        required: false,
        kind: InputKind::Select { options: PACKAGE_OPTIONS },
    },
];

const PREFERENCES_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: FieldId::SchoolTrip,
        label_key: "preferences.schoolTrip",
        required: false,
        kind: InputKind::Checkbox,
    },
    FieldSpec {
        field: FieldId::AccessibleRoom,
        label_key: "preferences.accessibleRoom",
        required: false,
        kind: InputKind::Checkbox,
    },
    FieldSpec {
        field: FieldId::TravellingWithChildren,
        label_key: "preferences.withChildren",
        required: false,
        kind: InputKind::Checkbox,
    },
    FieldSpec {
        field: FieldId::Notes,
        label_key: "preferences.notes",
        required: false,
        kind: InputKind::Text,
    },
];

const STAGES: &[Stage] = &[
    Stage { title_key: "personal.title", fields: PERSONAL_FIELDS },
    Stage { title_key: "booking.title", fields: BOOKING_FIELDS },
    Stage { title_key: "preferences.title", fields: PREFERENCES_FIELDS },
];

/// The booking form, as accordion stages in display order.
pub fn booking_stages() -> &'static [Stage] {
    STAGES
}
