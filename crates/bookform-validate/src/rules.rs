//! Shape rules for individual field values.
//!
//! Patterns are compiled once and shared. These are deliberately loose
//! plausibility checks, not RFC-grade parsers: the email rule wants
//! `local@domain.tld` with no whitespace in any part, the phone rule wants
//! an optional leading `+`, an optionally parenthesized area code, and
//! digit groups with common separators.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").expect("phone pattern")
});

/// True when `value` has the basic `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// True when `value` looks like a plausible phone number.
pub fn is_plausible_phone(value: &str) -> bool {
    PHONE_SHAPE.is_match(value)
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
