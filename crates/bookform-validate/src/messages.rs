//! Localized validation and submission messages.
//!
//! Client-facing messages exist in English and German, keyed off the
//! session locale. The server-side messages in
//! [`submission`](crate::submission) are intentionally English-only --
//! the endpoint has no locale context.

use bookform_core::Locale;

/// A required field was left empty.
pub fn required(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "This field is required",
        Locale::De => "Dieses Feld ist erforderlich",
    }
}

/// The email failed the shape check.
pub fn invalid_email(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Please enter a valid email address",
        Locale::De => "Bitte geben Sie eine gültige E-Mail-Adresse ein",
    }
}

/// The phone number failed the shape check.
pub fn invalid_phone(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Please enter a valid phone number",
        Locale::De => "Bitte geben Sie eine gültige Telefonnummer ein",
    }
}

/// No travel purpose was selected.
pub fn select_purpose(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Please select a travel purpose",
        Locale::De => "Bitte wählen Sie einen Reisezweck",
    }
}

/// The travel dates do not form a valid period.
pub fn invalid_travel_dates(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Please enter a valid travel period",
        Locale::De => "Bitte geben Sie einen gültigen Reisezeitraum ein",
    }
}

/// Generic rejection fallback when the server reports no field errors.
pub fn submission_failed(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Submission failed",
        Locale::De => "Übermittlung fehlgeschlagen",
    }
}

/// Generic transport-failure message (request never completed).
pub fn transport_failure(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "An unexpected error occurred. Please try again.",
        Locale::De => "Ein unerwarteter Fehler ist aufgetreten. Bitte versuchen Sie es erneut.",
    }
}
