//! Locale handling and label lookup.
//!
//! The form ships in English and German. [`translate`] resolves the label
//! keys used by the form definition against a static catalog; unknown keys
//! fall through to the key itself so a missing entry is visible rather
//! than fatal.

/// Supported locales. English is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Resolves a language tag; unknown tags fall back to the default
    /// locale.
    pub fn from_tag(tag: &str) -> Locale {
        match tag {
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    /// The language tag used in URLs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up a catalog entry for `key`, returning the key itself when no
/// entry exists.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    let entry = match locale {
        Locale::En => lookup_en(key),
        Locale::De => lookup_de(key),
    };
    entry.unwrap_or(key)
}

fn lookup_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "personal.title" => "Personal Information",
        "personal.titleField" => "Title",
        "personal.titleOptions.mr" => "Mr",
        "personal.titleOptions.mrs" => "Mrs",
        "personal.titleOptions.ms" => "Ms",
        "personal.titleOptions.dr" => "Dr",
        "personal.firstName" => "First name",
        "personal.lastName" => "Last name",
        "personal.email" => "Email address",
        "personal.phone" => "Phone number",
        "booking.title" => "Booking Details",
        "booking.purpose" => "Purpose of travel",
        "booking.purposeOptions.personal" => "Personal",
        "booking.purposeOptions.business" => "Business",
        "booking.purposeOptions.tmc" => "Travel management company",
        "booking.purposeOptions.agent" => "Travel agent",
        "booking.travelDates" => "Travel dates",
        "booking.occupancy.single" => "Single rooms",
        "booking.occupancy.singleDesc" => "One guest per room",
        "booking.occupancy.double" => "Double rooms",
        "booking.occupancy.doubleDesc" => "Two guests per room",
        "booking.package" => "Package",
        "booking.packageOptions.basic" => "Basic",
        "booking.packageOptions.comfort" => "Comfort",
        "booking.packageOptions.premium" => "Premium",
        "preferences.title" => "Preferences",
        "preferences.schoolTrip" => "School trip",
        "preferences.accessibleRoom" => "Accessible room",
        "preferences.withChildren" => "Travelling with children",
        "preferences.notes" => "Notes",
        "submit" => "Submit booking",
        _ => return None,
    })
}

fn lookup_de(key: &str) -> Option<&'static str> {
    Some(match key {
        "personal.title" => "Persönliche Angaben",
        "personal.titleField" => "Anrede",
        "personal.titleOptions.mr" => "Herr",
        "personal.titleOptions.mrs" => "Frau",
        "personal.titleOptions.ms" => "Frau",
        "personal.titleOptions.dr" => "Dr.",
        "personal.firstName" => "Vorname",
        "personal.lastName" => "Nachname",
        "personal.email" => "E-Mail-Adresse",
        "personal.phone" => "Telefonnummer",
        "booking.title" => "Buchungsdetails",
        "booking.purpose" => "Reisezweck",
        "booking.purposeOptions.personal" => "Privat",
        "booking.purposeOptions.business" => "Geschäftlich",
        "booking.purposeOptions.tmc" => "Travel-Management-Unternehmen",
        "booking.purposeOptions.agent" => "Reisebüro",
        "booking.travelDates" => "Reisedaten",
        "booking.occupancy.single" => "Einzelzimmer",
        "booking.occupancy.singleDesc" => "Ein Gast pro Zimmer",
        "booking.occupancy.double" => "Doppelzimmer",
        "booking.occupancy.doubleDesc" => "Zwei Gäste pro Zimmer",
        "booking.package" => "Paket",
        "booking.packageOptions.basic" => "Basis",
        "booking.packageOptions.comfort" => "Komfort",
        "booking.packageOptions.premium" => "Premium",
        "preferences.title" => "Präferenzen",
        "preferences.schoolTrip" => "Klassenfahrt",
        "preferences.accessibleRoom" => "Barrierefreies Zimmer",
        "preferences.withChildren" => "Reise mit Kindern",
        "preferences.notes" => "Anmerkungen",
        "submit" => "Buchung absenden",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag("de"), Locale::De);
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn translate_resolves_both_locales() {
        assert_eq!(translate(Locale::En, "personal.firstName"), "First name");
        assert_eq!(translate(Locale::De, "personal.firstName"), "Vorname");
    }

    #[test]
    fn unknown_keys_echo_back() {
        assert_eq!(translate(Locale::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_form_label_has_entries_in_both_locales() {
        for stage in crate::input::booking_stages() {
            for locale in Locale::ALL {
                assert_ne!(translate(locale, stage.title_key), stage.title_key);
                for spec in stage.fields {
                    assert_ne!(translate(locale, spec.label_key), spec.label_key);
                }
            }
        }
    }
}
