//! Locale preference and text direction.
//!
//! Translation tables are owned by the external i18n resource system; this
//! module only models which locale is active and what that implies for layout.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::{Deserialize, Serialize};

/// Supported UI locales. Arabic is the default for first-time visitors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    Fr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ar, Locale::Fr, Locale::En];

    /// Storage and wire code (`"ar"`, `"fr"`, `"en"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Parse a stored code. Unknown codes yield `None` so callers can fall back.
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim() {
            "ar" => Some(Self::Ar),
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Value for the `<html dir>` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::Fr | Self::En => "ltr",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::Fr => "Français",
            Self::En => "English",
        }
    }

    /// Label for an auto-numbered child ("Child 2", "Enfant 2", "طفل 2").
    pub fn child_number(self, n: u32) -> String {
        match self {
            Self::Ar => format!("طفل {n}"),
            Self::Fr => format!("Enfant {n}"),
            Self::En => format!("Child {n}"),
        }
    }
}
