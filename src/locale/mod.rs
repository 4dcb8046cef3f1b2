//! Locale subsystem.
//!
//! # Data Flow
//! ```text
//! Request path segment ("en", "pl", ...)
//!     → Locale::from_code (closed set, no registry lookup)
//!     → Locale::prefix / home_path (URL shape)
//!     → dictionary.rs (localized names for pages)
//! ```
//!
//! # Design Decisions
//! - Closed enum: adding a locale is a compile error wherever a
//!   `Localized<T>` table lacks the new value
//! - The default locale is served at the site root, others under `/{code}`
//! - Codes are matched case-sensitively; URLs are always lowercase

pub mod dictionary;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A supported UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    Pl,
    En,
}

impl Locale {
    /// Locale served at the site root.
    pub const DEFAULT: Locale = Locale::Pl;

    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::Pl, Locale::En];

    /// Short code used in URLs and headers.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    /// Look up a locale by its URL code.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Locale::Pl)
    }

    /// Path prefix for URLs in this locale: empty for the default locale.
    pub const fn prefix(self) -> &'static str {
        match self {
            Locale::Pl => "",
            Locale::En => "/en",
        }
    }

    /// Path of the home page in this locale.
    pub const fn home_path(self) -> &'static str {
        match self {
            Locale::Pl => "/",
            Locale::En => "/en",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::Pl => "Polski",
            Locale::En => "English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// One value per supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub pl: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(pl: T, en: T) -> Self {
        Self { pl, en }
    }

    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Pl => &self.pl,
            Locale::En => &self.en,
        }
    }

    /// Iterate `(locale, value)` pairs in `Locale::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        Locale::ALL.into_iter().map(move |locale| (locale, self.get(locale)))
    }
}
