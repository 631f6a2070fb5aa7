//! Locale selection, localized values, and Devanagari digit conversion.
//!
//! Every user-facing record carries its text in both supported locales via
//! `Localized<T>`. Screens pick the active variant with `Localized::get`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SahayakError;

/// The two display languages the assistant supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Nepali (Devanagari script and digits).
    Ne,
}

impl Locale {
    /// Both locales, English first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ne];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ne => "ne",
        }
    }

    /// The other locale. Used by the language toggle.
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Ne,
            Locale::Ne => Locale::En,
        }
    }

    /// Label of this locale written in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ne => "नेपाली",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SahayakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ne" | "nepali" | "नेपाली" => Ok(Locale::Ne),
            other => Err(SahayakError::InvalidInput {
                reason: format!("unsupported locale '{other}'"),
            }),
        }
    }
}

/// A value available in both supported locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub ne: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, ne: T) -> Self {
        Self { en, ne }
    }

    /// Return the variant for `locale`.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Ne => &self.ne,
        }
    }
}

impl Localized<String> {
    /// Build a localized string from two borrowed literals.
    pub fn text(en: &str, ne: &str) -> Self {
        Self::new(en.to_string(), ne.to_string())
    }

    /// Build a localized string whose Nepali text falls back to the English
    /// text when it is missing or blank.
    pub fn with_fallback(en: impl Into<String>, ne: Option<String>) -> Self {
        let en = en.into();
        let ne = ne
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| en.clone());
        Self { en, ne }
    }

    /// Substring search across both locales.
    ///
    /// The English side is compared case-insensitively; the Nepali side is a
    /// plain substring test because Devanagari has no case.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.en.to_lowercase().contains(&needle) || self.ne.contains(query)
    }
}

impl Localized<Vec<String>> {
    /// Build a localized list from two slices of literals.
    pub fn lines(en: &[&str], ne: &[&str]) -> Self {
        Self::new(
            en.iter().map(|s| s.to_string()).collect(),
            ne.iter().map(|s| s.to_string()).collect(),
        )
    }
}

// ── Devanagari digits ────────────────────────────────────────────────────────

/// Devanagari digits indexed by their numeric value.
pub const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Replace every Devanagari digit in `s` with its ASCII equivalent.
///
/// All other characters (`+`, `-`, spaces, ASCII digits) pass through.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match NEPALI_DIGITS.iter().position(|&d| d == c) {
            Some(value) => char::from(b'0' + value as u8),
            None => c,
        })
        .collect()
}

/// Replace every ASCII digit in `s` with its Devanagari equivalent.
pub fn to_nepali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(value) => NEPALI_DIGITS[value as usize],
            _ => c,
        })
        .collect()
}

/// Render the digits of `s` in the script of `locale`.
pub fn localize_digits(s: &str, locale: Locale) -> String {
    match locale {
        Locale::En => to_ascii_digits(s),
        Locale::Ne => to_nepali_digits(s),
    }
}
