//! Postal code patterns and input guides per destination country.
//!
//! Countries without a dedicated entry share a generic 4-6 digit pattern.
//! The registry only hints by default; enforcement at submission time is
//! opt-in via [`ValidationPolicy`](crate::rules::ValidationPolicy).

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Country;

/// Guide shown for countries without a dedicated entry.
pub const DEFAULT_GUIDE: &str = "Enter the 4-6 digit postal code";

const DEFAULT_PATTERN: &str = r"^\d{4,6}$";

struct PostalEntry {
    country: Country,
    pattern: &'static str,
    guide: &'static str,
}

const ENTRIES: &[PostalEntry] = &[
    PostalEntry {
        country: Country::Japan,
        pattern: r"^\d{3}-?\d{4}$",
        guide: "7 digits, optionally hyphenated (e.g. 100-0001)",
    },
    PostalEntry {
        country: Country::China,
        pattern: r"^\d{6}$",
        guide: "6 digits (e.g. 100000)",
    },
    PostalEntry {
        country: Country::SouthKorea,
        pattern: r"^\d{5}$",
        guide: "5 digits (e.g. 03187)",
    },
    PostalEntry {
        country: Country::UnitedStates,
        pattern: r"^\d{5}(-\d{4})?$",
        guide: "5-digit ZIP or ZIP+4 (e.g. 94105 or 94105-1234)",
    },
];

static COMPILED: LazyLock<Vec<(Country, Regex)>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .filter_map(|entry| {
            Regex::new(entry.pattern)
                .ok()
                .map(|regex| (entry.country, regex))
        })
        .collect()
});

#[allow(clippy::unwrap_used)] // Literal pattern, covered by tests
static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(DEFAULT_PATTERN).unwrap());

/// The postal code pattern for a destination.
#[must_use]
pub fn pattern_for(country: Country) -> &'static Regex {
    COMPILED
        .iter()
        .find(|(c, _)| *c == country)
        .map_or(&*DEFAULT_REGEX, |(_, regex)| regex)
}

/// Human-readable input guide for a destination.
#[must_use]
pub fn guide_for(country: Country) -> &'static str {
    ENTRIES
        .iter()
        .find(|entry| entry.country == country)
        .map_or(DEFAULT_GUIDE, |entry| entry.guide)
}

/// Whether `code` (trimmed) matches the destination's pattern.
#[must_use]
pub fn is_valid(country: Country, code: &str) -> bool {
    pattern_for(country).is_match(code.trim())
}

/// Whether the destination has a dedicated pattern.
#[must_use]
pub fn has_dedicated_pattern(country: Country) -> bool {
    ENTRIES.iter().any(|entry| entry.country == country)
}
