//! `pp-cli postal` - postal code guidance for a destination.

use parcelport_core::{Country, postal};

use crate::error::Result;
use crate::output;

/// Print the guide for `country` and, if given, whether `code` matches.
///
/// A mismatch is reported but is not an error: the registry only hints.
///
/// # Errors
///
/// Never fails today; returns `Result` for consistency with other commands.
pub fn run(country: Country, code: Option<&str>) -> Result<()> {
    output::line(guide_line(country));
    output::line(format_args!("Pattern: {}", postal::pattern_for(country).as_str()));

    if let Some(code) = code {
        let verdict = if postal::is_valid(country, code) {
            "matches"
        } else {
            "does not match"
        };
        output::line(format_args!("'{}' {verdict}", code.trim()));
    }
    Ok(())
}

/// Guide for `country`, flagged when it is the generic fallback.
fn guide_line(country: Country) -> String {
    let guide = postal::guide_for(country);
    if postal::has_dedicated_pattern(country) {
        format!("{country}: {guide}")
    } else {
        format!("{country}: {guide} (generic format, no dedicated pattern)")
    }
}
