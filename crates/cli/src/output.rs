//! Terminal output for command results.
//!
//! Logs go to stderr through `tracing`; results go to stdout through here so
//! they can be piped.

#![allow(clippy::print_stdout)]

use std::fmt::Display;

use serde::Serialize;

/// Print one line of human-readable output.
pub fn line(text: impl Display) {
    println!("{text}");
}

/// Print a value as pretty JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
