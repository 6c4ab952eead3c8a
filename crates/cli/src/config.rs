//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PORTAL_SESSION_FILE` - Where the signed-in session is kept (default: .parcelport/session.json)
//! - `PORTAL_SIMULATED_LATENCY_MS` - Artificial backend delay (default: 800)
//! - `PORTAL_AIR_VALUE_LIMIT` - Air compliance threshold in THB (default: 1500)
//! - `PORTAL_STRICT_DIMENSIONS` - Reject unmeasured items at submission (default: false)
//! - `PORTAL_STRICT_IMPORT` - Reject bulk rows with bad numbers instead of defaulting (default: false)
//! - `PORTAL_ENFORCE_POSTAL_CODES` - Reject postal codes not matching the destination (default: false)
//! - `PORTAL_LOG_JSON` - Emit JSON log lines (default: false)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use parcelport_core::ImportMode;
use parcelport_core::rules::{AIR_VALUE_LIMIT, ValidationPolicy};
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_SESSION_FILE: &str = ".parcelport/session.json";
const DEFAULT_LATENCY_MS: u64 = 800;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Portal CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Session file path
    pub session_file: PathBuf,
    /// Delay applied by the simulated backend to every call
    pub simulated_latency: Duration,
    /// Validation thresholds and strictness
    pub policy: ValidationPolicy,
    /// Bulk import strictness
    pub import_mode: ImportMode,
    /// JSON log output
    pub log_json: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            simulated_latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            policy: ValidationPolicy::default(),
            import_mode: ImportMode::Lenient,
            log_json: false,
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_file = lookup("PORTAL_SESSION_FILE")
            .map_or(defaults.session_file, PathBuf::from);
        let latency_ms = parse_or(&lookup, "PORTAL_SIMULATED_LATENCY_MS", DEFAULT_LATENCY_MS)?;
        let air_value_limit = parse_or(&lookup, "PORTAL_AIR_VALUE_LIMIT", AIR_VALUE_LIMIT)?;
        if air_value_limit.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "PORTAL_AIR_VALUE_LIMIT".to_string(),
                "must not be negative".to_string(),
            ));
        }
        let strict_dimensions = bool_or(&lookup, "PORTAL_STRICT_DIMENSIONS", false)?;
        let strict_import = bool_or(&lookup, "PORTAL_STRICT_IMPORT", false)?;
        let enforce_postal_codes = bool_or(&lookup, "PORTAL_ENFORCE_POSTAL_CODES", false)?;
        let log_json = bool_or(&lookup, "PORTAL_LOG_JSON", false)?;

        Ok(Self {
            session_file,
            simulated_latency: Duration::from_millis(latency_ms),
            policy: ValidationPolicy {
                air_value_limit,
                strict_dimensions,
                enforce_postal_codes,
            },
            import_mode: if strict_import {
                ImportMode::Strict
            } else {
                ImportMode::Lenient
            },
            log_json,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise use the default.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a boolean flag (`1/0`, `true/false`, `yes/no`, `on/off`).
fn bool_or<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
