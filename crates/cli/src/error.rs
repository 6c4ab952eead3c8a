//! Unified error type for CLI commands.

use std::path::PathBuf;

use parcelport_core::{AccountCodeError, BackendError, ImportError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::session_store::SessionStoreError;

/// Any failure a command can report.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session file could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] SessionStoreError),

    /// The backend refused or failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Bulk import produced nothing usable.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Invalid account code on the command line.
    #[error("Invalid account code: {0}")]
    AccountCode(#[from] AccountCodeError),

    /// Order document could not be parsed.
    #[error("Invalid order document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command needs a signed-in session.
    #[error("Not signed in. Run `pp-cli login` first")]
    NotSignedIn,

    /// The signed-in account may not perform this action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The order has blocking validation errors.
    #[error("Order has {0} blocking error(s)")]
    Blocked(usize),
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
