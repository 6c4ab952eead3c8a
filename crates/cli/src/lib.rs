//! Parcelport CLI - the application boundary around `parcelport-core`.
//!
//! This crate owns everything the core deliberately leaves out: reading
//! configuration from the environment, persisting the signed-in session,
//! a simulated backend with artificial latency, and the `pp-cli` commands.
//!
//! # Modules
//!
//! - [`config`] - `PORTAL_*` environment configuration
//! - [`session_store`] - session file load/save
//! - [`backend`] - simulated `OrderBackend`
//! - [`document`] - YAML order documents
//! - [`commands`] - subcommand implementations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod session_store;
pub mod state;

pub use backend::SimulatedBackend;
pub use config::{ConfigError, PortalConfig};
pub use error::CliError;
pub use session_store::{SessionStore, SessionStoreError};
pub use state::App;
