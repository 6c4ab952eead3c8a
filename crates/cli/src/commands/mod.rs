//! Subcommand implementations.

pub mod import;
pub mod measure;
pub mod order;
pub mod postal;
pub mod session;
