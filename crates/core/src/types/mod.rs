//! Core types for Parcelport.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod account;
pub mod id;
pub mod status;

pub use account::{AccountCode, AccountCodeError};
pub use id::*;
pub use status::*;
