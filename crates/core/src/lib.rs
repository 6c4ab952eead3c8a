//! Parcelport Core - shipment line-item calculations and validation.
//!
//! This crate holds everything the order form computes:
//! - [`measure`] - CBM and EMS volumetric weight from package dimensions
//! - [`ratio`] - volumetric-to-actual weight classification
//! - [`postal`] - postal code patterns and input guides per destination
//! - [`rules`] - air compliance and pre-submission validation rules
//! - [`import`] - bulk line-item upload from delimited text
//! - [`order`] - line items, recipients and shipment orders
//! - [`session`] - the signed-in customer, passed explicitly
//! - [`backend`] - the async boundary orders are submitted through
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no I/O,
//! no clocks beyond timestamps, no global state. Validation never fails:
//! findings come back as data.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod import;
pub mod measure;
pub mod order;
pub mod postal;
pub mod ratio;
pub mod rules;
pub mod session;
pub mod types;

pub use backend::{BackendError, OrderBackend, Receipt, SignInRequest};
pub use import::{ImportError, ImportMode, ImportReport, Importer, parse_rows};
pub use measure::{compute_cbm, compute_volumetric_weight};
pub use order::{LineItem, OrderTotals, Recipient, ShipmentOrder};
pub use ratio::classify;
pub use rules::{ValidationMessage, ValidationPolicy, blocks_submission, check_submission, validate};
pub use session::SessionContext;
pub use types::*;
