//! End-to-end tests for Parcelport.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p parcelport-integration-tests
//! ```
//!
//! Each test gets a [`TestPortal`]: a scratch directory holding the session
//! file and any order or item files the test writes, plus an [`App`] whose
//! simulated backend answers without delay.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};
use std::time::Duration;

use parcelport_cli::{App, CliError, PortalConfig, commands};
use parcelport_core::SessionContext;
use parcelport_core::rules::ValidationPolicy;
use tempfile::TempDir;

/// A complete air order to Japan with one high-value laptop.
pub const AIR_ORDER: &str = r#"
mode: air
destination: japan
tracking_number: TH1234567890
recipient:
  name: Hanako Sato
  phone: "+81 3-1234-5678"
  address: 1-1 Chiyoda, Tokyo
  postal_code: 100-0001
items:
  - classification_code: "8471.30"
    description: Laptop
    weight_kg: "2.1"
    width_cm: 40
    height_cm: 30
    depth_cm: 8
    unit_price: 32000
"#;

/// Bulk upload with one unusable row (no classification code).
pub const ITEMS_CSV: &str = "\
ClassificationCode,Description,Quantity,Weight_kg,Width_cm,Height_cm,Depth_cm,UnitPrice
6109.10,T-shirts,10,0.3,30,20,5,250
,Missing code,1,1,1,1,1,1
8517.12,Phone,2,0.4,16,9,6,1800
";

/// Scratch workspace and application context for one test.
pub struct TestPortal {
    dir: TempDir,
    app: App,
}

impl TestPortal {
    /// Portal with default policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        Self::with_policy(ValidationPolicy::default())
    }

    /// Portal with a custom validation policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch directory cannot be created.
    pub fn with_policy(policy: ValidationPolicy) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = PortalConfig {
            session_file: dir.path().join("session.json"),
            simulated_latency: Duration::ZERO,
            policy,
            ..PortalConfig::default()
        };
        Ok(Self {
            dir,
            app: App::new(config),
        })
    }

    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to a file in the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Sign in through the login command.
    ///
    /// # Errors
    ///
    /// Returns an error if the sign-in fails.
    pub async fn login(&self, corporate: bool) -> Result<SessionContext, CliError> {
        let (account, name) = if corporate {
            ("CORP-0042", "Acme Co.")
        } else {
            ("IND-7", "Somchai")
        };
        commands::session::login(&self.app, account, name, corporate).await
    }
}
