//! Shared command context.

use parcelport_core::SessionContext;

use crate::backend::SimulatedBackend;
use crate::config::PortalConfig;
use crate::error::{CliError, Result};
use crate::session_store::SessionStore;

/// Everything a command needs: configuration, the session file and the
/// backend.
#[derive(Debug, Clone)]
pub struct App {
    config: PortalConfig,
    sessions: SessionStore,
    backend: SimulatedBackend,
}

impl App {
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        let sessions = SessionStore::new(config.session_file.clone());
        let backend = SimulatedBackend::new(config.simulated_latency, config.policy);
        Self {
            config,
            sessions,
            backend,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    #[must_use]
    pub const fn backend(&self) -> &SimulatedBackend {
        &self.backend
    }

    /// The signed-in session.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NotSignedIn`] if there is none, or a session error
    /// if the file cannot be read.
    pub async fn require_session(&self) -> Result<SessionContext> {
        self.sessions.load().await?.ok_or(CliError::NotSignedIn)
    }
}
