//! Session persistence at the application boundary.
//!
//! The signed-in [`SessionContext`] is written to a small JSON file between
//! invocations. Nothing else about the portal is persisted.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parcelport_core::SessionContext;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads and saves the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, or `None` if nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Option<SessionContext>, SessionStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let session: SessionContext = serde_json::from_str(&content)?;
        debug!(account = %session.account, "Loaded session");
        Ok(Some(session))
    }

    /// Persist `session`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    #[instrument(skip(self, session), fields(path = %self.path.display(), account = %session.account))]
    pub async fn save(&self, session: &SessionContext) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;
        info!("Session saved");
        Ok(())
    }

    /// Remove the session file. Returns whether a session existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn clear(&self) -> Result<bool, SessionStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Session cleared");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
