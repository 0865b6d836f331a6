//! File-backed credential store.
//!
//! This module persists the single session credential in one file under the
//! data directory, using atomic writes (write-to-temp + rename) so the file is
//! never left half-written. The store keeps an in-memory copy so reads never
//! touch the disk after startup.
//!
//! # Lifecycle
//!
//! The credential is read once when the store opens, regenerated through
//! [`ensure`](CredentialStore::ensure) when absent, and overwritten silently by
//! [`set`](CredentialStore::set) whenever the workflow or the user provisions a
//! fresh one. At most one credential is current at a time; replacement is
//! atomic from the caller's perspective.

use crate::domain::error::{Result, SpamlensError};
use crate::gateway::Gateway;
use std::path::PathBuf;

/// Holds the session credential, durable across restarts.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the worker thread, the
/// only place credentials are read or written, which is what makes the
/// read-then-use window of a single call safe without locking.
pub struct CredentialStore {
    /// Path to the credential file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on open.
    current: Option<String>,
}

impl CredentialStore {
    /// Opens the store, loading any previously persisted credential.
    ///
    /// A missing file means no credential yet; that is not an error. Parent
    /// directories are created so the first `set` cannot fail on a missing
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an
    /// existing credential file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use spamlens::credential::CredentialStore;
    /// use std::path::PathBuf;
    ///
    /// let store = CredentialStore::open(PathBuf::from("/tmp/spamlens/api_key"))?;
    /// # Ok::<(), spamlens::domain::SpamlensError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening credential store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let current = if file_path.exists() {
            let raw = std::fs::read_to_string(&file_path)?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                tracing::debug!("credential file present but empty");
                None
            } else {
                tracing::debug!("loaded persisted credential");
                Some(trimmed.to_string())
            }
        } else {
            tracing::debug!("no persisted credential");
            None
        };

        Ok(Self { file_path, current })
    }

    /// Returns the current credential, if any.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Persists a new credential, silently overwriting any previous one.
    ///
    /// The write goes to a temporary file first and is renamed into place, so
    /// a crash mid-write cannot corrupt the stored credential. The in-memory
    /// copy is only replaced once the file write succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed.
    pub fn set(&mut self, credential: &str) -> Result<()> {
        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, credential).map_err(|e| {
            SpamlensError::Credential(format!("failed to write credential: {e}"))
        })?;
        std::fs::rename(&tmp_path, &self.file_path).map_err(|e| {
            SpamlensError::Credential(format!("failed to replace credential: {e}"))
        })?;

        self.current = Some(credential.to_string());
        tracing::debug!("credential persisted");
        Ok(())
    }

    /// Returns the current credential, provisioning a fresh one if absent.
    ///
    /// No concurrent-refresh coordination is needed: provisioning is cheap and
    /// idempotent from the user's perspective, any fresh credential is
    /// acceptable.
    ///
    /// # Errors
    ///
    /// Returns an error if provisioning fails or the fresh credential cannot
    /// be persisted.
    pub fn ensure(&mut self, gateway: &dyn Gateway) -> Result<String> {
        if let Some(current) = &self.current {
            return Ok(current.clone());
        }

        tracing::debug!("no credential present, provisioning");
        let fresh = gateway
            .provision_key()
            .map_err(|e| SpamlensError::Gateway(e.to_string()))?;
        self.set(&fresh)?;
        Ok(fresh)
    }
}
