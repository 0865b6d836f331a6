//! Filesystem locations for client state.
//!
//! This module resolves the platform data directory used for the persisted
//! credential and the trace log. Paths follow the OS conventions reported by
//! the `directories` crate, falling back to the current directory when the
//! platform reports no home (containers, stripped-down CI images).

use std::path::PathBuf;

/// Returns the data directory for spamlens state.
///
/// Resolves to the platform data-local directory (for example
/// `~/.local/share/spamlens` on Linux) with a `./spamlens` fallback when no
/// home directory can be determined. The directory is not created here;
/// callers create it when they first write.
///
/// # Examples
///
/// ```
/// use spamlens::infrastructure::get_data_dir;
///
/// let dir = get_data_dir();
/// assert!(dir.ends_with("spamlens"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "spamlens")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join("spamlens"))
}

/// Returns the path of the persisted credential file.
///
/// This is the single durable client-side entry: one file holding the current
/// API key string.
#[must_use]
pub fn credential_file() -> PathBuf {
    get_data_dir().join("api_key")
}

/// Returns the path of the trace log file.
#[must_use]
pub fn trace_log_file() -> PathBuf {
    get_data_dir().join("spamlens.log")
}

/// Returns the path of the client configuration file.
///
/// Resolves to the platform config directory (for example
/// `~/.config/spamlens/config.toml` on Linux) with a `./spamlens` fallback.
#[must_use]
pub fn config_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "spamlens")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join("spamlens"))
        .join("config.toml")
}
