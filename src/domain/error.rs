//! Error types for the spamlens client.
//!
//! This module defines the centralized error type [`SpamlensError`] and a type alias
//! [`Result`] for convenient error handling throughout the client. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for spamlens operations.
///
/// This enum consolidates all error conditions that can occur during client execution,
/// from credential persistence to configuration issues. Gateway call outcomes have
/// their own three-way type ([`crate::gateway::GatewayError`]) because the workflow
/// needs to branch on them; this type covers everything else.
///
/// # Examples
///
/// ```
/// use spamlens::domain::SpamlensError;
///
/// fn validate_config() -> Result<(), SpamlensError> {
///     Err(SpamlensError::Config("missing base_url".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum SpamlensError {
    /// Credential persistence failed.
    ///
    /// Occurs when the credential file cannot be read, written, or atomically
    /// replaced. The string contains a description of what went wrong.
    #[error("Credential store error: {0}")]
    Credential(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The classification service rejected or failed a request.
    ///
    /// Carries the human-readable description produced by the gateway layer.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for spamlens operations.
///
/// This is a type alias for `std::result::Result<T, SpamlensError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SpamlensError>;
