//! Spamlens: a terminal client for an SMS spam classification service.
//!
//! Spamlens drives the full demo workflow of the service from a terminal:
//! - Transparent API key provisioning and file-backed persistence
//! - Message classification with verdict display and a feedback loop
//! - Live statistics: counters, spam/ham distribution, daily history
//! - Four views (Dashboard, Analytics, API Access, Settings) with a single
//!   active view at a time
//!
//! # Architecture
//!
//! The crate follows a layered architecture with a unidirectional event flow:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gateway Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (gateway/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP calls  │   │ - Off-loop I/O│
//! │ - Theming     │   │ - Error map   │   │ - Key refresh │
//! │ - Charts      │   │ - Payloads    │   │ - Channel msgs│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Credential store (credential/)                   │
//! │  - Records, statistics, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Events come in (user input or worker responses), the handler mutates state
//! and emits actions, actions go out (worker messages, quit), and the UI is
//! re-rendered from the new state. Rendering never mutates; network calls
//! never touch state directly.
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (records, statistics, errors)
//! - [`gateway`]: HTTP access to the classification service
//! - [`credential`]: API key persistence
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker for network operations
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup (file-backed diagnostics)
//!
//! # Initialization Flow
//!
//! 1. Load [`Config`] from the platform config file (or defaults)
//! 2. Install the tracing subscriber via [`observability::init_tracing`]
//! 3. Build [`AppState`] with the resolved theme via [`initialize`]
//! 4. Spawn the worker thread with an [`HttpGateway`](gateway::HttpGateway)
//!    and the [`CredentialStore`](credential::CredentialStore)
//! 5. Post `EnsureKey` and `RefreshSummary` so the credential exists and the
//!    dashboard populates before the first submission

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod credential;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Phase, View};
pub use domain::{Result, SpamlensError};
pub use ui::Theme;

use std::path::Path;

use serde::Deserialize;

/// Default service origin when no configuration is present.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client configuration loaded from a TOML file.
///
/// All fields are optional in the file; missing values fall back to
/// defaults.
///
/// # Example
///
/// ```toml
/// # ~/.config/spamlens/config.toml
/// base_url = "http://127.0.0.1:8000"
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the classification service. All endpoint paths are appended
    /// to this value.
    pub base_url: String,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`. Default: `"info"`. `RUST_LOG` overrides this.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SpamlensError::Config`] if the file cannot be read or
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| SpamlensError::Config(format!("failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| SpamlensError::Config(format!("failed to parse config file: {e}")))
    }

    /// Loads configuration from the platform config file, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SpamlensError::Config`] only when a config file exists but
    /// cannot be read or parsed. Absence is not an error.
    pub fn load() -> Result<Self> {
        let path = infrastructure::config_file();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Builds the initial application state from configuration.
///
/// Resolves the theme (custom file if configured and loadable, otherwise the
/// built-in default) and creates an [`AppState`] on the Dashboard with no
/// data yet. Statistics and the credential arrive through the worker.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing spamlens client");

    let theme = config.theme_file.as_ref().map_or_else(Theme::default, |theme_file| {
        Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        })
    });

    AppState::new(config.base_url.clone(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let config: Config = toml::from_str(r#"base_url = "https://spam.example""#).unwrap();
        assert_eq!(config.base_url, "https://spam.example");
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn initialize_starts_on_dashboard() {
        let state = initialize(&Config::default());
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, Theme::default().name);
    }
}
