//! Request gateway abstraction.
//!
//! This module defines the [`Gateway`] trait covering every outbound call the
//! client makes, plus the three-way outcome taxonomy the workflow branches on.
//! The trait keeps the worker and the tests independent of the HTTP stack.
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors the service's actual endpoints, not a
//! generic REST client. The gateway never retries; retry policy (specifically
//! the one-shot credential refresh) belongs to the workflow that calls it.

use crate::domain::record::{FeedbackChoice, HistorySeries, Prediction, SummaryStats};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome taxonomy for gateway calls.
///
/// Every call resolves to success, an authorization rejection (the credential
/// is invalid or expired and can be silently regenerated), or a transport
/// failure (network error, unexpected status, undecodable body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The service reported the credential as invalid or expired.
    ///
    /// Recoverable: the caller may provision a fresh credential. Never shown
    /// to the user directly.
    #[error("credential rejected by the service")]
    AuthRejected,

    /// Network failure, unexpected status code, or response decode failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// A specialized `Result` type for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Successful classification response (`POST /predict`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifyOutcome {
    /// Verdict the model produced.
    pub prediction: Prediction,

    /// Identifier of the stored classification record, used to attach feedback.
    pub log_id: i64,
}

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest<'a> {
    /// The message text to classify.
    pub text: &'a str,
}

/// Request body for `POST /feedback/{log_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    /// The user's verdict on the prediction.
    pub feedback: FeedbackChoice,
}

/// Response body for `POST /auth/generate-key`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionedKey {
    /// Freshly minted opaque API key.
    pub api_key: String,
}

/// Abstraction over the remote classification/storage service.
///
/// Implementations issue one network call per method and classify the result
/// into the [`GatewayError`] taxonomy. No retries, no caching, no credential
/// management; those live in the worker and the credential store.
///
/// # Implementations
///
/// - [`HttpGateway`](crate::gateway::HttpGateway): `ureq`-based client (default)
/// - test doubles in `worker::handler` and `credential::store` tests
pub trait Gateway: Send {
    /// Provisions a fresh API key (`POST /auth/generate-key`).
    ///
    /// Provisioning is unauthenticated and idempotent from the client's
    /// perspective: any fresh key is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] on network or decode failure.
    fn provision_key(&self) -> GatewayResult<String>;

    /// Classifies a message (`POST /predict`) using the given credential.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::AuthRejected`] when the service rejects the
    /// credential, [`GatewayError::Transport`] otherwise.
    fn classify(&self, text: &str, api_key: &str) -> GatewayResult<ClassifyOutcome>;

    /// Submits correctness feedback for a logged classification
    /// (`POST /feedback/{log_id}`). The acknowledgement body is not consumed.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] on failure.
    fn submit_feedback(&self, log_id: i64, feedback: FeedbackChoice) -> GatewayResult<()>;

    /// Fetches the summary statistics feed (`GET /stats`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] on failure.
    fn fetch_summary(&self) -> GatewayResult<SummaryStats>;

    /// Fetches the historical time-series feed (`GET /stats/history`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] on failure.
    fn fetch_history(&self) -> GatewayResult<HistorySeries>;

    /// Deletes all server-side logs (`DELETE /admin/logs`) using the given
    /// credential. The acknowledgement body is not consumed.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::AuthRejected`] when the service rejects the
    /// credential, [`GatewayError::Transport`] otherwise.
    fn clear_logs(&self, api_key: &str) -> GatewayResult<()>;
}
