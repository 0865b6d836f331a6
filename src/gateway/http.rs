//! HTTP implementation of the request gateway.
//!
//! This module implements [`Gateway`] over a `ureq` agent with explicit
//! connect/read/write timeouts. Status and transport errors from `ureq` are
//! folded into the [`GatewayError`] taxonomy: the service's authorization
//! status maps to `AuthRejected`, everything else to `Transport`.

use crate::domain::record::{FeedbackChoice, HistorySeries, SummaryStats};
use crate::gateway::api::{
    ClassifyOutcome, ClassifyRequest, FeedbackRequest, Gateway, GatewayError, GatewayResult,
    ProvisionedKey,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Header the service reads the credential from.
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP status the service uses to report an invalid or expired credential.
const STATUS_AUTH_REJECTED: u16 = 403;

/// `ureq`-backed gateway to the classification service.
///
/// Holds a shared agent (connection reuse, consistent timeouts) and the base
/// URL of the service. All methods are synchronous; callers that must not
/// block run them on the worker thread.
pub struct HttpGateway {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for the service at `base_url`.
    ///
    /// Trailing slashes are stripped so endpoint joining stays predictable.
    ///
    /// # Examples
    ///
    /// ```
    /// use spamlens::gateway::HttpGateway;
    ///
    /// let gateway = HttpGateway::new("http://127.0.0.1:8000/");
    /// assert_eq!(gateway.base_url(), "http://127.0.0.1:8000");
    /// ```
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .build();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decodes a JSON response body, mapping decode failures to `Transport`.
    fn decode<T: DeserializeOwned>(response: ureq::Response) -> GatewayResult<T> {
        response
            .into_json::<T>()
            .map_err(|e| GatewayError::Transport(format!("invalid response body: {e}")))
    }

    /// Folds a `ureq` error into the gateway taxonomy.
    fn map_error(err: ureq::Error) -> GatewayError {
        match err {
            ureq::Error::Status(code, response) => {
                if code == STATUS_AUTH_REJECTED {
                    GatewayError::AuthRejected
                } else {
                    let body = response.into_string().unwrap_or_default();
                    GatewayError::Transport(format!("HTTP {code}: {body}"))
                }
            }
            ureq::Error::Transport(err) => GatewayError::Transport(err.to_string()),
        }
    }
}

impl Gateway for HttpGateway {
    fn provision_key(&self) -> GatewayResult<String> {
        let url = self.endpoint("/auth/generate-key");
        tracing::debug!(url = %url, "provisioning api key");

        let response = self.agent.post(&url).call().map_err(Self::map_error)?;
        let key: ProvisionedKey = Self::decode(response)?;
        Ok(key.api_key)
    }

    fn classify(&self, text: &str, api_key: &str) -> GatewayResult<ClassifyOutcome> {
        let url = self.endpoint("/predict");
        tracing::debug!(url = %url, text_len = text.len(), "classifying message");

        let response = self
            .agent
            .post(&url)
            .set(API_KEY_HEADER, api_key)
            .send_json(ClassifyRequest { text })
            .map_err(Self::map_error)?;
        Self::decode(response)
    }

    fn submit_feedback(&self, log_id: i64, feedback: FeedbackChoice) -> GatewayResult<()> {
        let url = self.endpoint(&format!("/feedback/{log_id}"));
        tracing::debug!(url = %url, feedback = %feedback, "submitting feedback");

        self.agent
            .post(&url)
            .send_json(FeedbackRequest { feedback })
            .map_err(Self::map_error)?;
        Ok(())
    }

    fn fetch_summary(&self) -> GatewayResult<SummaryStats> {
        let url = self.endpoint("/stats");
        tracing::debug!(url = %url, "fetching summary statistics");

        let response = self.agent.get(&url).call().map_err(Self::map_error)?;
        Self::decode(response)
    }

    fn fetch_history(&self) -> GatewayResult<HistorySeries> {
        let url = self.endpoint("/stats/history");
        tracing::debug!(url = %url, "fetching historical series");

        let response = self.agent.get(&url).call().map_err(Self::map_error)?;
        Self::decode(response)
    }

    fn clear_logs(&self, api_key: &str) -> GatewayResult<()> {
        let url = self.endpoint("/admin/logs");
        tracing::debug!(url = %url, "clearing server logs");

        self.agent
            .delete(&url)
            .set(API_KEY_HEADER, api_key)
            .call()
            .map_err(Self::map_error)?;
        Ok(())
    }
}
