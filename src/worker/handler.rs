//! Worker thread implementation for network operations.
//!
//! This module owns the side of the client that talks to the service: the
//! gateway and the credential store. Running it on its own thread keeps the
//! event loop responsive while requests are in flight; the message/response
//! protocol in [`messages`](crate::worker::messages) is the only coupling to
//! the rest of the client.

use crate::credential::CredentialStore;
use crate::domain::record::FeedbackChoice;
use crate::gateway::{Gateway, GatewayError};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Worker state: the gateway and the persisted credential.
///
/// Every [`handle`](Self::handle) call performs exactly one operation and
/// returns exactly one response; the event handler's cleanup guarantees depend
/// on that invariant.
pub struct GatewayWorker {
    gateway: Box<dyn Gateway>,
    store: CredentialStore,
}

impl GatewayWorker {
    /// Creates a worker over the given gateway and credential store.
    #[must_use]
    pub fn new(gateway: Box<dyn Gateway>, store: CredentialStore) -> Self {
        Self { gateway, store }
    }

    /// Processes one message and produces its response.
    pub fn handle(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_handle", message = ?message).entered();

        match message {
            WorkerMessage::Classify { text } => self.handle_classify(&text),
            WorkerMessage::SubmitFeedback { log_id, feedback } => {
                self.handle_feedback(log_id, feedback)
            }
            WorkerMessage::RefreshSummary => self.handle_refresh_summary(),
            WorkerMessage::RefreshHistory => self.handle_refresh_history(),
            WorkerMessage::EnsureKey => self.handle_ensure_key(),
            WorkerMessage::RegenerateKey => self.handle_regenerate_key(),
            WorkerMessage::ClearLogs => self.handle_clear_logs(),
        }
    }

    /// Runs the classify sequence: ensure a credential, call the service, and
    /// apply the one-shot auth policy.
    ///
    /// On `AuthRejected` the credential is regenerated exactly once, silently,
    /// and the submission is dropped without being re-issued. This is the
    /// intended fail-closed policy, not an oversight: the user re-triggers.
    fn handle_classify(&mut self, text: &str) -> WorkerResponse {
        let key = match self.store.ensure(self.gateway.as_ref()) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(error = %e, "could not obtain credential for classify");
                return WorkerResponse::ClassifyFailed {
                    error: e.to_string(),
                };
            }
        };

        match self.gateway.classify(text, &key) {
            Ok(outcome) => {
                tracing::debug!(log_id = outcome.log_id, prediction = %outcome.prediction, "classified");
                WorkerResponse::Classified {
                    log_id: outcome.log_id,
                    prediction: outcome.prediction,
                }
            }
            Err(GatewayError::AuthRejected) => {
                tracing::debug!("credential rejected, provisioning replacement");
                match self.gateway.provision_key() {
                    Ok(fresh) => {
                        if let Err(e) = self.store.set(&fresh) {
                            tracing::warn!(error = %e, "failed to persist refreshed credential");
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "credential refresh failed");
                    }
                }
                WorkerResponse::ClassifyAborted
            }
            Err(GatewayError::Transport(error)) => {
                tracing::warn!(error = %error, "classify transport failure");
                WorkerResponse::ClassifyFailed { error }
            }
        }
    }

    fn handle_feedback(&mut self, log_id: i64, feedback: FeedbackChoice) -> WorkerResponse {
        match self.gateway.submit_feedback(log_id, feedback) {
            Ok(()) => WorkerResponse::FeedbackSubmitted { log_id },
            Err(e) => WorkerResponse::FeedbackFailed {
                error: e.to_string(),
            },
        }
    }

    fn handle_refresh_summary(&mut self) -> WorkerResponse {
        match self.gateway.fetch_summary() {
            Ok(summary) => WorkerResponse::SummaryLoaded { summary },
            Err(e) => WorkerResponse::SummaryFailed {
                error: e.to_string(),
            },
        }
    }

    fn handle_refresh_history(&mut self) -> WorkerResponse {
        match self.gateway.fetch_history() {
            Ok(series) => WorkerResponse::HistoryLoaded { series },
            Err(e) => WorkerResponse::HistoryFailed {
                error: e.to_string(),
            },
        }
    }

    /// Startup path: report the existing credential or provision one if absent.
    fn handle_ensure_key(&mut self) -> WorkerResponse {
        match self.store.ensure(self.gateway.as_ref()) {
            Ok(key) => WorkerResponse::KeyProvisioned {
                key,
                announce: false,
            },
            Err(e) => WorkerResponse::KeyProvisionFailed {
                error: e.to_string(),
            },
        }
    }

    /// User-requested regeneration: always mints a fresh credential and
    /// overwrites the persisted one.
    fn handle_regenerate_key(&mut self) -> WorkerResponse {
        match self.gateway.provision_key() {
            Ok(fresh) => {
                if let Err(e) = self.store.set(&fresh) {
                    return WorkerResponse::KeyProvisionFailed {
                        error: e.to_string(),
                    };
                }
                WorkerResponse::KeyProvisioned {
                    key: fresh,
                    announce: true,
                }
            }
            Err(e) => WorkerResponse::KeyProvisionFailed {
                error: e.to_string(),
            },
        }
    }

    fn handle_clear_logs(&mut self) -> WorkerResponse {
        let key = match self.store.ensure(self.gateway.as_ref()) {
            Ok(key) => key,
            Err(e) => {
                return WorkerResponse::ClearFailed {
                    error: e.to_string(),
                }
            }
        };

        match self.gateway.clear_logs(&key) {
            Ok(()) => WorkerResponse::LogsCleared,
            Err(e) => WorkerResponse::ClearFailed {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{HistorySeries, Prediction, SummaryStats};
    use crate::gateway::{ClassifyOutcome, GatewayResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Scripted gateway that counts calls and records the keys it saw.
    #[derive(Default)]
    struct ScriptedGateway {
        provision_calls: AtomicUsize,
        classify_calls: AtomicUsize,
        keys_seen: Mutex<Vec<String>>,
        reject_keys: Vec<String>,
        next_keys: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn minting(keys: &[&str]) -> Self {
            Self {
                next_keys: Mutex::new(keys.iter().rev().map(|k| (*k).to_string()).collect()),
                ..Self::default()
            }
        }

        fn rejecting(key: &str, mint: &[&str]) -> Self {
            Self {
                reject_keys: vec![key.to_string()],
                next_keys: Mutex::new(mint.iter().rev().map(|k| (*k).to_string()).collect()),
                ..Self::default()
            }
        }
    }

    impl Gateway for ScriptedGateway {
        fn provision_key(&self) -> GatewayResult<String> {
            self.provision_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .next_keys
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| "sk_live_default".to_string()))
        }

        fn classify(&self, _text: &str, api_key: &str) -> GatewayResult<ClassifyOutcome> {
            self.classify_calls.fetch_add(1, Ordering::SeqCst);
            self.keys_seen.lock().unwrap().push(api_key.to_string());
            if self.reject_keys.iter().any(|k| k == api_key) {
                return Err(GatewayError::AuthRejected);
            }
            Ok(ClassifyOutcome {
                prediction: Prediction::Spam,
                log_id: 42,
            })
        }

        fn submit_feedback(&self, _log_id: i64, _feedback: FeedbackChoice) -> GatewayResult<()> {
            Ok(())
        }

        fn fetch_summary(&self) -> GatewayResult<SummaryStats> {
            Ok(SummaryStats::default())
        }

        fn fetch_history(&self) -> GatewayResult<HistorySeries> {
            Ok(HistorySeries::default())
        }

        fn clear_logs(&self, api_key: &str) -> GatewayResult<()> {
            self.keys_seen.lock().unwrap().push(api_key.to_string());
            Ok(())
        }
    }

    struct FailingGateway;

    impl Gateway for FailingGateway {
        fn provision_key(&self) -> GatewayResult<String> {
            Err(GatewayError::Transport("unreachable".to_string()))
        }
        fn classify(&self, _: &str, _: &str) -> GatewayResult<ClassifyOutcome> {
            Err(GatewayError::Transport("unreachable".to_string()))
        }
        fn submit_feedback(&self, _: i64, _: FeedbackChoice) -> GatewayResult<()> {
            Err(GatewayError::Transport("unreachable".to_string()))
        }
        fn fetch_summary(&self) -> GatewayResult<SummaryStats> {
            Err(GatewayError::Transport("unreachable".to_string()))
        }
        fn fetch_history(&self) -> GatewayResult<HistorySeries> {
            Err(GatewayError::Transport("unreachable".to_string()))
        }
        fn clear_logs(&self, _: &str) -> GatewayResult<()> {
            Err(GatewayError::Transport("unreachable".to_string()))
        }
    }

    fn worker_with(
        gateway: Arc<ScriptedGateway>,
        dir: &tempfile::TempDir,
        seed_key: Option<&str>,
    ) -> GatewayWorker {
        let mut store = CredentialStore::open(dir.path().join("api_key")).unwrap();
        if let Some(key) = seed_key {
            store.set(key).unwrap();
        }
        GatewayWorker::new(Box::new(SharedGateway(gateway)), store)
    }

    /// Adapter so a test can keep a handle on the gateway the worker owns.
    struct SharedGateway(Arc<ScriptedGateway>);

    impl Gateway for SharedGateway {
        fn provision_key(&self) -> GatewayResult<String> {
            self.0.provision_key()
        }
        fn classify(&self, text: &str, api_key: &str) -> GatewayResult<ClassifyOutcome> {
            self.0.classify(text, api_key)
        }
        fn submit_feedback(&self, log_id: i64, feedback: FeedbackChoice) -> GatewayResult<()> {
            self.0.submit_feedback(log_id, feedback)
        }
        fn fetch_summary(&self) -> GatewayResult<SummaryStats> {
            self.0.fetch_summary()
        }
        fn fetch_history(&self) -> GatewayResult<HistorySeries> {
            self.0.fetch_history()
        }
        fn clear_logs(&self, api_key: &str) -> GatewayResult<()> {
            self.0.clear_logs(api_key)
        }
    }

    #[test]
    fn classify_with_valid_key_returns_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::minting(&[]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, Some("sk_live_good"));

        let response = worker.handle(WorkerMessage::Classify {
            text: "hello".to_string(),
        });

        assert_eq!(
            response,
            WorkerResponse::Classified {
                log_id: 42,
                prediction: Prediction::Spam,
            }
        );
        assert_eq!(gateway.provision_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            gateway.keys_seen.lock().unwrap().as_slice(),
            &["sk_live_good".to_string()]
        );
    }

    #[test]
    fn auth_rejection_refreshes_once_and_aborts() {
        // Pinned one-shot policy: exactly one regeneration, zero extra
        // classify calls, and the submission is dropped.
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::rejecting("sk_live_stale", &["sk_live_new"]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, Some("sk_live_stale"));

        let response = worker.handle(WorkerMessage::Classify {
            text: "hello".to_string(),
        });

        assert_eq!(response, WorkerResponse::ClassifyAborted);
        assert_eq!(gateway.provision_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.classify_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn refreshed_credential_is_persisted_and_used_next_time() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::rejecting("sk_live_stale", &["sk_live_new"]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, Some("sk_live_stale"));

        worker.handle(WorkerMessage::Classify {
            text: "first".to_string(),
        });

        // The replacement key reached the store and the disk.
        let reopened = CredentialStore::open(dir.path().join("api_key")).unwrap();
        assert_eq!(reopened.get(), Some("sk_live_new"));

        // A re-triggered submission uses the fresh key and succeeds.
        let response = worker.handle(WorkerMessage::Classify {
            text: "second".to_string(),
        });
        assert!(matches!(response, WorkerResponse::Classified { .. }));
        assert_eq!(
            gateway.keys_seen.lock().unwrap().as_slice(),
            &["sk_live_stale".to_string(), "sk_live_new".to_string()]
        );
    }

    #[test]
    fn classify_provisions_silently_when_no_key_exists() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::minting(&["sk_live_first"]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, None);

        let response = worker.handle(WorkerMessage::Classify {
            text: "hello".to_string(),
        });

        assert!(matches!(response, WorkerResponse::Classified { .. }));
        assert_eq!(gateway.provision_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            gateway.keys_seen.lock().unwrap().as_slice(),
            &["sk_live_first".to_string()]
        );
    }

    #[test]
    fn transport_failure_reports_classify_failed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path().join("api_key")).unwrap();
        store.set("sk_live_any").unwrap();
        let mut worker = GatewayWorker::new(Box::new(FailingGateway), store);

        let response = worker.handle(WorkerMessage::Classify {
            text: "hello".to_string(),
        });
        assert!(matches!(response, WorkerResponse::ClassifyFailed { .. }));
    }

    #[test]
    fn regenerate_always_overwrites_persisted_key() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::minting(&["sk_live_regen"]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, Some("sk_live_old"));

        let response = worker.handle(WorkerMessage::RegenerateKey);

        assert_eq!(
            response,
            WorkerResponse::KeyProvisioned {
                key: "sk_live_regen".to_string(),
                announce: true,
            }
        );
        let reopened = CredentialStore::open(dir.path().join("api_key")).unwrap();
        assert_eq!(reopened.get(), Some("sk_live_regen"));
    }

    #[test]
    fn ensure_key_reports_existing_key_without_provisioning() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::minting(&[]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, Some("sk_live_kept"));

        let response = worker.handle(WorkerMessage::EnsureKey);

        assert_eq!(
            response,
            WorkerResponse::KeyProvisioned {
                key: "sk_live_kept".to_string(),
                announce: false,
            }
        );
        assert_eq!(gateway.provision_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn clear_logs_sends_current_credential() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = Arc::new(ScriptedGateway::minting(&[]));
        let mut worker = worker_with(Arc::clone(&gateway), &dir, Some("sk_live_admin"));

        let response = worker.handle(WorkerMessage::ClearLogs);

        assert_eq!(response, WorkerResponse::LogsCleared);
        assert_eq!(
            gateway.keys_seen.lock().unwrap().as_slice(),
            &["sk_live_admin".to_string()]
        );
    }
}
