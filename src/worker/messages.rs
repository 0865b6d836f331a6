//! Message protocol between the event loop and the worker thread.
//!
//! Every network operation the client performs is a [`WorkerMessage`]; every
//! completed operation comes back as exactly one [`WorkerResponse`]. The
//! one-response-per-message invariant is what lets the handler guarantee its
//! cleanup transitions (clearing the pending indicator on every classify
//! outcome, for instance).

use crate::domain::record::{FeedbackChoice, HistorySeries, Prediction, SummaryStats};

/// Requests sent from the event loop to the worker thread.
///
/// Each variant corresponds to one network operation. The worker performs the
/// call (including the credential handling the operation needs) and replies
/// with the matching [`WorkerResponse`] variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Classify a message. The worker ensures a credential exists first and
    /// applies the one-shot refresh-and-abort policy on authorization failure.
    Classify {
        /// Message text, already trimmed and non-empty.
        text: String,
    },

    /// Submit correctness feedback for a logged classification.
    SubmitFeedback {
        /// Identifier of the record the feedback belongs to.
        log_id: i64,
        /// The user's verdict.
        feedback: FeedbackChoice,
    },

    /// Fetch the summary statistics feed.
    RefreshSummary,

    /// Fetch the historical time-series feed.
    RefreshHistory,

    /// Provision a credential only if none is persisted yet (startup path).
    EnsureKey,

    /// Provision a fresh credential unconditionally, replacing the current one.
    RegenerateKey,

    /// Delete all server-side logs.
    ClearLogs,
}

/// Responses sent from the worker thread back to the event loop.
///
/// Failure variants carry a message for logging; whether a failure is surfaced
/// to the user is the event handler's decision, not the worker's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A classify call succeeded.
    Classified {
        /// Identifier of the stored classification record.
        log_id: i64,
        /// The verdict to display.
        prediction: Prediction,
    },

    /// The service rejected the credential; a fresh one was provisioned and
    /// persisted, and the submission was dropped without a retry. The user
    /// must resubmit.
    ClassifyAborted,

    /// A classify call failed in transit. Surfaced to the user.
    ClassifyFailed {
        /// Description of the failure.
        error: String,
    },

    /// Feedback was accepted by the service.
    FeedbackSubmitted {
        /// Identifier of the record the feedback was attached to.
        log_id: i64,
    },

    /// Feedback submission failed. Logged, never surfaced.
    FeedbackFailed {
        /// Description of the failure.
        error: String,
    },

    /// The summary feed was fetched.
    SummaryLoaded {
        /// The fresh summary snapshot.
        summary: SummaryStats,
    },

    /// The summary fetch failed. Logged; stale UI stays in place.
    SummaryFailed {
        /// Description of the failure.
        error: String,
    },

    /// The historical feed was fetched.
    HistoryLoaded {
        /// The fresh series in server key order.
        series: HistorySeries,
    },

    /// The history fetch failed. Logged; stale chart stays in place.
    HistoryFailed {
        /// Description of the failure.
        error: String,
    },

    /// A credential is available (either pre-existing or freshly provisioned).
    KeyProvisioned {
        /// The current credential.
        key: String,
        /// Whether the user explicitly asked for it (reveal on the API view)
        /// as opposed to silent startup/refresh provisioning.
        announce: bool,
    },

    /// Credential provisioning failed. Logged, never surfaced.
    KeyProvisionFailed {
        /// Description of the failure.
        error: String,
    },

    /// Server logs were deleted. Triggers a summary refresh.
    LogsCleared,

    /// Log clearing failed. Logged, never surfaced.
    ClearFailed {
        /// Description of the failure.
        error: String,
    },
}
