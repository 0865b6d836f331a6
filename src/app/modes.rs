//! View and workflow state machine types.
//!
//! This module defines the two enums that govern what the client shows and
//! what the classification workflow is doing. Exactly one view is active at a
//! time, and the workflow occupies exactly one phase.

use std::fmt;

/// One of the four mutually exclusive top-level screens.
///
/// Switching views is idempotent: re-selecting the active view triggers no
/// on-enter work. [`Analytics`](View::Analytics) fetches the historical series
/// on entry; [`ApiAccess`](View::ApiAccess) refreshes the displayed key and
/// usage example; the other two only become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Classification input, verdict, counters, distribution chart, and the
    /// recent-activity table. The initial view.
    Dashboard,

    /// Per-day historical chart of spam/ham counts.
    Analytics,

    /// Current API key and a host-substituted usage example.
    ApiAccess,

    /// Administrative actions (clearing server logs).
    Settings,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Analytics => write!(f, "Analytics"),
            Self::ApiAccess => write!(f, "API Access"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

/// Phase of the classify → display → feedback cycle.
///
/// The cycle restarts at [`Submitting`](Phase::Submitting) on the next
/// submission regardless of the current phase. Every failure path returns to
/// [`Idle`](Phase::Idle); nothing in the workflow is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No classification in flight or displayed.
    Idle,

    /// A classify request is in flight; submission is disabled and the
    /// pending indicator is shown.
    Submitting,

    /// A verdict is displayed and the feedback prompt is open.
    AwaitingFeedback,

    /// Feedback was sent; the prompt shows the thanks acknowledgment.
    Thanked,
}
