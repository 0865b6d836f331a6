//! Event handling and state transition logic.
//!
//! This module implements the event handler that drives the whole client:
//! user commands and worker responses come in, state mutations happen, and
//! actions (worker messages, quit) come out. All control flow of the
//! classification workflow and the view machine lives here; the handler
//! itself performs no I/O.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal shim or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! # Failure policy
//!
//! Nothing here is fatal. Classify transport failures surface a notice; every
//! other failure is logged and leaves the UI in place (stale statistics are
//! preferred over an error screen). The only automatic retry anywhere is the
//! worker's single silent credential refresh.

use crate::app::modes::{Phase, View};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::record::FeedbackChoice;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user commands or completed worker operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user submitted text for classification. Blank input is ignored.
    SubmitText(String),

    /// The user answered the feedback prompt. Ignored when no classification
    /// has completed in the current cycle.
    Feedback(FeedbackChoice),

    /// The user navigated to a view. Idempotent for the active view.
    SwitchView(View),

    /// The user asked for a fresh API key (API Access view).
    RegenerateKey,

    /// The user asked to delete all server-side logs (Settings view).
    ClearLogs,

    /// The user asked to quit.
    Quit,

    /// A worker operation completed.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a redraw, and the side
/// effects to run in order.
///
/// # Errors
///
/// Reserved for state-mutation failures; the current transitions are
/// infallible, but the signature matches the rest of the crate's error
/// handling so the shim treats all layers uniformly.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::SubmitText(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                // Silently ignored; no request is issued for blank input.
                tracing::debug!("ignoring empty submission");
                return Ok((false, vec![]));
            }

            tracing::debug!(text_len = trimmed.len(), "submitting classification");
            state.phase = Phase::Submitting;
            state.current_log_id = None;
            state.verdict = None;
            state.notice = None;

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::Classify {
                    text: trimmed.to_string(),
                })],
            ))
        }

        Event::Feedback(choice) => {
            let Some(log_id) = state.current_log_id else {
                // Nothing to attach feedback to; silently ignored.
                tracing::debug!("feedback with no current record, ignoring");
                return Ok((false, vec![]));
            };

            tracing::debug!(log_id = log_id, feedback = %choice, "submitting feedback");
            state.phase = Phase::Thanked;

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::SubmitFeedback {
                    log_id,
                    feedback: *choice,
                })],
            ))
        }

        Event::SwitchView(target) => {
            if state.view == *target {
                tracing::debug!(view = %target, "view already active");
                return Ok((false, vec![]));
            }

            tracing::debug!(from = %state.view, to = %target, "switching view");
            state.view = *target;

            let actions = match target {
                View::Analytics => {
                    vec![Action::PostToWorker(WorkerMessage::RefreshHistory)]
                }
                View::ApiAccess => {
                    state.refresh_api_view();
                    vec![]
                }
                View::Dashboard | View::Settings => vec![],
            };

            Ok((true, actions))
        }

        Event::RegenerateKey => Ok((
            false,
            vec![Action::PostToWorker(WorkerMessage::RegenerateKey)],
        )),

        Event::ClearLogs => Ok((false, vec![Action::PostToWorker(WorkerMessage::ClearLogs)])),

        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies a completed worker operation to the state.
///
/// Every classify outcome arm leaves `Submitting` — this is the guaranteed
/// cleanup the workflow relies on: the pending indicator clears and submission
/// re-enables no matter how the request ended.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::Classified { log_id, prediction } => {
            tracing::debug!(log_id = log_id, prediction = %prediction, "verdict received");
            state.current_log_id = Some(*log_id);
            state.verdict = Some(*prediction);
            state.phase = Phase::AwaitingFeedback;

            // Fire-and-forget relative to the display; may race with feedback.
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::RefreshSummary)],
            ))
        }

        WorkerResponse::ClassifyAborted => {
            // The credential was refreshed behind the scenes and the request
            // dropped. Intentionally no automatic resubmission.
            tracing::debug!("classification aborted after credential refresh");
            state.phase = Phase::Idle;
            Ok((true, vec![]))
        }

        WorkerResponse::ClassifyFailed { error } => {
            tracing::warn!(error = %error, "classification failed");
            state.phase = Phase::Idle;
            state.notice = Some("Error analyzing message".to_string());
            Ok((true, vec![]))
        }

        WorkerResponse::FeedbackSubmitted { log_id } => {
            tracing::debug!(log_id = log_id, "feedback accepted");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::RefreshSummary)],
            ))
        }

        WorkerResponse::FeedbackFailed { error } => {
            tracing::warn!(error = %error, "feedback submission failed");
            Ok((false, vec![]))
        }

        WorkerResponse::SummaryLoaded { summary } => {
            tracing::debug!(
                total = summary.total_requests,
                spam = summary.distribution.spam,
                ham = summary.distribution.ham,
                recent = summary.recent_logs.len(),
                "summary refreshed"
            );
            state
                .distribution_chart
                .update(summary.distribution.spam, summary.distribution.ham);
            state.summary = Some(summary.clone());
            Ok((true, vec![]))
        }

        WorkerResponse::SummaryFailed { error } => {
            tracing::warn!(error = %error, "summary refresh failed, keeping stale view");
            Ok((false, vec![]))
        }

        WorkerResponse::HistoryLoaded { series } => {
            tracing::debug!(days = series.len(), "history refreshed");
            state.history_chart = Some(crate::ui::charts::HistoryChart::build(series));
            Ok((true, vec![]))
        }

        WorkerResponse::HistoryFailed { error } => {
            tracing::warn!(error = %error, "history refresh failed, keeping stale chart");
            Ok((false, vec![]))
        }

        WorkerResponse::KeyProvisioned { key, announce } => {
            tracing::debug!(announce = announce, "credential available");
            state.api_key = Some(key.clone());
            if state.view == View::ApiAccess {
                state.refresh_api_view();
            }
            Ok((*announce && state.view == View::ApiAccess, vec![]))
        }

        WorkerResponse::KeyProvisionFailed { error } => {
            tracing::warn!(error = %error, "credential provisioning failed");
            Ok((false, vec![]))
        }

        WorkerResponse::LogsCleared => {
            tracing::debug!("server logs cleared");
            state.notice = Some("Logs cleared".to_string());
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::RefreshSummary)],
            ))
        }

        WorkerResponse::ClearFailed { error } => {
            tracing::warn!(error = %error, "log clearing failed");
            Ok((false, vec![]))
        }
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SubmitText(_) => "SubmitText",
        Event::Feedback(_) => "Feedback",
        Event::SwitchView(_) => "SwitchView",
        Event::RegenerateKey => "RegenerateKey",
        Event::ClearLogs => "ClearLogs",
        Event::Quit => "Quit",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Distribution, HistorySeries, Prediction, SummaryStats};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new("http://127.0.0.1:8000".to_string(), Theme::default())
    }

    fn classify_actions(actions: &[Action]) -> usize {
        actions
            .iter()
            .filter(|a| matches!(a, Action::PostToWorker(WorkerMessage::Classify { .. })))
            .count()
    }

    #[test]
    fn blank_submission_issues_nothing_and_changes_nothing() {
        let mut state = state();
        for text in ["", "   ", "\t\n"] {
            let (render, actions) =
                handle_event(&mut state, &Event::SubmitText(text.to_string())).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
            assert_eq!(state.phase, Phase::Idle);
        }
    }

    #[test]
    fn submission_enters_submitting_and_clears_prior_record() {
        let mut state = state();
        state.current_log_id = Some(41);
        state.verdict = Some(Prediction::Ham);

        let (render, actions) =
            handle_event(&mut state, &Event::SubmitText("  free prize  ".to_string())).unwrap();

        assert!(render);
        assert_eq!(state.phase, Phase::Submitting);
        assert!(state.is_busy());
        assert!(state.current_log_id.is_none());
        assert!(state.verdict.is_none());
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::Classify {
                text: "free prize".to_string()
            })]
        );
    }

    #[test]
    fn feedback_without_record_is_a_no_op() {
        let mut state = state();
        let (render, actions) =
            handle_event(&mut state, &Event::Feedback(FeedbackChoice::Correct)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn feedback_with_record_thanks_and_submits() {
        let mut state = state();
        state.current_log_id = Some(7);
        state.phase = Phase::AwaitingFeedback;

        let (render, actions) =
            handle_event(&mut state, &Event::Feedback(FeedbackChoice::Incorrect)).unwrap();

        assert!(render);
        assert_eq!(state.phase, Phase::Thanked);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::SubmitFeedback {
                log_id: 7,
                feedback: FeedbackChoice::Incorrect,
            })]
        );
    }

    #[test]
    fn switching_to_active_view_is_idempotent() {
        let mut state = state();
        let (render, actions) =
            handle_event(&mut state, &Event::SwitchView(View::Dashboard)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn switching_to_analytics_fetches_history_exactly_once() {
        let mut state = state();
        let (render, actions) =
            handle_event(&mut state, &Event::SwitchView(View::Analytics)).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::RefreshHistory)]
        );

        // Re-selecting the now-active view fetches nothing.
        let (_, actions) = handle_event(&mut state, &Event::SwitchView(View::Analytics)).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn switching_to_api_access_substitutes_presentation_values() {
        let mut state = state();
        state.api_key = Some("sk_live_visible".to_string());

        handle_event(&mut state, &Event::SwitchView(View::ApiAccess)).unwrap();

        let example = state.api_example.as_deref().unwrap();
        assert!(example.contains("sk_live_visible"));
        assert!(example.contains("http://127.0.0.1:8000"));
    }

    #[test]
    fn verdict_response_opens_feedback_and_refreshes_summary() {
        let mut state = state();
        state.phase = Phase::Submitting;

        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Classified {
                log_id: 99,
                prediction: Prediction::Spam,
            }),
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.phase, Phase::AwaitingFeedback);
        assert_eq!(state.current_log_id, Some(99));
        assert_eq!(state.verdict, Some(Prediction::Spam));
        assert!(!state.is_busy());
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::RefreshSummary)]
        );
    }

    #[test]
    fn aborted_classification_returns_to_idle_without_resubmitting() {
        // Pinned behavior: after a silent credential refresh the submission is
        // dropped, not retried. The user must trigger it again.
        let mut state = state();
        state.phase = Phase::Submitting;

        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::ClassifyAborted),
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.is_busy());
        assert_eq!(classify_actions(&actions), 0);
        assert!(state.notice.is_none());
    }

    #[test]
    fn failed_classification_surfaces_notice_and_re_enables_submission() {
        let mut state = state();
        state.phase = Phase::Submitting;

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::ClassifyFailed {
                error: "connection refused".to_string(),
            }),
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.notice.as_deref(), Some("Error analyzing message"));
    }

    #[test]
    fn summary_response_updates_chart_in_place() {
        let mut state = state();
        let summary = SummaryStats {
            total_requests: 10,
            distribution: Distribution { spam: 4, ham: 6 },
            recent_logs: vec![],
        };

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SummaryLoaded { summary }),
        )
        .unwrap();

        assert_eq!(state.distribution_chart.spam(), 4);
        assert_eq!(state.distribution_chart.ham(), 6);
        assert_eq!(state.summary.as_ref().unwrap().total_requests, 10);
    }

    #[test]
    fn summary_failure_keeps_stale_snapshot() {
        let mut state = state();
        let summary = SummaryStats {
            total_requests: 3,
            ..SummaryStats::default()
        };
        state.summary = Some(summary);

        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SummaryFailed {
                error: "timeout".to_string(),
            }),
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.summary.as_ref().unwrap().total_requests, 3);
    }

    #[test]
    fn history_response_rebuilds_chart_preserving_order() {
        let mut state = state();
        let series: HistorySeries = serde_json::from_str(
            r#"{"2024-01-01":{"Spam":3,"Ham":5},"2024-01-02":{"Spam":1,"Ham":2}}"#,
        )
        .unwrap();

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::HistoryLoaded { series }),
        )
        .unwrap();

        let chart = state.history_chart.as_ref().unwrap();
        assert_eq!(chart.labels(), &["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.spam(), &[3, 1]);
        assert_eq!(chart.ham(), &[5, 2]);
    }

    #[test]
    fn feedback_confirmation_triggers_summary_refresh() {
        let mut state = state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::FeedbackSubmitted { log_id: 5 }),
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::RefreshSummary)]
        );
    }

    #[test]
    fn feedback_failure_changes_nothing() {
        let mut state = state();
        state.phase = Phase::Thanked;
        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::FeedbackFailed {
                error: "timeout".to_string(),
            }),
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.phase, Phase::Thanked);
    }

    #[test]
    fn cleared_logs_refresh_summary_and_notify() {
        let mut state = state();
        let (render, actions) =
            handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::LogsCleared)).unwrap();
        assert!(render);
        assert_eq!(state.notice.as_deref(), Some("Logs cleared"));
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::RefreshSummary)]
        );
    }

    #[test]
    fn provisioned_key_updates_display_copy() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::KeyProvisioned {
                key: "sk_live_fresh".to_string(),
                announce: false,
            }),
        )
        .unwrap();
        assert_eq!(state.api_key.as_deref(), Some("sk_live_fresh"));
    }
}
