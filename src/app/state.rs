//! Application state and view model computation.
//!
//! This module defines [`AppState`], the explicit session context object the
//! whole client runs on: the single active view, the single workflow phase,
//! the single current-record reference, and the display copies of whatever the
//! worker last reported. Making these fields of one struct (rather than
//! free-floating variables) is what keeps the single-credential and
//! single-in-flight-record invariants enforceable.
//!
//! # State Components
//!
//! - **View / Phase**: which screen is visible and where the classify cycle is
//! - **Current record**: `current_log_id` correlates feedback with a verdict
//! - **Statistics snapshots**: last summary and history the worker delivered
//! - **Charts**: the persistent distribution chart and the rebuilt history chart
//! - **Credential display copy**: what the API Access view shows (the worker
//!   owns the persisted credential)

use crate::app::modes::{Phase, View};
use crate::domain::record::{Prediction, SummaryStats};
use crate::ui::charts::{DistributionChart, HistoryChart};
use crate::ui::theme::Theme;
use crate::ui::viewmodel;

/// Template for the API Access usage example. `{{host}}` and `{{key}}` are
/// substituted on entry to the view.
const API_EXAMPLE_TEMPLATE: &str = "curl -X POST {{host}}/predict \\\n  \
     -H 'Content-Type: application/json' \\\n  \
     -H 'x-api-key: {{key}}' \\\n  \
     -d '{\"text\": \"WIN a FREE cruise today\"}'";

/// Placeholder shown in the example before any credential is known.
const KEY_PLACEHOLDER: &str = "<your-api-key>";

/// Central application state container.
///
/// Mutated only by the event handler; rendered by computing a view model
/// snapshot. The worker thread never touches this directly.
pub struct AppState {
    /// The active view. Exactly one at a time.
    pub view: View,

    /// Phase of the classification workflow.
    pub phase: Phase,

    /// Identifier of the most recently displayed classification record.
    ///
    /// Set when a verdict arrives, cleared when a new submission begins.
    /// Feedback with no value here is silently ignored.
    pub current_log_id: Option<i64>,

    /// The displayed verdict, if any.
    pub verdict: Option<Prediction>,

    /// Transient user-visible notice (classify transport failure, logs
    /// cleared). Replaced wholesale; never accumulated.
    pub notice: Option<String>,

    /// Last summary snapshot the worker delivered.
    pub summary: Option<SummaryStats>,

    /// Distribution chart with persistent identity: constructed once, its
    /// data array is mutated in place on every summary refresh.
    pub distribution_chart: DistributionChart,

    /// History chart, rebuilt from scratch on every history fetch. `None`
    /// until the Analytics view has been entered at least once.
    pub history_chart: Option<HistoryChart>,

    /// Display copy of the current credential. The persisted original lives
    /// in the worker's credential store.
    pub api_key: Option<String>,

    /// Host- and key-substituted usage example for the API Access view,
    /// recomputed on entry.
    pub api_example: Option<String>,

    /// Base URL of the service, used for host substitution.
    pub base_url: String,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: Dashboard view, idle workflow, no data yet.
    #[must_use]
    pub fn new(base_url: String, theme: Theme) -> Self {
        Self {
            view: View::Dashboard,
            phase: Phase::Idle,
            current_log_id: None,
            verdict: None,
            notice: None,
            summary: None,
            distribution_chart: DistributionChart::new(),
            history_chart: None,
            api_key: None,
            api_example: None,
            base_url,
            theme,
        }
    }

    /// True while a classify request is in flight.
    ///
    /// Drives the pending indicator and disables submission. Cleared on every
    /// classify outcome, success or not.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Recomputes the API Access presentation values from the current
    /// credential and base URL.
    ///
    /// Rewrites the `{{host}}` placeholder with the configured service origin
    /// and the `{{key}}` placeholder with the credential (or a visible
    /// placeholder when none is known yet).
    pub fn refresh_api_view(&mut self) {
        let key = self.api_key.as_deref().unwrap_or(KEY_PLACEHOLDER);
        self.api_example = Some(
            API_EXAMPLE_TEMPLATE
                .replace("{{host}}", &self.base_url)
                .replace("{{key}}", key),
        );
    }

    /// Computes a renderable snapshot of the current state.
    ///
    /// The view model carries only display-ready data: formatted rows, resolved
    /// colors, substituted text. No business logic survives past this point.
    #[must_use]
    pub fn compute_viewmodel(&self) -> viewmodel::UiViewModel {
        let body = match self.view {
            View::Dashboard => viewmodel::ViewBody::Dashboard(self.compute_dashboard()),
            View::Analytics => viewmodel::ViewBody::Analytics(viewmodel::AnalyticsView {
                chart: self.history_chart.clone(),
            }),
            View::ApiAccess => viewmodel::ViewBody::ApiAccess(viewmodel::ApiAccessView {
                key: self.api_key.clone(),
                example: self.api_example.clone(),
            }),
            View::Settings => viewmodel::ViewBody::Settings(viewmodel::SettingsView {
                hint: ":clear-logs deletes all server-side history".to_string(),
            }),
        };

        viewmodel::UiViewModel {
            header: viewmodel::HeaderInfo { active: self.view },
            footer: viewmodel::FooterInfo {
                keybindings: Self::footer_for(self.view),
            },
            notice: self.notice.clone(),
            body,
        }
    }

    fn compute_dashboard(&self) -> viewmodel::DashboardView {
        let verdict = self
            .verdict
            .map(|prediction| viewmodel::verdict_panel(prediction, &self.theme));

        let feedback = match self.phase {
            Phase::AwaitingFeedback => viewmodel::FeedbackPanel::Prompt,
            Phase::Thanked => viewmodel::FeedbackPanel::Thanks,
            Phase::Idle | Phase::Submitting => viewmodel::FeedbackPanel::Hidden,
        };

        let counters = self.summary.as_ref().map_or_else(
            viewmodel::Counters::default,
            |summary| viewmodel::Counters {
                total: summary.total_requests,
                spam: summary.distribution.spam,
                ham: summary.distribution.ham,
            },
        );

        let table_rows = self.summary.as_ref().map_or_else(Vec::new, |summary| {
            summary
                .recent_logs
                .iter()
                .map(|record| viewmodel::log_row(record, &self.theme))
                .collect()
        });

        viewmodel::DashboardView {
            pending: self.is_busy(),
            verdict,
            feedback,
            counters,
            chart: self.distribution_chart.clone(),
            table_rows,
        }
    }

    fn footer_for(view: View) -> String {
        match view {
            View::Dashboard => {
                "type a message to classify  :y/:n feedback  :analytics :api :settings  :q quit"
                    .to_string()
            }
            View::Analytics => ":dashboard :api :settings  :q quit".to_string(),
            View::ApiAccess => ":regen new key  :dashboard :analytics :settings  :q quit".to_string(),
            View::Settings => ":clear-logs  :dashboard :analytics :api  :q quit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new("http://127.0.0.1:8000".to_string(), Theme::default())
    }

    #[test]
    fn starts_on_dashboard_idle() {
        let state = state();
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.current_log_id.is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn api_view_substitutes_host_and_key() {
        let mut state = state();
        state.api_key = Some("sk_live_xyz".to_string());
        state.refresh_api_view();

        let example = state.api_example.unwrap();
        assert!(example.contains("http://127.0.0.1:8000/predict"));
        assert!(example.contains("sk_live_xyz"));
        assert!(!example.contains("{{host}}"));
        assert!(!example.contains("{{key}}"));
    }

    #[test]
    fn api_view_shows_placeholder_without_key() {
        let mut state = state();
        state.refresh_api_view();
        assert!(state.api_example.unwrap().contains("<your-api-key>"));
    }

    #[test]
    fn dashboard_counters_default_to_zero_without_summary() {
        let state = state();
        let vm = state.compute_viewmodel();
        match vm.body {
            viewmodel::ViewBody::Dashboard(dashboard) => {
                assert_eq!(dashboard.counters.total, 0);
                assert_eq!(dashboard.counters.spam, 0);
                assert_eq!(dashboard.counters.ham, 0);
                assert!(dashboard.table_rows.is_empty());
            }
            _ => panic!("expected dashboard body"),
        }
    }
}
