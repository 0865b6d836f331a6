//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data: formatted rows, resolved colors, substituted text.

use crate::app::modes::View;
use crate::domain::record::{ClassificationRecord, Prediction};
use crate::ui::charts::{DistributionChart, HistoryChart};
use crate::ui::theme::Theme;

/// Maximum characters of message text shown in a table row.
const TABLE_TEXT_WIDTH: usize = 40;

/// Complete UI view model for one render pass.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Navigation header state.
    pub header: HeaderInfo,

    /// Footer keybinding hints.
    pub footer: FooterInfo,

    /// Transient user-visible notice, if any.
    pub notice: Option<String>,

    /// The active view's body.
    pub body: ViewBody,
}

/// Body payload for exactly one of the four views.
#[derive(Debug, Clone)]
pub enum ViewBody {
    /// Classification input, verdict, counters, chart, and activity table.
    Dashboard(DashboardView),
    /// Historical chart.
    Analytics(AnalyticsView),
    /// Credential display and usage example.
    ApiAccess(ApiAccessView),
    /// Administrative actions.
    Settings(SettingsView),
}

/// Navigation header state.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// The active view (highlighted tab).
    pub active: View,
}

/// Footer keybinding hints.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active view.
    pub keybindings: String,
}

/// Dashboard body: the classify cycle plus the summary surfaces.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// True while a classification is in flight.
    pub pending: bool,

    /// The displayed verdict, if any.
    pub verdict: Option<VerdictPanel>,

    /// Feedback prompt state.
    pub feedback: FeedbackPanel,

    /// The three numeric counters.
    pub counters: Counters,

    /// Distribution chart data.
    pub chart: DistributionChart,

    /// Fully regenerated recent-activity rows, newest first.
    pub table_rows: Vec<LogRow>,
}

/// Analytics body.
#[derive(Debug, Clone)]
pub struct AnalyticsView {
    /// The history chart, `None` until the first fetch completes.
    pub chart: Option<HistoryChart>,
}

/// API Access body.
#[derive(Debug, Clone)]
pub struct ApiAccessView {
    /// Current credential, if known.
    pub key: Option<String>,

    /// Host-substituted usage example.
    pub example: Option<String>,
}

/// Settings body.
#[derive(Debug, Clone)]
pub struct SettingsView {
    /// Hint text describing the available action.
    pub hint: String,
}

/// Rendered verdict: title, explanation, and resolved color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictPanel {
    /// Headline, e.g. "Warning: Spam Detected".
    pub title: String,

    /// Explanatory line under the headline.
    pub detail: String,

    /// Hex color for the headline (danger or success).
    pub color: String,
}

/// Feedback prompt state on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackPanel {
    /// No verdict displayed; prompt hidden.
    Hidden,
    /// Verdict displayed; asking "was this right?".
    Prompt,
    /// Feedback sent; showing the thanks acknowledgment.
    Thanks,
}

/// The three numeric counters on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Total classification requests served.
    pub total: u64,
    /// All-time spam count.
    pub spam: u64,
    /// All-time ham count.
    pub ham: u64,
}

/// One fully formatted recent-activity table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// Record identifier, rendered as `#id`.
    pub id: String,

    /// Message text, truncated with an ellipsis when long.
    pub text: String,

    /// Prediction label ("Spam"/"Ham").
    pub prediction: String,

    /// Hex color for the prediction label.
    pub prediction_color: String,

    /// Human-readable time of day.
    pub time: String,

    /// Feedback value, or the empty-value marker `-`.
    pub feedback: String,
}

/// Builds the verdict panel for a prediction.
///
/// Spam resolves to the danger color, Ham to success; text matches the
/// service's demo copy. Pure and idempotent.
#[must_use]
pub fn verdict_panel(prediction: Prediction, theme: &Theme) -> VerdictPanel {
    match prediction {
        Prediction::Spam => VerdictPanel {
            title: "Warning: Spam Detected".to_string(),
            detail: "Contains patterns typical of spam.".to_string(),
            color: theme.colors.danger.clone(),
        },
        Prediction::Ham => VerdictPanel {
            title: "Safe: Legit Message".to_string(),
            detail: "No spam indicators found.".to_string(),
            color: theme.colors.success.clone(),
        },
    }
}

/// Formats one classification record as a table row.
#[must_use]
pub fn log_row(record: &ClassificationRecord, theme: &Theme) -> LogRow {
    let color = match record.prediction {
        Prediction::Spam => theme.colors.danger.clone(),
        Prediction::Ham => theme.colors.success.clone(),
    };

    LogRow {
        id: format!("#{}", record.id),
        text: truncate_text(&record.text, TABLE_TEXT_WIDTH),
        prediction: record.prediction.to_string(),
        prediction_color: color,
        time: format_time_of_day(&record.timestamp),
        feedback: record
            .user_feedback
            .map_or_else(|| "-".to_string(), |f| f.to_string()),
    }
}

/// Truncates text to `max` characters, appending an ellipsis when shortened.
///
/// Operates on characters, not bytes, so multi-byte text never splits.
fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Extracts a `HH:MM:SS` time of day from a server timestamp.
///
/// The service emits SQLite `CURRENT_TIMESTAMP` strings
/// (`YYYY-MM-DD HH:MM:SS`); ISO-8601 with a `T` separator is accepted too.
/// Unparseable timestamps pass through unchanged rather than hiding the row.
fn format_time_of_day(timestamp: &str) -> String {
    let formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for format in formats {
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(timestamp, format) {
            return parsed.format("%H:%M:%S").to_string();
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::FeedbackChoice;

    #[test]
    fn spam_verdict_uses_danger_color() {
        let theme = Theme::default();
        let panel = verdict_panel(Prediction::Spam, &theme);
        assert_eq!(panel.color, theme.colors.danger);
        assert_eq!(panel.title, "Warning: Spam Detected");
    }

    #[test]
    fn ham_verdict_uses_success_color() {
        let theme = Theme::default();
        let panel = verdict_panel(Prediction::Ham, &theme);
        assert_eq!(panel.color, theme.colors.success);
        assert_eq!(panel.title, "Safe: Legit Message");
    }

    #[test]
    fn verdict_is_idempotent() {
        let theme = Theme::default();
        assert_eq!(
            verdict_panel(Prediction::Spam, &theme),
            verdict_panel(Prediction::Spam, &theme)
        );
    }

    fn record(text: &str, feedback: Option<FeedbackChoice>) -> ClassificationRecord {
        ClassificationRecord {
            id: 17,
            text: text.to_string(),
            prediction: Prediction::Spam,
            timestamp: "2024-01-05 09:12:44".to_string(),
            user_feedback: feedback,
        }
    }

    #[test]
    fn log_row_formats_all_columns() {
        let theme = Theme::default();
        let row = log_row(&record("short message", Some(FeedbackChoice::Correct)), &theme);
        assert_eq!(row.id, "#17");
        assert_eq!(row.text, "short message");
        assert_eq!(row.prediction, "Spam");
        assert_eq!(row.prediction_color, theme.colors.danger);
        assert_eq!(row.time, "09:12:44");
        assert_eq!(row.feedback, "Correct");
    }

    #[test]
    fn log_row_marks_absent_feedback_with_dash() {
        let row = log_row(&record("hello", None), &Theme::default());
        assert_eq!(row.feedback, "-");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let long = "a".repeat(60);
        let row = log_row(&record(&long, None), &Theme::default());
        assert_eq!(row.text.chars().count(), 40);
        assert!(row.text.ends_with("..."));
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        let mut rec = record("hello", None);
        rec.timestamp = "not a time".to_string();
        let row = log_row(&rec, &Theme::default());
        assert_eq!(row.time, "not a time");
    }
}
