//! Wire and data records shared between the gateway, worker, and UI layers.
//!
//! These types mirror the JSON payloads of the classification service. They are
//! deliberately separate from UI view models: records carry what the server said,
//! view models carry what gets drawn.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Classification verdict for a single message.
///
/// The service emits exactly these two labels; anything else is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    /// The message matches spam patterns.
    Spam,
    /// The message is legitimate ("ham").
    Ham,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spam => write!(f, "Spam"),
            Self::Ham => write!(f, "Ham"),
        }
    }
}

/// User verdict on whether a classification was right.
///
/// Sent to the service as the body of a feedback submission and echoed back in
/// the `user_feedback` field of logged records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackChoice {
    /// The prediction matched the user's judgment.
    Correct,
    /// The prediction was wrong.
    Incorrect,
}

impl fmt::Display for FeedbackChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct"),
            Self::Incorrect => write!(f, "Incorrect"),
        }
    }
}

/// One stored classification, as returned inside the summary feed.
///
/// The server owns these records; the client only ever reads them and holds the
/// `id` of the most recently displayed one to attach feedback to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Server-assigned log identifier.
    pub id: i64,

    /// The classified message text.
    pub text: String,

    /// Verdict the model produced.
    pub prediction: Prediction,

    /// Server-side timestamp string (SQLite `CURRENT_TIMESTAMP` format).
    pub timestamp: String,

    /// User feedback, absent until the user weighs in.
    #[serde(default)]
    pub user_feedback: Option<FeedbackChoice>,
}

/// Outcome counts by label.
///
/// The server omits labels with no occurrences, so both fields default to zero
/// when absent from the JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// All-time count of spam verdicts.
    #[serde(rename = "Spam", default)]
    pub spam: u64,

    /// All-time count of ham verdicts.
    #[serde(rename = "Ham", default)]
    pub ham: u64,
}

/// Summary statistics feed (`GET /stats`).
///
/// Combines the all-time totals with the bounded most-recent-first activity log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total number of classification requests served.
    pub total_requests: u64,

    /// Per-label outcome counts.
    #[serde(default)]
    pub distribution: Distribution,

    /// Most recent classifications, newest first. Length is capped server-side.
    #[serde(default)]
    pub recent_logs: Vec<ClassificationRecord>,
}

/// Per-day outcome counts within the historical feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Spam verdicts on this day.
    #[serde(rename = "Spam", default)]
    pub spam: u64,

    /// Ham verdicts on this day.
    #[serde(rename = "Ham", default)]
    pub ham: u64,
}

/// Historical time-series feed (`GET /stats/history`).
///
/// The wire format is a JSON object mapping date strings to per-day counts. The
/// server emits keys in chronological order and that order is load-bearing: it
/// becomes the label order of the history chart. A plain `HashMap` would lose
/// it, so deserialization goes through a map visitor into an ordered vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySeries {
    days: Vec<(String, DayCounts)>,
}

impl HistorySeries {
    /// Builds a series from already-ordered day entries.
    #[must_use]
    pub fn from_days(days: Vec<(String, DayCounts)>) -> Self {
        Self { days }
    }

    /// Returns the date keys in server order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.days.iter().map(|(date, _)| date.as_str()).collect()
    }

    /// Returns the spam counts aligned with [`labels`](Self::labels).
    #[must_use]
    pub fn spam_series(&self) -> Vec<u64> {
        self.days.iter().map(|(_, counts)| counts.spam).collect()
    }

    /// Returns the ham counts aligned with [`labels`](Self::labels).
    #[must_use]
    pub fn ham_series(&self) -> Vec<u64> {
        self.days.iter().map(|(_, counts)| counts.ham).collect()
    }

    /// Number of days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when the server reported no history at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates over `(date, counts)` pairs in server order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, DayCounts)> {
        self.days.iter()
    }
}

impl<'de> Deserialize<'de> for HistorySeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeriesVisitor;

        impl<'de> Visitor<'de> for SeriesVisitor {
            type Value = HistorySeries;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of date strings to per-day counts")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut days = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((date, counts)) = map.next_entry::<String, DayCounts>()? {
                    days.push((date, counts));
                }
                Ok(HistorySeries { days })
            }
        }

        deserializer.deserialize_map(SeriesVisitor)
    }
}

impl Serialize for HistorySeries {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (date, counts) in &self.days {
            map.serialize_entry(date, counts)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_labels_round_trip_service_spelling() {
        assert_eq!(serde_json::to_string(&Prediction::Spam).unwrap(), "\"Spam\"");
        let parsed: Prediction = serde_json::from_str("\"Ham\"").unwrap();
        assert_eq!(parsed, Prediction::Ham);
    }

    #[test]
    fn distribution_defaults_absent_labels_to_zero() {
        let parsed: Distribution = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.spam, 0);
        assert_eq!(parsed.ham, 0);

        let partial: Distribution = serde_json::from_str(r#"{"Spam": 7}"#).unwrap();
        assert_eq!(partial.spam, 7);
        assert_eq!(partial.ham, 0);
    }

    #[test]
    fn summary_tolerates_missing_optional_fields() {
        let parsed: SummaryStats = serde_json::from_str(r#"{"total_requests": 3}"#).unwrap();
        assert_eq!(parsed.total_requests, 3);
        assert_eq!(parsed.distribution, Distribution::default());
        assert!(parsed.recent_logs.is_empty());
    }

    #[test]
    fn record_feedback_is_optional() {
        let json = r#"{
            "id": 12,
            "text": "free prize, click now",
            "prediction": "Spam",
            "timestamp": "2024-01-05 09:12:44",
            "user_feedback": null
        }"#;
        let record: ClassificationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(record.prediction, Prediction::Spam);
        assert!(record.user_feedback.is_none());

        let with_feedback = r#"{
            "id": 13,
            "text": "see you at six",
            "prediction": "Ham",
            "timestamp": "2024-01-05 09:13:02",
            "user_feedback": "Correct"
        }"#;
        let record: ClassificationRecord = serde_json::from_str(with_feedback).unwrap();
        assert_eq!(record.user_feedback, Some(FeedbackChoice::Correct));
    }

    #[test]
    fn history_preserves_server_key_order() {
        let json = r#"{
            "2024-01-01": {"Spam": 3, "Ham": 5},
            "2024-01-02": {"Spam": 1, "Ham": 2}
        }"#;
        let series: HistorySeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.labels(), vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.spam_series(), vec![3, 1]);
        assert_eq!(series.ham_series(), vec![5, 2]);
    }

    #[test]
    fn history_order_is_not_resorted() {
        // Key order is whatever the server sent, even if not lexicographic.
        let json = r#"{
            "2024-02-10": {"Spam": 1, "Ham": 0},
            "2024-01-31": {"Spam": 4, "Ham": 9}
        }"#;
        let series: HistorySeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.labels(), vec!["2024-02-10", "2024-01-31"]);
    }

    #[test]
    fn history_day_counts_default_missing_labels() {
        let json = r#"{"2024-03-01": {"Ham": 2}}"#;
        let series: HistorySeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.spam_series(), vec![0]);
        assert_eq!(series.ham_series(), vec![2]);
    }
}
