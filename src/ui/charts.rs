//! Chart adapters converting raw numeric feeds into chart-ready series.
//!
//! Two adapters with deliberately different lifecycles:
//!
//! - [`DistributionChart`] has persistent identity: it is constructed once and
//!   its two-slot data array is mutated in place on every summary refresh.
//! - [`HistoryChart`] is rebuilt wholesale from each historical fetch; the
//!   previous instance is simply replaced. Acceptable because the Analytics
//!   view refreshes only on explicit navigation, never on a timer.
//!
//! The adapters hold data only; how bars are drawn belongs to the renderer
//! components, so the orchestration core never touches drawing code.

use crate::domain::record::HistorySeries;

/// Labels of the two distribution categories, in data-array order.
pub const DISTRIBUTION_LABELS: [&str; 2] = ["Spam", "Ham"];

/// Two-category distribution chart with persistent identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionChart {
    /// Counts in [`DISTRIBUTION_LABELS`] order.
    data: [u64; 2],
}

impl Default for DistributionChart {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionChart {
    /// Creates an empty chart (both categories zero).
    #[must_use]
    pub fn new() -> Self {
        Self { data: [0, 0] }
    }

    /// Replaces the underlying data array in place.
    ///
    /// The chart instance itself survives; only its data changes.
    pub fn update(&mut self, spam: u64, ham: u64) {
        self.data = [spam, ham];
    }

    /// Current spam count.
    #[must_use]
    pub fn spam(&self) -> u64 {
        self.data[0]
    }

    /// Current ham count.
    #[must_use]
    pub fn ham(&self) -> u64 {
        self.data[1]
    }

    /// The raw data array in label order.
    #[must_use]
    pub fn data(&self) -> [u64; 2] {
        self.data
    }
}

/// Two-series line chart over the historical date keys.
///
/// Built fresh from every [`HistorySeries`]; label order is the server's key
/// order, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChart {
    labels: Vec<String>,
    spam: Vec<u64>,
    ham: Vec<u64>,
}

impl HistoryChart {
    /// Builds a chart from a fetched series, preserving key order.
    #[must_use]
    pub fn build(series: &HistorySeries) -> Self {
        Self {
            labels: series.labels().iter().map(ToString::to_string).collect(),
            spam: series.spam_series(),
            ham: series.ham_series(),
        }
    }

    /// Date labels in server order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Spam counts aligned with the labels.
    #[must_use]
    pub fn spam(&self) -> &[u64] {
        &self.spam
    }

    /// Ham counts aligned with the labels.
    #[must_use]
    pub fn ham(&self) -> &[u64] {
        &self.ham
    }

    /// Largest single-day count across both series, used for bar scaling.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.spam
            .iter()
            .chain(self.ham.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// True when the server reported no history.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_starts_at_zero() {
        let chart = DistributionChart::new();
        assert_eq!(chart.data(), [0, 0]);
    }

    #[test]
    fn distribution_update_mutates_in_place() {
        let mut chart = DistributionChart::new();
        chart.update(3, 8);
        assert_eq!(chart.spam(), 3);
        assert_eq!(chart.ham(), 8);

        // Subsequent refreshes overwrite the same array.
        chart.update(4, 8);
        assert_eq!(chart.data(), [4, 8]);
    }

    #[test]
    fn history_build_preserves_order_and_alignment() {
        let series: HistorySeries = serde_json::from_str(
            r#"{"2024-01-01":{"Spam":3,"Ham":5},"2024-01-02":{"Spam":1,"Ham":2}}"#,
        )
        .unwrap();
        let chart = HistoryChart::build(&series);

        assert_eq!(chart.labels(), &["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.spam(), &[3, 1]);
        assert_eq!(chart.ham(), &[5, 2]);
        assert_eq!(chart.max_count(), 5);
    }

    #[test]
    fn history_rebuild_replaces_prior_instance() {
        let first: HistorySeries =
            serde_json::from_str(r#"{"2024-01-01":{"Spam":9,"Ham":9}}"#).unwrap();
        let second: HistorySeries =
            serde_json::from_str(r#"{"2024-02-01":{"Spam":1,"Ham":1}}"#).unwrap();

        let mut chart = HistoryChart::build(&first);
        chart = HistoryChart::build(&second);

        // No trace of the first series survives.
        assert_eq!(chart.labels(), &["2024-02-01"]);
        assert_eq!(chart.max_count(), 1);
    }

    #[test]
    fn empty_history_scales_to_zero() {
        let chart = HistoryChart::build(&HistorySeries::default());
        assert!(chart.is_empty());
        assert_eq!(chart.max_count(), 0);
    }
}
