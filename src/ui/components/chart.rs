//! Chart component renderers.
//!
//! Draws the two statistics charts as horizontal bars: the all-time
//! spam/ham distribution on the dashboard and the per-day history series on
//! the Analytics view. The chart adapters hold the numbers; this module only
//! decides how wide the bars are.

use crate::ui::charts::{DistributionChart, HistoryChart, DISTRIBUTION_LABELS};
use crate::ui::helpers::fit;
use crate::ui::theme::Theme;

/// Maximum bar width in characters.
const BAR_WIDTH: usize = 30;

/// Scales `count` against `max` into a bar of at most [`BAR_WIDTH`] blocks.
///
/// A nonzero count always produces at least one block so small values stay
/// visible next to large ones.
fn scaled_bar(count: u64, max: u64) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let width = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}

/// Renders the spam/ham distribution as two labeled bars.
pub fn render_distribution(chart: &DistributionChart, theme: &Theme) {
    println!(
        " {}{}Distribution{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset()
    );

    let data = chart.data();
    let max = data.iter().copied().max().unwrap_or(0);
    let colors = [&theme.colors.danger, &theme.colors.success];

    for (index, label) in DISTRIBUTION_LABELS.iter().enumerate() {
        println!(
            " {} {}{}{} {}",
            fit(label, 5),
            Theme::fg(colors[index]),
            scaled_bar(data[index], max),
            Theme::reset(),
            data[index]
        );
    }
}

/// Renders the per-day history series, one spam and one ham bar per date.
///
/// Dates appear in the order the server reported them. Shows a dimmed
/// placeholder until the first fetch delivers data.
pub fn render_history(chart: &HistoryChart, theme: &Theme) {
    if chart.is_empty() {
        println!(
            " {}No historical data yet.{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
        return;
    }

    let max = chart.max_count();
    for (index, label) in chart.labels().iter().enumerate() {
        let spam = chart.spam()[index];
        let ham = chart.ham()[index];
        println!(
            " {}  {}{}{} {}  {}{}{} {}",
            fit(label, 10),
            Theme::fg(&theme.colors.danger),
            scaled_bar(spam, max),
            Theme::reset(),
            spam,
            Theme::fg(&theme.colors.success),
            scaled_bar(ham, max),
            Theme::reset(),
            ham
        );
    }
}
