//! Composable UI component renderers.
//!
//! Each component renders one part of the frame; the per-view layout
//! functions here compose them. All output goes to stdout top-down, one
//! frame per render pass.
//!
//! # Components
//!
//! - [`header`]: Navigation tabs with active highlight
//! - [`footer`]: Command hints for the active view
//! - [`result`]: Pending indicator, verdict panel, feedback prompt
//! - [`table`]: Recent activity table
//! - [`chart`]: Distribution and history bar charts

mod chart;
mod footer;
mod header;
mod result;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AnalyticsView, ApiAccessView, DashboardView, SettingsView, UiViewModel, ViewBody,
};

use chart::{render_distribution, render_history};
use footer::render_footer;
use header::render_header;
use result::{render_feedback, render_pending, render_verdict};
use table::render_recent_table;

/// Width of the separator lines between frame sections.
const FRAME_WIDTH: usize = 78;

/// Renders a horizontal separator line in the border color.
fn render_border(theme: &Theme) {
    println!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(FRAME_WIDTH),
        Theme::reset()
    );
}

/// Renders the frame chrome shared by all views: header, notice, body,
/// footer.
pub fn render_frame(vm: &UiViewModel, theme: &Theme) {
    render_header(&vm.header, theme);
    render_border(theme);

    if let Some(notice) = &vm.notice {
        println!(
            " {}{}{}",
            Theme::fg(&theme.colors.accent),
            notice,
            Theme::reset()
        );
        println!();
    }

    match &vm.body {
        ViewBody::Dashboard(dashboard) => render_dashboard(dashboard, theme),
        ViewBody::Analytics(analytics) => render_analytics(analytics, theme),
        ViewBody::ApiAccess(api) => render_api_access(api, theme),
        ViewBody::Settings(settings) => render_settings(settings, theme),
    }

    render_border(theme);
    render_footer(&vm.footer, theme);
}

/// Dashboard layout: result panel, counters, distribution chart, table.
fn render_dashboard(dashboard: &DashboardView, theme: &Theme) {
    if dashboard.pending {
        render_pending(theme);
    } else if let Some(verdict) = &dashboard.verdict {
        render_verdict(verdict, theme);
        render_feedback(dashboard.feedback, theme);
    } else {
        println!(
            " {}Type a message and press Enter to classify it.{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
    }
    println!();

    println!(
        " {}Total{} {}   {}Spam{} {}   {}Ham{} {}",
        Theme::fg(&theme.colors.accent),
        Theme::reset(),
        dashboard.counters.total,
        Theme::fg(&theme.colors.danger),
        Theme::reset(),
        dashboard.counters.spam,
        Theme::fg(&theme.colors.success),
        Theme::reset(),
        dashboard.counters.ham
    );
    println!();

    render_distribution(&dashboard.chart, theme);
    println!();

    render_recent_table(&dashboard.table_rows, theme);
}

/// Analytics layout: the daily history chart.
fn render_analytics(analytics: &AnalyticsView, theme: &Theme) {
    println!(
        " {}{}Daily Classification Volume{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset()
    );
    println!();

    match &analytics.chart {
        Some(chart) => render_history(chart, theme),
        None => println!(
            " {}Loading history...{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
    }
}

/// API Access layout: the credential and a ready-to-paste usage example.
fn render_api_access(api: &ApiAccessView, theme: &Theme) {
    println!(
        " {}{}Your API Key{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset()
    );
    match &api.key {
        Some(key) => println!(
            " {}{}{}",
            Theme::fg(&theme.colors.accent),
            key,
            Theme::reset()
        ),
        None => println!(
            " {}No key provisioned yet.{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
    }
    println!();

    if let Some(example) = &api.example {
        println!(
            " {}{}Example{}",
            Theme::bold(),
            Theme::fg(&theme.colors.header_fg),
            Theme::reset()
        );
        for line in example.lines() {
            println!(
                " {}{}{}",
                Theme::fg(&theme.colors.text_normal),
                line,
                Theme::reset()
            );
        }
    }
}

/// Settings layout: administrative actions.
fn render_settings(settings: &SettingsView, theme: &Theme) {
    println!(
        " {}{}Danger Zone{}",
        Theme::bold(),
        Theme::fg(&theme.colors.danger),
        Theme::reset()
    );
    println!(
        " {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        settings.hint,
        Theme::reset()
    );
}
