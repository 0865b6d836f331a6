//! Classification result panel renderer.
//!
//! Renders the dashboard's verdict area: the pending indicator while a
//! request is in flight, the verdict headline once one arrives, and the
//! feedback prompt or thanks line beneath it.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedbackPanel, VerdictPanel};

/// Renders the pending indicator shown while a classification is in flight.
pub fn render_pending(theme: &Theme) {
    println!(
        " {}Analyzing...{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    );
}

/// Renders the verdict headline and its explanatory line.
///
/// The headline is bold in the verdict's resolved color (danger for spam,
/// success for ham); the detail line uses the dimmed text color.
pub fn render_verdict(verdict: &VerdictPanel, theme: &Theme) {
    println!(
        " {}{}{}{}",
        Theme::bold(),
        Theme::fg(&verdict.color),
        verdict.title,
        Theme::reset()
    );
    println!(
        " {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        verdict.detail,
        Theme::reset()
    );
}

/// Renders the feedback prompt state under the verdict.
pub fn render_feedback(panel: FeedbackPanel, theme: &Theme) {
    match panel {
        FeedbackPanel::Hidden => {}
        FeedbackPanel::Prompt => {
            println!(
                " Was this correct?  {}:y{} yes  {}:n{} no",
                Theme::fg(&theme.colors.accent),
                Theme::reset(),
                Theme::fg(&theme.colors.accent),
                Theme::reset()
            );
        }
        FeedbackPanel::Thanks => {
            println!(
                " {}Thanks for the feedback!{}",
                Theme::fg(&theme.colors.success),
                Theme::reset()
            );
        }
    }
}
