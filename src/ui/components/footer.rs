//! Footer component renderer.
//!
//! Renders the footer help bar with the active view's command hints.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help line in the dimmed text color.
pub fn render_footer(footer: &FooterInfo, theme: &Theme) {
    println!(
        " {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        footer.keybindings,
        Theme::reset()
    );
}
