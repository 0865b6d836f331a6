//! Header component renderer.
//!
//! Renders the navigation bar: the four view tabs with the active tab
//! highlighted in the accent color.

use crate::app::modes::View;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// All views in navigation order.
const TABS: [View; 4] = [View::Dashboard, View::Analytics, View::ApiAccess, View::Settings];

/// Renders the navigation header line.
///
/// The active tab is bold in the accent color; inactive tabs use the dimmed
/// text color. Tabs are separated by a vertical bar in the border color.
///
/// # Output
///
/// ```text
///  Dashboard │ Analytics │ API Access │ Settings
/// ```
pub fn render_header(header: &HeaderInfo, theme: &Theme) {
    print!(" ");
    for (index, tab) in TABS.iter().enumerate() {
        if index > 0 {
            print!("{}│{} ", Theme::fg(&theme.colors.border), Theme::reset());
        }
        if *tab == header.active {
            print!(
                "{}{}{}{} ",
                Theme::bold(),
                Theme::fg(&theme.colors.accent),
                tab,
                Theme::reset()
            );
        } else {
            print!(
                "{}{}{} ",
                Theme::fg(&theme.colors.text_dim),
                tab,
                Theme::reset()
            );
        }
    }
    println!();
}
