//! Recent activity table renderer.
//!
//! Renders the dashboard's recent-classifications table. The table is fully
//! regenerated from the view model rows on every render; nothing is patched
//! incrementally.

use crate::ui::helpers::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LogRow;

const ID_WIDTH: usize = 6;
const TEXT_WIDTH: usize = 42;
const PREDICTION_WIDTH: usize = 8;
const TIME_WIDTH: usize = 10;

/// Renders the table column headers.
fn render_table_headers(theme: &Theme) {
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!(
        " {} {} {} {} {}",
        fit("ID", ID_WIDTH),
        fit("MESSAGE", TEXT_WIDTH),
        fit("RESULT", PREDICTION_WIDTH),
        fit("TIME", TIME_WIDTH),
        "FEEDBACK"
    );
    println!("{}", Theme::reset());
}

/// Renders the recent activity table: headers plus one line per row.
///
/// Shows a dimmed placeholder when no records have been delivered yet.
pub fn render_recent_table(rows: &[LogRow], theme: &Theme) {
    println!(
        " {}{}Recent Activity{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset()
    );

    if rows.is_empty() {
        println!(
            " {}No messages classified yet.{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
        return;
    }

    render_table_headers(theme);
    for row in rows {
        render_table_row(row, theme);
    }
}

fn render_table_row(row: &LogRow, theme: &Theme) {
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" {} {} ", fit(&row.id, ID_WIDTH), fit(&row.text, TEXT_WIDTH));
    print!(
        "{}{}{}",
        Theme::fg(&row.prediction_color),
        fit(&row.prediction, PREDICTION_WIDTH),
        Theme::fg(&theme.colors.text_normal)
    );
    print!(" {} ", fit(&row.time, TIME_WIDTH));

    if row.feedback == "-" {
        print!("{}-{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    } else {
        print!("{}", row.feedback);
    }
    println!("{}", Theme::reset());
}
