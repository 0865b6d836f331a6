//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View model computation**: transform [`AppState`] into a
//!    [`UiViewModel`](crate::ui::viewmodel::UiViewModel) snapshot
//! 2. **Component rendering**: delegate to the component layout in
//!    [`components`](crate::ui::components)
//!
//! Every pass redraws the whole frame from scratch; there is no incremental
//! diffing.

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;

/// Renders the full UI frame for the current state to stdout.
///
/// Clears the screen, computes the view model, and draws header, notice,
/// body, and footer. Flushes stdout so partial-line ANSI output is visible
/// before the next input read blocks.
pub fn render(state: &AppState) {
    let viewmodel = state.compute_viewmodel();

    clear_screen();
    components::render_frame(&viewmodel, &state.theme);

    // A failed flush means stdout is gone; nothing sensible left to do.
    let _ = std::io::stdout().flush();
}
