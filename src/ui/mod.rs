//! User interface rendering layer.
//!
//! Transforms application state into ANSI-styled terminal output through a
//! declarative pipeline:
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`charts`]: Chart adapters for the statistics feeds
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod charts;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use charts::{DistributionChart, HistoryChart};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::UiViewModel;
