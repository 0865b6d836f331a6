//! Domain layer for the spamlens client.
//!
//! This module contains the core domain types for the client, independent of
//! transport or rendering concerns. It keeps the wire records and the error
//! taxonomy isolated from the layers that consume them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Wire/data records for classifications and statistics
//!
//! # Examples
//!
//! ```
//! use spamlens::domain::{Prediction, Result};
//!
//! fn describe(prediction: Prediction) -> Result<&'static str> {
//!     Ok(match prediction {
//!         Prediction::Spam => "danger",
//!         Prediction::Ham => "safe",
//!     })
//! }
//! ```

pub mod error;
pub mod record;

pub use error::{Result, SpamlensError};
pub use record::{
    ClassificationRecord, DayCounts, Distribution, FeedbackChoice, HistorySeries, Prediction,
    SummaryStats,
};
