//! Diagnostics and tracing infrastructure.
//!
//! The client logs through the `tracing` macros throughout; this module
//! installs the subscriber that routes those events to a file. Failures and
//! silently-ignored events (stale feedback, auth aborts, statistics fetch
//! errors) are visible here and nowhere else.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and filter resolution

pub mod init;

pub use init::init_tracing;
