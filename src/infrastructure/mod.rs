//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves the filesystem locations the client depends on: the
//! platform data directory, the persisted credential file, and the trace log.

pub mod paths;

pub use paths::{config_file, credential_file, get_data_dir, trace_log_file};
