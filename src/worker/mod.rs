//! Background worker thread for network operations.
//!
//! This module implements the worker that performs all gateway calls off the
//! event loop. The loop posts [`WorkerMessage`]s over a channel; the worker
//! answers each with exactly one [`WorkerResponse`]. Requests are not
//! cancellable: a view switch or a new submission never aborts an in-flight
//! call, a late response simply lands as its own event.
//!
//! # Modules
//!
//! - [`messages`]: Request/response protocol types
//! - [`handler`]: Worker implementation and per-message processing

pub mod handler;
pub mod messages;

pub use handler::GatewayWorker;
pub use messages::{WorkerMessage, WorkerResponse};
