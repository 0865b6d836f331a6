//! Side-effect commands emitted by the event handler.
//!
//! The handler never performs I/O itself; it returns actions that the shim
//! (`main.rs`) executes. This keeps every state transition a pure function of
//! `(state, event)` and makes the workflow testable without a network.

use crate::worker::WorkerMessage;

/// A side effect requested by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Shut the client down cleanly.
    Quit,
}
