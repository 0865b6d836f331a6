//! Session credential persistence.
//!
//! This module holds the single durable piece of client state: the API key
//! authorizing calls to the classification service. Persistence uses a plain
//! file with atomic replacement; the in-memory copy is the one source of truth
//! while the process runs.

pub mod store;

pub use store::CredentialStore;
