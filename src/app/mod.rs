//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal shim (`main.rs`) and the domain/gateway/worker layers. It
//! implements the event-driven architecture that powers the client.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Command → Event → Event Handler → State Mutation → Actions → Worker
//!                  ↑                                          ↓
//!                  └──────────── Worker Responses ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View and workflow state machine types
//! - [`state`]: Session context container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Phase, View};
pub use state::AppState;
