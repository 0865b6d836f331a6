//! Request gateway to the remote classification service.
//!
//! This module wraps every outbound call behind the [`Gateway`] trait and
//! classifies outcomes into success, retryable authorization rejection, or
//! hard transport failure. The HTTP implementation lives in [`http`].
//!
//! # Modules
//!
//! - [`api`]: `Gateway` trait, payload types, and the outcome taxonomy
//! - [`http`]: `ureq`-backed implementation with shared agent and timeouts

pub mod api;
pub mod http;

pub use api::{ClassifyOutcome, Gateway, GatewayError, GatewayResult};
pub use http::HttpGateway;
