//! Observability infrastructure for the Conversations client.
//!
//! Provides tracing spans and logging helpers. The crate only emits
//! `tracing` events; installing a subscriber is up to the application.

pub mod logging;
pub mod tracing_utils;

pub use logging::*;
pub use tracing_utils::*;
