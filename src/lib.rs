//! MessageBird Conversations API Client
//!
//! Typed client for the MessageBird Conversations REST API:
//! - List, read, start, reply to and archive conversations
//! - Send, list and read messages
//! - Pluggable HTTP transport (reqwest by default, mock for tests)
//! - Structured logging via `tracing`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use messagebird_conversations::services::conversations::{
//!     ConversationsServiceTrait, StartRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = messagebird_conversations::create_client_from_env()?;
//!
//!     // Start a conversation
//!     let conversation = client
//!         .conversations()
//!         .start(
//!             StartRequest::text("+31624971134", "Hello world")
//!                 .channel_id("619747f69cf940a98fb443140ce9aed2"),
//!         )
//!         .await?;
//!
//!     println!("Conversation started: {}", conversation.id);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `rustls` - TLS through rustls (default)
//! - `native-tls` - TLS through the platform library

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{ConversationsClient, ConversationsClientImpl};
pub use config::{AccessKey, ConversationsConfig, ConversationsConfigBuilder, KeyMode};
pub use errors::{ConversationsError, ConversationsResult};

/// Default base URL for the Conversations API
pub const DEFAULT_BASE_URL: &str = "https://conversations.messagebird.com/v1";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
pub const DEFAULT_USER_AGENT: &str = concat!("messagebird-conversations-rust/", env!("CARGO_PKG_VERSION"));

/// Create a client with the given configuration
pub fn create_client(config: ConversationsConfig) -> ConversationsResult<ConversationsClientImpl> {
    ConversationsClientImpl::new(config)
}

/// Create a client from environment variables
///
/// Reads:
/// - `MESSAGEBIRD_ACCESS_KEY` - Access key (required)
/// - `MESSAGEBIRD_CONVERSATIONS_BASE_URL` - Base URL override
/// - `MESSAGEBIRD_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> ConversationsResult<ConversationsClientImpl> {
    let config = ConversationsConfig::from_env()?;
    create_client(config)
}
