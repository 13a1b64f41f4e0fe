//! Service implementations for the Conversations API endpoints.
//!
//! Each service module groups the operations of one API resource. Services
//! resolve method, path and body for an operation, delegate the round-trip to
//! the injected [`HttpTransport`] and decode the body into the typed result.

pub mod conversations;
pub mod messages;

pub use conversations::ConversationsService;
pub use messages::MessagesService;

use crate::auth::AuthManager;
use crate::config::ConversationsConfig;
use crate::errors::ConversationsResult;
use crate::transport::{decode_json, HttpTransport, TransportRequest};
use http::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Shared state every service needs to issue requests
#[derive(Clone)]
pub struct ServiceContext {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ConversationsConfig>,
    auth: AuthManager,
    timeout: Option<Duration>,
}

impl ServiceContext {
    /// Create a new context
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<ConversationsConfig>) -> Self {
        let auth = AuthManager::new(config.clone());
        Self {
            transport,
            config,
            auth,
            timeout: None,
        }
    }

    /// Apply a per-request timeout to every call made through this context
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve a path (with optional query string) against the base URL
    pub fn build_url(&self, path: &str) -> String {
        self.config.build_url(path)
    }

    /// Send one request and decode the response into `T`.
    ///
    /// Transport errors are returned as-is.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ConversationsResult<T> {
        let headers = self.auth.get_headers()?;
        let mut request = TransportRequest::new(method, self.build_url(path), headers, body);
        if let Some(timeout) = self.timeout {
            request = request.with_timeout(timeout);
        }

        let body = self.transport.send(request).await?;
        decode_json(&body)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("auth", &self.auth)
            .field("base_url", &self.config.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
