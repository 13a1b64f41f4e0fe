//! Authentication management for the Conversations client.
//!
//! MessageBird authenticates every call with an `Authorization: AccessKey <key>`
//! header. [`AuthManager`] turns the configured key into request headers.

use crate::config::{ConversationsConfig, KeyMode};
use crate::errors::{AuthenticationError, ConfigurationError, ConversationsError, ConversationsResult};
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use std::sync::Arc;

/// Authentication manager for API requests
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<ConversationsConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<ConversationsConfig>) -> Self {
        Self { config }
    }

    /// Get headers for an API request
    pub fn get_headers(&self) -> ConversationsResult<HeaderMap> {
        let key = self
            .config
            .access_key()
            .ok_or(ConversationsError::Configuration(
                ConfigurationError::MissingAccessKey,
            ))?;

        let mut headers = self.config.default_headers.clone();

        let mut auth_value = HeaderValue::from_str(&format!("AccessKey {}", key.expose()))
            .map_err(|_| ConversationsError::Authentication(AuthenticationError::MalformedHeader))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if !headers.contains_key(USER_AGENT) {
            if let Ok(ua) = HeaderValue::from_str(&self.config.user_agent) {
                headers.insert(USER_AGENT, ua);
            }
        }

        Ok(headers)
    }

    /// Mode of the configured key, if one is set
    pub fn key_mode(&self) -> Option<KeyMode> {
        self.config.access_key().map(|k| k.mode())
    }

    /// Check whether an access key is configured
    pub fn has_access_key(&self) -> bool {
        self.config.access_key().is_some()
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("has_access_key", &self.has_access_key())
            .field("key_mode", &self.key_mode())
            .finish()
    }
}
