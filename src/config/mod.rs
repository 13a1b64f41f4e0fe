//! Configuration management for the Conversations client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, ConversationsError, ConversationsResult};
use crate::observability::{redact_access_key, Redacted};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Whether an access key talks to the live or the test environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Live key; messages are actually delivered
    Live,
    /// Test key (`test_*`); requests are validated but nothing is sent
    Test,
}

impl KeyMode {
    /// Detect the key mode from its prefix
    pub fn from_key(key: &str) -> Self {
        if key.starts_with("test_") {
            KeyMode::Test
        } else {
            KeyMode::Live
        }
    }
}

/// Secure wrapper for a MessageBird access key
#[derive(Clone)]
pub struct AccessKey {
    key: SecretString,
    mode: KeyMode,
}

impl AccessKey {
    /// Create a new access key
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigurationError> {
        let key_str = key.into();
        let trimmed = key_str.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::MissingAccessKey);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::InvalidAccessKey(
                "Access key must not contain whitespace".to_string(),
            ));
        }
        let mode = KeyMode::from_key(trimmed);
        Ok(Self {
            key: SecretString::new(trimmed.to_string()),
            mode,
        })
    }

    /// Get the key mode
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Expose the key for use in requests
    pub(crate) fn expose(&self) -> &str {
        self.key.expose_secret()
    }
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AccessKey({:?}, {})",
            self.mode,
            redact_access_key(self.key.expose_secret())
        )
    }
}

/// Configuration for the Conversations client
#[derive(Clone)]
pub struct ConversationsConfig {
    /// Access key for authentication
    pub(crate) access_key: Option<AccessKey>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for ConversationsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationsConfig")
            .field("access_key", &self.access_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("default_headers", &Redacted::new(&self.default_headers))
            .finish()
    }
}

impl Default for ConversationsConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_base_url(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            user_agent: crate::DEFAULT_USER_AGENT.to_string(),
            default_headers: HeaderMap::new(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(crate::DEFAULT_BASE_URL).expect("default base URL is valid")
}

impl ConversationsConfig {
    /// Create a new configuration builder
    pub fn builder() -> ConversationsConfigBuilder {
        ConversationsConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> ConversationsResult<Self> {
        let mut builder = ConversationsConfigBuilder::new();

        match std::env::var("MESSAGEBIRD_ACCESS_KEY") {
            Ok(key) => builder = builder.access_key(&key)?,
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigurationError::EnvVar(
                    "MESSAGEBIRD_ACCESS_KEY is not valid unicode".to_string(),
                )
                .into());
            }
            Err(std::env::VarError::NotPresent) => {}
        }

        if let Ok(url) = std::env::var("MESSAGEBIRD_CONVERSATIONS_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("MESSAGEBIRD_TIMEOUT") {
            let secs = timeout.parse::<u64>().map_err(|_| {
                ConfigurationError::EnvVar(format!(
                    "MESSAGEBIRD_TIMEOUT must be a number of seconds, got {:?}",
                    timeout
                ))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Get the access key if available
    pub fn access_key(&self) -> Option<&AccessKey> {
        self.access_key.as_ref()
    }

    /// Build the full URL for an endpoint path.
    ///
    /// The path may carry a query string; it is appended verbatim.
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConversationsResult<()> {
        if self.access_key.is_none() {
            return Err(ConversationsError::Configuration(
                ConfigurationError::MissingAccessKey,
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConversationsError::Configuration(
                ConfigurationError::InvalidConfiguration {
                    message: "Timeout must be greater than zero".to_string(),
                },
            ));
        }

        Ok(())
    }
}

/// Builder for ConversationsConfig
#[derive(Default)]
pub struct ConversationsConfigBuilder {
    config: ConversationsConfig,
}

impl ConversationsConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ConversationsConfig::default(),
        }
    }

    /// Set the access key
    pub fn access_key(mut self, key: &str) -> Result<Self, ConfigurationError> {
        self.config.access_key = Some(AccessKey::new(key)?);
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url =
            Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
                message: format!("Invalid URL: {}", e),
            })?;
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = name.parse::<http::header::HeaderName>() {
            if let Ok(header_value) = value.parse::<http::header::HeaderValue>() {
                self.config.default_headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConversationsResult<ConversationsConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> ConversationsConfig {
        self.config
    }
}
