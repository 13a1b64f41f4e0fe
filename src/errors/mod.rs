//! Error types for the Conversations client.
//!
//! Maps transport failures, non-2xx responses and decode failures onto a
//! single error hierarchy. Services never add error kinds of their own; they
//! hand back whatever the transport produced.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for Conversations operations
pub type ConversationsResult<T> = Result<T, ConversationsError>;

/// Root error type for the Conversations integration
#[derive(Error, Debug)]
pub enum ConversationsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Request rejected by the API
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Rate limit error
    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Server error
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Any other non-success response
    #[error("API error: status {status}: {}", ApiErrors(.errors))]
    Api {
        /// HTTP status code
        status: u16,
        /// Error entries reported by the API
        errors: Vec<ApiErrorDetail>,
    },
}

impl ConversationsError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "MB_CONFIG",
            Self::Authentication(_) => "MB_AUTH",
            Self::Request(_) => "MB_REQUEST",
            Self::RateLimit(_) => "MB_RATE_LIMIT",
            Self::Network(_) => "MB_NETWORK",
            Self::Server(_) => "MB_SERVER",
            Self::Response(_) => "MB_RESPONSE",
            Self::Api { .. } => "MB_API",
        }
    }

    /// Check if this error is transient.
    ///
    /// The client never retries on its own; this is a hint for callers that
    /// wrap it in their own retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(NetworkError::Timeout)
                | Self::Network(NetworkError::ConnectionFailed { .. })
                | Self::RateLimit(RateLimitError::RateLimited { .. })
                | Self::Server(ServerError::ServiceUnavailable { .. })
                | Self::Server(ServerError::InternalError { .. })
        )
    }

    /// Get retry-after duration if applicable
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit(RateLimitError::RateLimited { retry_after }) => *retry_after,
            _ => None,
        }
    }

    /// Get HTTP status code if applicable
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::Request(RequestError::BadRequest { .. }) => Some(400),
            Self::Request(RequestError::NotFound { .. }) => Some(404),
            Self::Request(RequestError::Unprocessable { .. }) => Some(422),
            Self::RateLimit(_) => Some(429),
            Self::Server(ServerError::InternalError { .. }) => Some(500),
            Self::Server(ServerError::ServiceUnavailable { .. }) => Some(503),
            Self::Server(ServerError::Other { status, .. }) => Some(*status),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build an error from a non-success HTTP status and its decoded body.
    pub fn from_status(
        status: u16,
        errors: Vec<ApiErrorDetail>,
        retry_after: Option<Duration>,
    ) -> Self {
        let message = errors
            .first()
            .map(|e| e.description.clone())
            .unwrap_or_else(|| "Unknown error".to_string());

        match status {
            400 => Self::Request(RequestError::BadRequest { message, errors }),
            401 => Self::Authentication(AuthenticationError::InvalidAccessKey { message }),
            404 => Self::Request(RequestError::NotFound { message }),
            422 => Self::Request(RequestError::Unprocessable { message, errors }),
            429 => Self::RateLimit(RateLimitError::RateLimited { retry_after }),
            500 => Self::Server(ServerError::InternalError { message }),
            503 => Self::Server(ServerError::ServiceUnavailable { message }),
            s if s >= 500 => Self::Server(ServerError::Other { status: s, message }),
            _ => Self::Api { status, errors },
        }
    }
}

/// One entry of the `errors` array returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric MessageBird error code
    #[serde(default)]
    pub code: i64,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Offending request parameter, if any
    #[serde(default)]
    pub parameter: Option<String>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(param) => write!(f, "[{}] {} ({})", self.code, self.description, param),
            None => write!(f, "[{}] {}", self.code, self.description),
        }
    }
}

/// Body shape of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Reported errors
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

struct ApiErrors<'a>(&'a [ApiErrorDetail]);

impl fmt::Display for ApiErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no details");
        }
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing access key
    #[error("Access key is missing")]
    MissingAccessKey,

    /// Invalid access key format
    #[error("Invalid access key: {0}")]
    InvalidAccessKey(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// The API rejected the access key
    #[error("Access key rejected: {message}")]
    InvalidAccessKey {
        /// Error message
        message: String,
    },

    /// The key could not be turned into a header value
    #[error("Access key contains characters not allowed in a header")]
    MalformedHeader,
}

/// Request errors reported by the API
#[derive(Error, Debug)]
pub enum RequestError {
    /// Bad request
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message
        message: String,
        /// Reported errors
        errors: Vec<ApiErrorDetail>,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message
        message: String,
    },

    /// Semantically invalid request
    #[error("Unprocessable request: {message}")]
    Unprocessable {
        /// Error message
        message: String,
        /// Reported errors
        errors: Vec<ApiErrorDetail>,
    },

    /// Body could not be serialized
    #[error("Failed to serialize request body: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

/// Rate limit errors
#[derive(Error, Debug)]
pub enum RateLimitError {
    /// Rate limited, optionally with retry information
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Duration to wait before retrying
        retry_after: Option<Duration>,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Invalid URL
    #[error("Invalid URL: {message}")]
    InvalidUrl {
        /// Error message
        message: String,
    },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Internal server error
    #[error("Internal server error: {message}")]
    InternalError {
        /// Error message
        message: String,
    },

    /// Service unavailable
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message
        message: String,
    },

    /// Any other 5xx status
    #[error("Server returned {status}: {message}")]
    Other {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}
