//! HTTP transport layer for the Conversations client.
//!
//! [`HttpTransport`] is the seam between the typed services and the wire.
//! A transport receives a fully resolved request (method, URL, headers,
//! JSON body) and hands back the raw body of a successful response. It owns
//! status-code-to-error translation; services own JSON decoding.

use crate::errors::{
    ApiErrorBody, ConversationsError, ConversationsResult, NetworkError, RequestError,
    ResponseError,
};
use crate::observability::{record_error, record_success, truncate_body, RequestTrace};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn, Instrument};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the body of a successful response.
    ///
    /// Non-2xx responses must be turned into a [`ConversationsError`].
    async fn send(&self, request: TransportRequest) -> ConversationsResult<Bytes>;
}

/// Fully resolved request handed to a transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, including any query string
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// JSON request body
    pub body: Option<serde_json::Value>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Create a request with an explicit method and optional body
    pub fn new(
        method: Method,
        url: impl Into<String>,
        headers: HeaderMap,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body,
            timeout: None,
        }
    }

    /// Create a new GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self::new(Method::GET, url, headers, None)
    }

    /// Create a new POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: serde_json::Value) -> Self {
        Self::new(Method::POST, url, headers, Some(body))
    }

    /// Create a new PATCH request
    pub fn patch(url: impl Into<String>, headers: HeaderMap, body: serde_json::Value) -> Self {
        Self::new(Method::PATCH, url, headers, Some(body))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Serialize a request body into JSON
pub fn encode_body<T: Serialize>(body: &T) -> ConversationsResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| {
        ConversationsError::Request(RequestError::Serialization {
            message: e.to_string(),
        })
    })
}

/// Decode a successful response body into the target type
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> ConversationsResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ConversationsError::Response(ResponseError::from(e)))
}

/// Translate a non-2xx response into an error.
///
/// The body is expected to carry `{"errors": [...]}`; anything else yields an
/// error without details.
pub fn error_from_response(
    status: u16,
    body: &[u8],
    retry_after: Option<Duration>,
) -> ConversationsError {
    let parsed: ApiErrorBody = serde_json::from_slice(body).unwrap_or_default();
    ConversationsError::from_status(status, parsed.errors, retry_after)
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> ConversationsResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ConversationsError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn execute(&self, request: TransportRequest) -> ConversationsResult<(u16, Bytes)> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);
        let url = reqwest::Url::parse(&request.url).map_err(|e| {
            ConversationsError::Network(NetworkError::InvalidUrl {
                message: e.to_string(),
            })
        })?;

        let mut req_builder = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .timeout(timeout);

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| ConversationsError::Network(NetworkError::from(e)))?;

        self.parse_response(response).await
    }

    /// Check the status and collect the body
    async fn parse_response(&self, response: Response) -> ConversationsResult<(u16, Bytes)> {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(http::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response
            .bytes()
            .await
            .map_err(|e| ConversationsError::Network(NetworkError::from(e)))?;

        debug!(
            status = status.as_u16(),
            response_body = %truncate_body(&String::from_utf8_lossy(&body)),
            "Received response"
        );

        if !status.is_success() {
            warn!(status = %status, "Request failed with non-success status");
            return Err(error_from_response(status.as_u16(), &body, retry_after));
        }

        Ok((status.as_u16(), body))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> ConversationsResult<Bytes> {
        let trace = RequestTrace::new(request.method.as_str(), &request.url);
        let span = trace.span();

        let result = self.execute(request).instrument(span.clone()).await;

        match &result {
            Ok((status, _)) => record_success(&span, *status),
            Err(e) => record_error(&span, e.http_status(), &e.to_string()),
        }
        debug!(parent: &span, elapsed_ms = trace.elapsed_ms(), "Request finished");

        result.map(|(_, body)| body)
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
