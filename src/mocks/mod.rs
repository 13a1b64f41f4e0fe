//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] records every request it receives and answers from a
//! queue of canned responses, so services can be tested without a network.

use crate::errors::{ConversationsError, ConversationsResult, NetworkError, ResponseError};
use crate::transport::{error_from_response, HttpTransport, TransportRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Transport-level failure a mock can simulate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// Request timed out
    Timeout,
    /// Connection could not be established
    ConnectionFailed(String),
}

impl From<MockFailure> for ConversationsError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Timeout => ConversationsError::Network(NetworkError::Timeout),
            MockFailure::ConnectionFailed(message) => {
                ConversationsError::Network(NetworkError::ConnectionFailed { message })
            }
        }
    }
}

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// HTTP status code
    pub status: u16,
    /// Value of the `Retry-After` header, in seconds
    pub retry_after: Option<u64>,
    /// Delay before response
    pub delay_ms: Option<u64>,
    /// Failure to return instead of a response
    pub failure: Option<MockFailure>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::ok(serde_json::to_string(data).unwrap_or_default())
    }

    /// Create a successful response with raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    /// Create a response with an arbitrary status
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            retry_after: None,
            delay_ms: None,
            failure: None,
        }
    }

    /// Create an API error response with a single `errors` entry
    pub fn api_error(status: u16, code: i64, description: &str) -> Self {
        let body = serde_json::json!({
            "errors": [{"code": code, "description": description}]
        });
        Self::with_status(status, body.to_string())
    }

    /// Create a rate limit response
    pub fn rate_limited(retry_after: u64) -> Self {
        Self {
            retry_after: Some(retry_after),
            ..Self::api_error(429, 429, "Too many requests")
        }
    }

    /// Create a transport failure
    pub fn failure(failure: MockFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::with_status(0, "")
        }
    }

    /// Add delay to response
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: String,
    /// JSON request body
    pub body: Option<serde_json::Value>,
    /// Request headers
    pub headers: HeaderMap,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Query string of the URL, if any
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, q)| q)
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Recorded requests
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Default response if queue is empty
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        self.responses.lock().extend(responses);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: TransportRequest) -> ConversationsResult<Bytes> {
        self.requests.lock().push(RecordedRequest {
            method: request.method,
            url: request.url,
            body: request.body,
            headers: request.headers,
            timeout: request.timeout,
        });

        let response = self.next_response().ok_or_else(|| {
            ConversationsError::Response(ResponseError::UnexpectedResponse {
                message: "No mock response configured".to_string(),
            })
        })?;

        if let Some(delay) = response.delay_ms {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if let Some(failure) = response.failure {
            return Err(failure.into());
        }

        if !(200..300).contains(&response.status) {
            return Err(error_from_response(
                response.status,
                response.body.as_bytes(),
                response.retry_after.map(Duration::from_secs),
            ));
        }

        Ok(Bytes::from(response.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RateLimitError;

    #[tokio::test]
    async fn test_records_requests_and_returns_queued_body() {
        let mock = MockHttpTransport::new().add_response(MockResponse::ok(r#"{"id":"1"}"#));

        let body = mock
            .send(TransportRequest::get(
                "https://example.com/v1/x?limit=1",
                HeaderMap::new(),
            ))
            .await
            .unwrap();

        assert_eq!(&body[..], br#"{"id":"1"}"#);
        let recorded = mock.last_request().unwrap();
        assert_eq!(recorded.method, Method::GET);
        assert_eq!(recorded.query(), Some("limit=1"));
        assert_eq!(mock.remaining_responses(), 0);
    }

    #[tokio::test]
    async fn test_empty_queue_is_an_error() {
        let mock = MockHttpTransport::new();
        let result = mock
            .send(TransportRequest::get("https://example.com", HeaderMap::new()))
            .await;
        assert!(matches!(
            result,
            Err(ConversationsError::Response(ResponseError::UnexpectedResponse { .. }))
        ));
    }

    #[tokio::test]
    async fn test_rate_limited_maps_retry_after() {
        let mock = MockHttpTransport::new().add_response(MockResponse::rate_limited(7));
        let result = mock
            .send(TransportRequest::get("https://example.com", HeaderMap::new()))
            .await;

        match result {
            Err(ConversationsError::RateLimit(RateLimitError::RateLimited { retry_after })) => {
                assert_eq!(retry_after, Some(Duration::from_secs(7)));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_is_returned() {
        let mock = MockHttpTransport::new()
            .with_default_response(MockResponse::failure(MockFailure::Timeout));
        let result = mock
            .send(TransportRequest::get("https://example.com", HeaderMap::new()))
            .await;
        assert!(matches!(
            result,
            Err(ConversationsError::Network(NetworkError::Timeout))
        ));
        assert_eq!(mock.request_count(), 1);
    }
}
