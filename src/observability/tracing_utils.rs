//! Tracing utilities for request spans.

use tracing::{span, Level, Span};

/// Create a request span with common attributes
pub fn create_request_span(method: &str, url: &str, request_id: &str) -> Span {
    span!(
        Level::INFO,
        "messagebird_request",
        method = %method,
        url = %url,
        request_id = %request_id,
        otel.kind = "client",
        otel.status_code = tracing::field::Empty,
        http.status_code = tracing::field::Empty,
        error.message = tracing::field::Empty,
    )
}

/// Record success on a span
pub fn record_success(span: &Span, status: u16) {
    span.record("otel.status_code", "OK");
    span.record("http.status_code", status);
}

/// Record error on a span
pub fn record_error(span: &Span, status: Option<u16>, error: &str) {
    span.record("otel.status_code", "ERROR");
    if let Some(status) = status {
        span.record("http.status_code", status);
    }
    span.record("error.message", error);
}

/// Request-scoped trace info
#[derive(Debug, Clone)]
pub struct RequestTrace {
    /// Start time
    pub start_time: std::time::Instant,
    /// Request ID
    pub request_id: String,
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
}

impl RequestTrace {
    /// Create a new request trace
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            request_id: uuid::Uuid::new_v4().to_string(),
            method: method.into(),
            url: url.into(),
        }
    }

    /// Open the span for this request
    pub fn span(&self) -> Span {
        create_request_span(&self.method, &self.url, &self.request_id)
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get elapsed milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}
