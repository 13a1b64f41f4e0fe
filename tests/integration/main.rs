//! Integration tests using WireMock
//!
//! These tests run the real reqwest transport against a mock HTTP server,
//! covering the full request/response cycle: URL and query building,
//! authentication headers, body serialization and error mapping.

mod conversations;
mod messages;

use messagebird_conversations::{ConversationsClientImpl, ConversationsConfig};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_KEY: &str = "test_gshuPaZoeEG6ovbc8M79w0QyM";

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Helper to create a client pointing at the mock server
pub fn client_for(server: &MockServer) -> ConversationsClientImpl {
    let config = ConversationsConfig::builder()
        .access_key(ACCESS_KEY)
        .expect("valid key")
        .base_url(&format!("{}/v1", server.uri()))
        .expect("valid url")
        .timeout(Duration::from_secs(5))
        .build()
        .expect("valid config");

    ConversationsClientImpl::new(config).expect("Failed to build client")
}

/// Helper to create an authenticated mock
pub fn mock_with_auth(method_matcher: &str, path_matcher: &str) -> wiremock::MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header("Authorization", format!("AccessKey {}", ACCESS_KEY).as_str()))
}

/// Helper to create error response templates
pub fn error_response(status: u16, code: i64, description: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "errors": [{"code": code, "description": description, "parameter": null}]
    }))
}

/// Helper to create success response templates
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
