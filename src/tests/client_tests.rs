//! Client tests.

use crate::client::{ConversationsClient, ConversationsClientImpl};
use crate::config::ConversationsConfigBuilder;
use crate::errors::{ConfigurationError, ConversationsError};
use crate::fixtures::conversation_fixtures;
use crate::mocks::MockHttpTransport;
use crate::services::conversations::{ConversationsServiceTrait, ListRequest};
use crate::services::messages::{ListMessagesRequest, MessagesServiceTrait};
use crate::KeyMode;
use std::sync::Arc;
use std::time::Duration;

fn config() -> crate::ConversationsConfig {
    ConversationsConfigBuilder::new()
        .access_key("live_abcdefghijklmnop")
        .unwrap()
        .timeout(Duration::from_secs(12))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_client_creation() {
    let client = ConversationsClientImpl::new(config()).unwrap();
    assert_eq!(client.base_url(), "https://conversations.messagebird.com/v1");
    assert_eq!(client.auth_manager().key_mode(), Some(KeyMode::Live));
}

#[test]
fn test_client_requires_access_key() {
    let config = ConversationsConfigBuilder::new().build_unchecked();
    let err = ConversationsClientImpl::with_transport(config, Arc::new(MockHttpTransport::new()))
        .unwrap_err();
    assert!(matches!(
        err,
        ConversationsError::Configuration(ConfigurationError::MissingAccessKey)
    ));
}

#[tokio::test]
async fn test_client_routes_through_transport() {
    let mock = Arc::new(MockHttpTransport::new().add_json_response(
        &conversation_fixtures::list(vec![conversation_fixtures::archived("c1")]),
    ));
    let client = ConversationsClientImpl::with_transport(config(), mock.clone()).unwrap();

    let list = client
        .conversations()
        .list(Some(ListRequest::new().limit(1)))
        .await
        .unwrap();

    assert_eq!(list.items[0].id, "c1");
    let request = mock.last_request().unwrap();
    assert_eq!(
        request.url,
        "https://conversations.messagebird.com/v1/conversations?limit=1&offset=0"
    );
    assert_eq!(request.timeout, Some(Duration::from_secs(12)));
    assert_eq!(
        request.header("authorization"),
        Some("AccessKey live_abcdefghijklmnop")
    );
}

#[tokio::test]
async fn test_client_trait_object() {
    let mock = Arc::new(MockHttpTransport::new().add_response(crate::mocks::MockResponse::ok(
        r#"{"offset":0,"limit":0,"count":0,"totalCount":0,"items":[]}"#,
    )));
    let client: Box<dyn ConversationsClient> =
        Box::new(ConversationsClientImpl::with_transport(config(), mock.clone()).unwrap());

    let list = client.messages().list(None).await.unwrap();

    assert!(list.items.is_empty());
    assert_eq!(
        mock.last_request().unwrap().url,
        "https://conversations.messagebird.com/v1/messages"
    );
    assert_eq!(
        crate::types::encode_query(Some(&ListMessagesRequest::new())),
        ""
    );
}

#[test]
fn test_client_debug_redacts_key() {
    let client =
        ConversationsClientImpl::with_transport(config(), Arc::new(MockHttpTransport::new()))
            .unwrap();
    let debug = format!("{:?}", client);
    assert!(!debug.contains("live_abcdefghijklmnop"));
}
