//! Integration tests for the conversations endpoints

use super::*;
use messagebird_conversations::errors::{AuthenticationError, RateLimitError, ServerError};
use messagebird_conversations::fixtures::{conversation_fixtures, message_fixtures};
use messagebird_conversations::services::conversations::{
    ConversationsServiceTrait, ListByContactRequest, ListRequest, ReplyRequest, StartRequest,
    UpdateRequest,
};
use messagebird_conversations::types::ConversationStatus;
use messagebird_conversations::ConversationsError;
use serde_json::json;
use wiremock::matchers::{body_json, query_param};

#[tokio::test]
async fn test_start_conversation() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/conversations/start")
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "channelId": "619747f69cf940a98fb443140ce9aed2",
            "content": {"text": "Hello world"},
            "to": "+31624971134",
            "type": "text"
        })))
        .respond_with(success_response(conversation_fixtures::active("conv-new")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let conversation = client
        .conversations()
        .start(
            StartRequest::text("+31624971134", "Hello world")
                .channel_id("619747f69cf940a98fb443140ce9aed2"),
        )
        .await
        .expect("start succeeds");

    assert_eq!(conversation.id, "conv-new");
    assert_eq!(conversation.last_used_channel_id, "619747f69cf940a98fb443140ce9aed2");
}

#[tokio::test]
async fn test_list_query_string() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/conversations")
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .and(query_param("ids", "A,B"))
        .respond_with(success_response(conversation_fixtures::list(vec![
            conversation_fixtures::active("A"),
            conversation_fixtures::archived("B"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let list = client
        .conversations()
        .list(Some(ListRequest::new().limit(10).ids("A,B")))
        .await
        .expect("list succeeds");

    assert_eq!(list.count, 2);
    assert_eq!(list.items[1].status, ConversationStatus::Archived);

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(received[0].url.query(), Some("limit=10&offset=0&ids=A%2CB"));
}

#[tokio::test]
async fn test_list_without_request_sends_no_query() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/conversations")
        .respond_with(success_response(conversation_fixtures::list(vec![])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.conversations().list(None).await.expect("list succeeds");

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn test_list_by_contact() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/conversations/contact-1/conversation")
        .and(query_param("id", "conv-1"))
        .respond_with(success_response(conversation_fixtures::by_contact_list(&[
            "conv-1",
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let list = client
        .conversations()
        .list_by_contact("contact-1", Some(ListByContactRequest::new().id("conv-1")))
        .await
        .expect("list succeeds");

    assert_eq!(list.items, vec!["conv-1".to_string()]);
}

#[tokio::test]
async fn test_reply_and_update() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/conversations/conv-1/messages")
        .and(body_json(json!({"type": "text", "content": {"text": "On it"}})))
        .respond_with(success_response(message_fixtures::text("msg-1", "conv-1", "On it")))
        .expect(1)
        .mount(&mock_server)
        .await;

    mock_with_auth("PATCH", "/v1/conversations/conv-1")
        .and(body_json(json!({"status": "archived"})))
        .respond_with(success_response(conversation_fixtures::archived("conv-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let message = client
        .conversations()
        .reply("conv-1", ReplyRequest::text("On it"))
        .await
        .expect("reply succeeds");
    assert_eq!(message.conversation_id, "conv-1");

    let conversation = client
        .conversations()
        .update("conv-1", UpdateRequest::archive())
        .await
        .expect("update succeeds");
    assert!(!conversation.is_active());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/conversations/conv-1"))
        .respond_with(error_response(401, 2, "Request not allowed (incorrect access_key)"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.conversations().read("conv-1").await.unwrap_err();

    match err {
        ConversationsError::Authentication(AuthenticationError::InvalidAccessKey { message }) => {
            assert_eq!(message, "Request not allowed (incorrect access_key)");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limit_reads_retry_after() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/conversations"))
        .respond_with(error_response(429, 429, "Too many requests").insert_header("Retry-After", "3"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.conversations().list(None).await.unwrap_err();

    assert!(err.is_retryable());
    match err {
        ConversationsError::RateLimit(RateLimitError::RateLimited { retry_after }) => {
            assert_eq!(retry_after, Some(Duration::from_secs(3)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_without_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/conversations/conv-1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.conversations().read("conv-1").await.unwrap_err();

    assert_eq!(err.http_status(), Some(502));
    assert!(matches!(
        err,
        ConversationsError::Server(ServerError::Other { status: 502, .. })
    ));
}
