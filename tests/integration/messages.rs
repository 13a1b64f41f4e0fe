//! Integration tests for the messages endpoints

use super::*;
use messagebird_conversations::errors::RequestError;
use messagebird_conversations::fixtures::message_fixtures;
use messagebird_conversations::services::messages::{
    ListMessagesRequest, MessagesServiceTrait, SendMessageRequest,
};
use messagebird_conversations::types::{Fallback, MessageDirection, MessageType};
use messagebird_conversations::ConversationsError;
use serde_json::json;
use wiremock::matchers::body_json;

#[tokio::test]
async fn test_send_message_with_fallback() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/send")
        .and(body_json(json!({
            "to": "+31624971134",
            "from": "whatsapp-channel",
            "type": "text",
            "content": {"text": "Your order shipped"},
            "fallback": {"from": "sms-channel", "after": "1m"}
        })))
        .respond_with(success_response(message_fixtures::text(
            "msg-1",
            "conv-1",
            "Your order shipped",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let message = client
        .messages()
        .send(
            SendMessageRequest::text("+31624971134", "whatsapp-channel", "Your order shipped")
                .fallback(Fallback::new("sms-channel").after("1m")),
        )
        .await
        .expect("send succeeds");

    assert_eq!(message.message_type, MessageType::Text);
    assert_eq!(message.direction, Some(MessageDirection::Sent));
}

#[tokio::test]
async fn test_list_messages_ids_only() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/messages")
        .respond_with(success_response(message_fixtures::list(vec![
            message_fixtures::text("A", "conv-1", "one"),
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let list = client
        .messages()
        .list(Some(ListMessagesRequest::new().ids("A,B")))
        .await
        .expect("list succeeds");

    assert_eq!(list.items.len(), 1);
    let received = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(received[0].url.query(), Some("ids=A%2CB"));
}

#[tokio::test]
async fn test_read_missing_message() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/messages/nope")
        .respond_with(error_response(404, 20, "message not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.messages().read("nope").await.unwrap_err();

    assert_eq!(err.error_code(), "MB_REQUEST");
    assert!(matches!(
        err,
        ConversationsError::Request(RequestError::NotFound { .. })
    ));
}
