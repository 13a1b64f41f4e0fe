//! Test fixtures for Conversations API responses.
//!
//! Payloads mirror what the API returns on the wire, so they exercise the
//! same decoding path as real responses.

use serde_json::{json, Value};

/// Conversation payloads
pub mod conversation_fixtures {
    use super::*;

    /// An active WhatsApp conversation with one channel
    pub fn active(id: &str) -> Value {
        json!({
            "id": id,
            "contactId": "9354647c5a144c6c9a5a3e4a08b56a55",
            "contact": {
                "id": "9354647c5a144c6c9a5a3e4a08b56a55",
                "href": "https://contacts.messagebird.com/v2/contacts/9354647c5a144c6c9a5a3e4a08b56a55",
                "msisdn": "31624971134",
                "firstName": "Jen",
                "lastName": "Smith",
                "customDetails": {},
                "createdDatetime": "2019-04-02T08:19:37Z",
                "updatedDatetime": "2019-04-02T08:19:38Z"
            },
            "channels": [
                {
                    "id": "619747f69cf940a98fb443140ce9aed2",
                    "name": "My WhatsApp",
                    "platformId": "whatsapp",
                    "status": "active",
                    "createdDatetime": "2019-04-01T15:25:12Z",
                    "updatedDatetime": "0001-01-01T00:00:00Z"
                }
            ],
            "status": "active",
            "createdDatetime": "2019-04-02T08:19:37Z",
            "updatedDatetime": "2019-04-02T08:54:42.497114599Z",
            "lastReceivedDatetime": "2019-04-02T08:54:42.464955904Z",
            "lastUsedChannelId": "619747f69cf940a98fb443140ce9aed2",
            "lastUsedPlatformId": "whatsapp",
            "messages": {
                "totalCount": 10,
                "href": format!("https://conversations.messagebird.com/v1/conversations/{}/messages", id),
                "lastMessageId": "6bd6a5a6bf3a4b3e8b6b2b1c4f1e2d3a"
            }
        })
    }

    /// An archived conversation with only the required fields
    pub fn archived(id: &str) -> Value {
        json!({
            "id": id,
            "contactId": "9354647c5a144c6c9a5a3e4a08b56a55",
            "status": "archived",
            "createdDatetime": "2019-04-02T08:19:37Z",
            "messages": {}
        })
    }

    /// A page of conversations
    pub fn list(items: Vec<Value>) -> Value {
        json!({
            "offset": 0,
            "limit": 20,
            "count": items.len(),
            "totalCount": items.len(),
            "items": items
        })
    }

    /// A page of conversation IDs for one contact
    pub fn by_contact_list(ids: &[&str]) -> Value {
        json!({
            "offset": 0,
            "limit": 20,
            "count": ids.len(),
            "totalCount": ids.len(),
            "items": ids
        })
    }
}

/// Message payloads
pub mod message_fixtures {
    use super::*;

    /// An accepted outbound text message
    pub fn text(id: &str, conversation_id: &str, text: &str) -> Value {
        json!({
            "id": id,
            "conversationId": conversation_id,
            "platform": "whatsapp",
            "to": "+31624971134",
            "from": "619747f69cf940a98fb443140ce9aed2",
            "channelId": "619747f69cf940a98fb443140ce9aed2",
            "type": "text",
            "content": {"text": text},
            "direction": "sent",
            "status": "accepted",
            "createdDatetime": "2019-04-02T08:54:42.497114599Z",
            "updatedDatetime": "2019-04-02T08:54:42.497114599Z"
        })
    }

    /// A page of messages
    pub fn list(items: Vec<Value>) -> Value {
        json!({
            "offset": 0,
            "limit": 20,
            "count": items.len(),
            "totalCount": items.len(),
            "items": items
        })
    }
}

/// Error payloads
pub mod error_fixtures {
    use super::*;

    /// An `errors` body with one entry
    pub fn single(code: i64, description: &str, parameter: Option<&str>) -> Value {
        let mut error = json!({"code": code, "description": description});
        if let Some(parameter) = parameter {
            error["parameter"] = json!(parameter);
        }
        json!({ "errors": [error] })
    }
}
