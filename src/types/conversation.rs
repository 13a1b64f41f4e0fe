//! Conversation-related types.

use super::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a conversation.
///
/// A contact has at most one active conversation. Once archived, the next
/// inbound message from that contact opens a new conversation instead of
/// reactivating this one. Statuses this client does not know decode to
/// [`ConversationStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    /// Conversation is active
    Active,
    /// Conversation is archived
    Archived,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl ConversationStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStatus::Active => "active",
            ConversationStatus::Archived => "archived",
            ConversationStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A thread of messages between the account and one contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Conversation ID
    pub id: String,
    /// Owning contact ID
    #[serde(default)]
    pub contact_id: String,
    /// Resolved contact, when the API embeds it
    #[serde(default)]
    pub contact: Option<Contact>,
    /// Channels used in this conversation, in API order
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Current status
    pub status: ConversationStatus,
    /// Creation time
    #[serde(default)]
    pub created_datetime: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_datetime: Option<DateTime<Utc>>,
    /// Time the last inbound message arrived
    #[serde(default)]
    pub last_received_datetime: Option<DateTime<Utc>>,
    /// Channel used for the last message
    #[serde(default)]
    pub last_used_channel_id: String,
    /// Platform used for the last message
    #[serde(default)]
    pub last_used_platform_id: Option<Platform>,
    /// Message summary
    #[serde(default)]
    pub messages: MessagesCount,
}

impl Conversation {
    /// Check whether the conversation is active
    pub fn is_active(&self) -> bool {
        self.status == ConversationStatus::Active
    }

    /// Find a channel of this conversation by ID
    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }
}

/// Communication endpoint attached to a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Channel ID
    pub id: String,
    /// Channel name
    #[serde(default)]
    pub name: String,
    /// Platform of the channel
    #[serde(default)]
    pub platform_id: String,
    /// Channel status as reported by the API
    #[serde(default)]
    pub status: String,
    /// Creation time
    #[serde(default)]
    pub created_datetime: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_datetime: Option<DateTime<Utc>>,
}

/// Summary of the messages in a conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesCount {
    /// Link to the message listing
    #[serde(default)]
    pub href: String,
    /// Total number of messages
    #[serde(default)]
    pub total_count: u64,
    /// ID of the most recent message
    #[serde(default)]
    pub last_message_id: String,
}

/// Contact a conversation belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact ID
    pub id: String,
    /// Link to the contact resource
    #[serde(default)]
    pub href: String,
    /// Phone number
    #[serde(default)]
    pub msisdn: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Custom fields
    #[serde(default)]
    pub custom_details: ContactCustomDetails,
    /// Creation time
    #[serde(default)]
    pub created_datetime: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_datetime: Option<DateTime<Utc>>,
}

impl Contact {
    /// First and last name joined, or the MSISDN when both are empty
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.msisdn.clone()
        } else {
            name.to_string()
        }
    }
}

/// Free-form custom contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ContactCustomDetails {
    #[serde(default)]
    pub custom1: Option<String>,
    #[serde(default)]
    pub custom2: Option<String>,
    #[serde(default)]
    pub custom3: Option<String>,
    #[serde(default)]
    pub custom4: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ConversationStatus::Archived).unwrap(),
            r#""archived""#
        );
        let status: ConversationStatus = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(status, ConversationStatus::Active);
        let status: ConversationStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, ConversationStatus::Unknown);
    }

    #[test]
    fn test_conversation_absent_timestamps_are_none() {
        let conversation: Conversation = serde_json::from_str(
            r#"{
                "id": "conv-1",
                "contactId": "contact-1",
                "status": "active",
                "createdDatetime": "2019-04-02T08:19:37Z",
                "messages": {"href": "", "totalCount": 0}
            }"#,
        )
        .unwrap();

        assert_eq!(
            conversation.created_datetime,
            Some(Utc.with_ymd_and_hms(2019, 4, 2, 8, 19, 37).unwrap())
        );
        assert!(conversation.updated_datetime.is_none());
        assert!(conversation.last_received_datetime.is_none());
        assert!(conversation.channels.is_empty());
        assert_eq!(conversation.messages.total_count, 0);
        assert_eq!(conversation.messages.last_message_id, "");
    }

    #[test]
    fn test_conversation_null_timestamp_is_none() {
        let conversation: Conversation = serde_json::from_str(
            r#"{
                "id": "conv-1",
                "status": "archived",
                "createdDatetime": "2019-04-02T08:19:37Z",
                "updatedDatetime": null,
                "messages": {}
            }"#,
        )
        .unwrap();

        assert!(conversation.updated_datetime.is_none());
        assert!(!conversation.is_active());
    }

    #[test]
    fn test_conversation_without_created_datetime() {
        let conversation: Conversation =
            serde_json::from_str(r#"{"id":"c","status":"active","messages":{}}"#).unwrap();

        assert!(conversation.created_datetime.is_none());
        assert!(conversation.is_active());
    }

    #[test]
    fn test_unknown_status_keeps_list_page_decodable() {
        let conversations: Vec<Conversation> = serde_json::from_str(
            r#"[
                {"id":"c1","status":"pending","createdDatetime":"2019-04-02T08:19:37Z","messages":{}},
                {"id":"c2","status":"archived","messages":{}}
            ]"#,
        )
        .unwrap();

        assert_eq!(conversations[0].status, ConversationStatus::Unknown);
        assert!(!conversations[0].is_active());
        assert_eq!(conversations[1].status, ConversationStatus::Archived);
    }

    #[test]
    fn test_contact_display_name() {
        let mut contact: Contact =
            serde_json::from_str(r#"{"id":"c1","msisdn":"31612345678"}"#).unwrap();
        assert_eq!(contact.display_name(), "31612345678");

        contact.first_name = "Jen".to_string();
        assert_eq!(contact.display_name(), "Jen");
    }
}
