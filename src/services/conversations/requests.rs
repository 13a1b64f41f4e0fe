//! Request types for conversations service.

use crate::types::{
    non_empty, ConversationStatus, Fallback, MessageContent, MessageRecipient, MessageTag,
    MessageType, PaginationRequest, QueryParams, Source,
};
use serde::Serialize;

/// Filters for listing conversations.
///
/// Results are sorted by `lastReceivedDatetime`, so conversations with new
/// messages come first. `limit` and `offset` are always sent, even when zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// Pagination
    pub pagination: PaginationRequest,
    /// Comma-separated conversation IDs
    pub ids: Option<String>,
    /// Only conversations in this status
    pub status: Option<ConversationStatus>,
}

impl ListRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.limit = limit;
        self
    }

    /// Set the offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.offset = offset;
        self
    }

    /// Restrict to a comma-separated list of IDs
    pub fn ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// Restrict to the given IDs
    pub fn id_list<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = ids
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.ids(joined)
    }

    /// Restrict to a status
    pub fn status(mut self, status: ConversationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl QueryParams for ListRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.pagination.pairs();
        if let Some(ids) = non_empty(&self.ids) {
            pairs.push(("ids", ids.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

/// Filters for listing the conversations of one contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListByContactRequest {
    /// Pagination
    pub pagination: PaginationRequest,
    /// Conversation ID filter
    pub id: Option<String>,
    /// Only conversations in this status
    pub status: Option<ConversationStatus>,
}

impl ListByContactRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.limit = limit;
        self
    }

    /// Set the offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.offset = offset;
        self
    }

    /// Restrict to a conversation ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Restrict to a status
    pub fn status(mut self, status: ConversationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl QueryParams for ListByContactRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.pagination.pairs();
        if let Some(id) = non_empty(&self.id) {
            pairs.push(("id", id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

/// Request to start a conversation by sending its first message.
///
/// If the recipient already has an active conversation, the API resumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    /// Channel to send through
    pub channel_id: String,
    /// Message content
    pub content: MessageContent,
    /// Recipient
    pub to: MessageRecipient,
    /// Content type
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Free-form metadata echoed back in webhooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// URL receiving delivery reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
    /// Message tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<MessageTag>,
    /// Caller-side tracking ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// Event type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Time to live, e.g. `10m`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
}

impl StartRequest {
    /// Create a new request
    pub fn new(
        to: impl Into<MessageRecipient>,
        message_type: MessageType,
        content: MessageContent,
    ) -> Self {
        Self {
            channel_id: String::new(),
            content,
            to: to.into(),
            message_type,
            source: None,
            report_url: None,
            tag: None,
            track_id: None,
            event_type: None,
            ttl: None,
        }
    }

    /// Create a plain text request
    pub fn text(to: impl Into<MessageRecipient>, text: impl Into<String>) -> Self {
        Self::new(to, MessageType::Text, MessageContent::text(text))
    }

    /// Set the channel
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Set source metadata
    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the delivery report URL
    pub fn report_url(mut self, url: impl Into<String>) -> Self {
        self.report_url = Some(url.into());
        self
    }

    /// Set the message tag
    pub fn tag(mut self, tag: impl Into<MessageTag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the tracking ID
    pub fn track_id(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = Some(track_id.into());
        self
    }

    /// Set the event type
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Set the time to live
    pub fn ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }
}

/// Request to send a message into an existing conversation.
///
/// Replying to an archived conversation makes the API open a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    /// Content type
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Message content
    pub content: MessageContent,
    /// Channel override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Fallback channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    /// Free-form metadata echoed back in webhooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Event type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// URL receiving delivery reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
    /// Message tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<MessageTag>,
    /// Caller-side tracking ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// Time to live
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
}

impl ReplyRequest {
    /// Create a new request
    pub fn new(message_type: MessageType, content: MessageContent) -> Self {
        Self {
            message_type,
            content,
            channel_id: None,
            fallback: None,
            source: None,
            event_type: None,
            report_url: None,
            tag: None,
            track_id: None,
            ttl: None,
        }
    }

    /// Create a plain text reply
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(MessageType::Text, MessageContent::text(text))
    }

    /// Send through a specific channel
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Set the fallback
    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Set source metadata
    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the event type
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Set the delivery report URL
    pub fn report_url(mut self, url: impl Into<String>) -> Self {
        self.report_url = Some(url.into());
        self
    }

    /// Set the message tag
    pub fn tag(mut self, tag: impl Into<MessageTag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the tracking ID
    pub fn track_id(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = Some(track_id.into());
        self
    }

    /// Set the time to live
    pub fn ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }
}

/// Request to change a conversation's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateRequest {
    /// Target status
    pub status: ConversationStatus,
}

impl UpdateRequest {
    /// Create a new request
    pub fn new(status: ConversationStatus) -> Self {
        Self { status }
    }

    /// Archive the conversation
    pub fn archive() -> Self {
        Self::new(ConversationStatus::Archived)
    }

    /// Make the conversation active again
    pub fn activate() -> Self {
        Self::new(ConversationStatus::Active)
    }
}
