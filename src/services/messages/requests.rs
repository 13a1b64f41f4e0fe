//! Request types for messages service.

use crate::types::{
    non_empty, Fallback, MessageContent, MessageRecipient, MessageTag, MessageType, QueryParams,
    Source,
};
use serde::Serialize;

/// Request to send a message without addressing a conversation.
///
/// The API routes it into the recipient's active conversation or opens a
/// new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Recipient
    pub to: MessageRecipient,
    /// Channel ID to send from
    pub from: String,
    /// Content type
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Message content
    pub content: MessageContent,
    /// URL receiving delivery reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
    /// Fallback channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    /// Free-form metadata echoed back in webhooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Message tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<MessageTag>,
    /// Caller-side tracking ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// Event type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Time to live
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
}

impl SendMessageRequest {
    /// Create a new request
    pub fn new(
        to: impl Into<MessageRecipient>,
        from: impl Into<String>,
        message_type: MessageType,
        content: MessageContent,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            message_type,
            content,
            report_url: None,
            fallback: None,
            source: None,
            tag: None,
            track_id: None,
            event_type: None,
            ttl: None,
        }
    }

    /// Create a plain text request
    pub fn text(
        to: impl Into<MessageRecipient>,
        from: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(to, from, MessageType::Text, MessageContent::text(text))
    }

    /// Set the delivery report URL
    pub fn report_url(mut self, url: impl Into<String>) -> Self {
        self.report_url = Some(url.into());
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

/// Filters for listing messages.
///
/// Unlike the conversation listings, zero `limit`/`offset` are left out and
/// the server defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMessagesRequest {
    /// Page size
    pub limit: u32,
    /// Number of items to skip
    pub offset: u32,
    /// Comma-separated message IDs
    pub ids: Option<String>,
}

impl ListMessagesRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Restrict to a comma-separated list of IDs
    pub fn ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }
}

impl QueryParams for ListMessagesRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.limit > 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        if self.offset > 0 {
            pairs.push(("offset", self.offset.to_string()));
        }
        if let Some(ids) = non_empty(&self.ids) {
            pairs.push(("ids", ids.to_string()));
        }
        pairs
    }
}
