//! Common types for the Conversations API.
//!
//! Defines the entities returned by the API and the value types shared by
//! request and response shapes.

use serde::{Deserialize, Serialize};

pub mod conversation;
pub mod message;
pub mod query;

pub use conversation::*;
pub use message::*;
pub use query::*;

/// Messaging platform identifier (`sms`, `whatsapp`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform(pub String);

impl Platform {
    /// SMS
    pub const SMS: &'static str = "sms";
    /// WhatsApp
    pub const WHATSAPP: &'static str = "whatsapp";
    /// Facebook Messenger
    pub const FACEBOOK: &'static str = "facebook";
    /// Telegram
    pub const TELEGRAM: &'static str = "telegram";
    /// LINE
    pub const LINE: &'static str = "line";
    /// WeChat
    pub const WECHAT: &'static str = "wechat";
    /// Email
    pub const EMAIL: &'static str = "email";
    /// Instagram
    pub const INSTAGRAM: &'static str = "instagram";

    /// Create a new platform identifier
    pub fn new(platform: impl Into<String>) -> Self {
        Self(platform.into())
    }

    /// Get the platform as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recipient of an outbound message: phone number, email address or
/// platform-specific user id, depending on the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRecipient(pub String);

impl MessageRecipient {
    /// Create a new recipient
    pub fn new(to: impl Into<String>) -> Self {
        Self(to.into())
    }

    /// Get the recipient as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageRecipient {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageRecipient {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MessageRecipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message tag used for messages sent outside the 24h customer-care window
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTag(pub String);

impl MessageTag {
    /// Reminder for an event the user registered for
    pub const EVENT_CONFIRMED_EVENT_REMINDER: &'static str = "event.confirmed-event-reminder";
    /// Update about a purchase
    pub const EVENT_POST_PURCHASE_UPDATE: &'static str = "event.post-purchase-update";
    /// Account change notification
    pub const ACCOUNT_UPDATED: &'static str = "account.updated";
    /// Reply from a human agent
    pub const HUMAN_AGENT: &'static str = "human-agent";

    /// Create a new tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Free-form `source` metadata attached to outbound messages
pub type Source = serde_json::Map<String, serde_json::Value>;
