//! Message-related types.

use super::{MessageTag, Source};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of message content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text
    Text,
    /// Image with optional caption
    Image,
    /// Video with optional caption
    Video,
    /// Audio clip
    Audio,
    /// Generic file
    File,
    /// Geographic location
    Location,
    /// WhatsApp highly structured message (template)
    Hsm,
    /// Interactive message (buttons, lists)
    Interactive,
    /// Platform event
    Event,
    /// Type not known to this client
    #[serde(other)]
    Unknown,
}

impl Default for MessageType {
    fn default() -> Self {
        MessageType::Unknown
    }
}

/// Delivery status of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Accepted by the API
    Accepted,
    /// Waiting to be sent
    Pending,
    /// Handed to the platform
    Sent,
    /// Rejected by the platform
    Rejected,
    /// Delivery failed
    Failed,
    /// Delivered to the recipient
    Delivered,
    /// Inbound message received
    Received,
    /// Read by the recipient
    Read,
    /// Deleted
    Deleted,
    /// Not supported by the channel
    Unsupported,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// Whether a message was sent by the account or received from the contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    /// Inbound
    Received,
    /// Outbound
    Sent,
}

/// Media reference for image/video/audio/file content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Public URL of the media
    pub url: String,
    /// Optional caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Media {
    /// Create a media reference
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
        }
    }

    /// Set the caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Geographic location
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Language of an HSM template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsmLanguage {
    /// `deterministic` or `fallback`
    pub policy: String,
    /// Language code, e.g. `en` or `en_US`
    pub code: String,
}

impl HsmLanguage {
    /// Deterministic language selection for the given code
    pub fn deterministic(code: impl Into<String>) -> Self {
        Self {
            policy: "deterministic".to_string(),
            code: code.into(),
        }
    }
}

/// Currency parameter of an HSM template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HsmCurrency {
    /// ISO 4217 code
    pub code: String,
    /// Amount in thousandths of the currency unit
    pub amount: i64,
}

/// One parameter substituted into an HSM template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HsmParameter {
    /// Default text value
    pub default: String,
    /// Localized currency value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<HsmCurrency>,
    /// Localized date/time value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
}

impl HsmParameter {
    /// Plain text parameter
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            default: value.into(),
            currency: None,
            date_time: None,
        }
    }
}

/// WhatsApp template message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hsm {
    /// Template namespace
    pub namespace: String,
    /// Template name
    pub template_name: String,
    /// Template language
    pub language: HsmLanguage,
    /// Template parameters, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<HsmParameter>,
}

/// Content of a message. Exactly one field is expected to be set, matching
/// the message type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Media>,
    /// Video content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Media>,
    /// Audio content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Media>,
    /// File content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Media>,
    /// Location content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Template content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsm: Option<Hsm>,
}

impl MessageContent {
    /// Text content
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Image content
    pub fn image(media: Media) -> Self {
        Self {
            image: Some(media),
            ..Default::default()
        }
    }

    /// Video content
    pub fn video(media: Media) -> Self {
        Self {
            video: Some(media),
            ..Default::default()
        }
    }

    /// Audio content
    pub fn audio(media: Media) -> Self {
        Self {
            audio: Some(media),
            ..Default::default()
        }
    }

    /// File content
    pub fn file(media: Media) -> Self {
        Self {
            file: Some(media),
            ..Default::default()
        }
    }

    /// Location content
    pub fn location(latitude: f64, longitude: f64) -> Self {
        Self {
            location: Some(Location {
                latitude,
                longitude,
            }),
            ..Default::default()
        }
    }

    /// Template content
    pub fn hsm(hsm: Hsm) -> Self {
        Self {
            hsm: Some(hsm),
            ..Default::default()
        }
    }
}

/// Fallback delivery over another channel when the primary one fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    /// Channel ID to fall back to
    pub from: String,
    /// Delay before falling back, e.g. `1m`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl Fallback {
    /// Fall back to the given channel
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            after: None,
        }
    }

    /// Set the fallback delay
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }
}

/// A message within a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message ID
    pub id: String,
    /// Conversation the message belongs to
    #[serde(default)]
    pub conversation_id: String,
    /// Channel the message went through
    #[serde(default)]
    pub channel_id: String,
    /// Platform the message went through
    #[serde(default)]
    pub platform: String,
    /// Recipient
    #[serde(default)]
    pub to: String,
    /// Sender
    #[serde(default)]
    pub from: String,
    /// Direction
    #[serde(default)]
    pub direction: Option<MessageDirection>,
    /// Delivery status
    #[serde(default)]
    pub status: Option<MessageStatus>,
    /// Content type, `Unknown` when the response leaves it out
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    /// Content
    #[serde(default)]
    pub content: MessageContent,
    /// Creation time
    #[serde(default)]
    pub created_datetime: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_datetime: Option<DateTime<Utc>>,
    /// Source metadata supplied at send time
    #[serde(default)]
    pub source: Option<Source>,
    /// Message tag
    #[serde(default)]
    pub tag: Option<MessageTag>,
    /// Fallback configuration
    #[serde(default)]
    pub fallback: Option<Fallback>,
    /// Time to live
    #[serde(default)]
    pub ttl: Option<String>,
}
