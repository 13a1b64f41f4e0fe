//! Response types for conversations service.

use crate::types::Conversation;
use serde::{Deserialize, Serialize};

/// One page of conversations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationList {
    /// Offset of this page
    #[serde(default)]
    pub offset: u32,
    /// Page size
    #[serde(default)]
    pub limit: u32,
    /// Number of items in this page
    #[serde(default)]
    pub count: u32,
    /// Total number of matching conversations
    #[serde(default)]
    pub total_count: u64,
    /// Conversations in this page
    #[serde(default)]
    pub items: Vec<Conversation>,
}

impl ConversationList {
    /// Whether more pages follow this one
    pub fn has_more(&self) -> bool {
        u64::from(self.offset) + u64::from(self.count) < self.total_count
    }
}

/// One page of conversation IDs belonging to a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationByContactList {
    /// Offset of this page
    #[serde(default)]
    pub offset: u32,
    /// Page size
    #[serde(default)]
    pub limit: u32,
    /// Number of items in this page
    #[serde(default)]
    pub count: u32,
    /// Total number of matching conversations
    #[serde(default)]
    pub total_count: u64,
    /// Conversation IDs
    #[serde(default)]
    pub items: Vec<String>,
}
