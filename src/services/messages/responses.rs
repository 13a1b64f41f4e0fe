//! Response types for messages service.

use crate::types::Message;
use serde::{Deserialize, Serialize};

/// One page of messages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageList {
    /// Offset of this page
    #[serde(default)]
    pub offset: u32,
    /// Page size
    #[serde(default)]
    pub limit: u32,
    /// Number of items in this page
    #[serde(default)]
    pub count: u32,
    /// Total number of matching messages
    #[serde(default)]
    pub total_count: u64,
    /// Messages in this page
    #[serde(default)]
    pub items: Vec<Message>,
}
