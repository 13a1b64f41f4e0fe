//! Messages service implementation.

use super::*;
use crate::errors::ConversationsResult;
use crate::services::ServiceContext;
use crate::transport::encode_body;
use crate::types::{encode_query, with_query, Message};
use async_trait::async_trait;
use http::Method;
use tracing::instrument;

/// Trait for messages service operations
#[async_trait]
pub trait MessagesServiceTrait: Send + Sync {
    /// Send a message to a recipient through a channel
    async fn send(&self, request: SendMessageRequest) -> ConversationsResult<Message>;

    /// List messages
    async fn list(&self, request: Option<ListMessagesRequest>) -> ConversationsResult<MessageList>;

    /// Get a single message
    async fn read(&self, id: &str) -> ConversationsResult<Message>;
}

/// Messages service implementation
#[derive(Clone, Debug)]
pub struct MessagesService {
    ctx: ServiceContext,
}

impl MessagesService {
    /// Create a new messages service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl MessagesServiceTrait for MessagesService {
    #[instrument(skip(self, request), fields(to = %request.to, from = %request.from))]
    async fn send(&self, request: SendMessageRequest) -> ConversationsResult<Message> {
        let body = encode_body(&request)?;
        self.ctx.request(Method::POST, "send", Some(body)).await
    }

    #[instrument(skip(self, request))]
    async fn list(&self, request: Option<ListMessagesRequest>) -> ConversationsResult<MessageList> {
        let query = encode_query(request.as_ref());
        let path = with_query("messages", &query);
        self.ctx.request(Method::GET, &path, None).await
    }

    #[instrument(skip(self))]
    async fn read(&self, id: &str) -> ConversationsResult<Message> {
        self.ctx
            .request(Method::GET, &format!("messages/{}", id), None)
            .await
    }
}
