//! Conversations service implementation.

use super::*;
use crate::errors::ConversationsResult;
use crate::services::ServiceContext;
use crate::transport::encode_body;
use crate::types::{encode_query, with_query, Conversation, Message};
use async_trait::async_trait;
use http::Method;
use tracing::instrument;

/// Trait for conversations service operations
#[async_trait]
pub trait ConversationsServiceTrait: Send + Sync {
    /// List conversations, most recently active first.
    ///
    /// `None` sends no query string at all.
    async fn list(&self, request: Option<ListRequest>) -> ConversationsResult<ConversationList>;

    /// List the IDs of a contact's conversations
    async fn list_by_contact(
        &self,
        contact_id: &str,
        request: Option<ListByContactRequest>,
    ) -> ConversationsResult<ConversationByContactList>;

    /// Get a single conversation
    async fn read(&self, id: &str) -> ConversationsResult<Conversation>;

    /// Start a conversation by sending its first message
    async fn start(&self, request: StartRequest) -> ConversationsResult<Conversation>;

    /// Send a message into an existing conversation
    async fn reply(&self, conversation_id: &str, request: ReplyRequest) -> ConversationsResult<Message>;

    /// Change a conversation's status
    async fn update(&self, id: &str, request: UpdateRequest) -> ConversationsResult<Conversation>;
}

/// Conversations service implementation
#[derive(Clone, Debug)]
pub struct ConversationsService {
    ctx: ServiceContext,
}

impl ConversationsService {
    /// Create a new conversations service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ConversationsServiceTrait for ConversationsService {
    #[instrument(skip(self, request))]
    async fn list(&self, request: Option<ListRequest>) -> ConversationsResult<ConversationList> {
        let query = encode_query(request.as_ref());
        let path = with_query("conversations", &query);
        self.ctx.request(Method::GET, &path, None).await
    }

    #[instrument(skip(self, request))]
    async fn list_by_contact(
        &self,
        contact_id: &str,
        request: Option<ListByContactRequest>,
    ) -> ConversationsResult<ConversationByContactList> {
        let query = encode_query(request.as_ref());
        let path = with_query(&format!("conversations/{}/conversation", contact_id), &query);
        self.ctx.request(Method::GET, &path, None).await
    }

    #[instrument(skip(self))]
    async fn read(&self, id: &str) -> ConversationsResult<Conversation> {
        self.ctx
            .request(Method::GET, &format!("conversations/{}", id), None)
            .await
    }

    #[instrument(skip(self, request), fields(to = %request.to, message_type = ?request.message_type))]
    async fn start(&self, request: StartRequest) -> ConversationsResult<Conversation> {
        let body = encode_body(&request)?;
        self.ctx
            .request(Method::POST, "conversations/start", Some(body))
            .await
    }

    #[instrument(skip(self, request), fields(message_type = ?request.message_type))]
    async fn reply(&self, conversation_id: &str, request: ReplyRequest) -> ConversationsResult<Message> {
        let body = encode_body(&request)?;
        self.ctx
            .request(
                Method::POST,
                &format!("conversations/{}/messages", conversation_id),
                Some(body),
            )
            .await
    }

    #[instrument(skip(self), fields(status = %request.status))]
    async fn update(&self, id: &str, request: UpdateRequest) -> ConversationsResult<Conversation> {
        let body = encode_body(&request)?;
        self.ctx
            .request(Method::PATCH, &format!("conversations/{}", id), Some(body))
            .await
    }
}
