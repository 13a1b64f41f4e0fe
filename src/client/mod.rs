//! Conversations API client implementation.
//!
//! Provides the main entry point: configuration is turned into an auth
//! manager and a transport, and both are shared by every service.

use crate::auth::AuthManager;
use crate::config::ConversationsConfig;
use crate::errors::ConversationsResult;
use crate::services::conversations::ConversationsServiceTrait;
use crate::services::messages::MessagesServiceTrait;
use crate::services::{ConversationsService, MessagesService, ServiceContext};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tracing::debug;

/// Trait defining the client interface
pub trait ConversationsClient: Send + Sync {
    /// Get the configuration
    fn config(&self) -> &ConversationsConfig;

    /// Get the authentication manager
    fn auth_manager(&self) -> &AuthManager;

    /// Get the conversations service
    fn conversations(&self) -> &dyn ConversationsServiceTrait;

    /// Get the messages service
    fn messages(&self) -> &dyn MessagesServiceTrait;
}

/// Main client implementation
#[derive(Clone)]
pub struct ConversationsClientImpl {
    config: Arc<ConversationsConfig>,
    auth: AuthManager,
    transport: Arc<dyn HttpTransport>,
    conversations_service: ConversationsService,
    messages_service: MessagesService,
}

impl ConversationsClientImpl {
    /// Create a new client backed by the reqwest transport
    pub fn new(config: ConversationsConfig) -> ConversationsResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new client with a custom transport
    pub fn with_transport(
        config: ConversationsConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> ConversationsResult<Self> {
        config.validate()?;

        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());

        debug!(base_url = %config.base_url, key_mode = ?auth.key_mode(), "Creating client");

        let ctx = ServiceContext::new(transport.clone(), config.clone()).with_timeout(config.timeout);

        Ok(Self {
            config,
            auth,
            transport,
            conversations_service: ConversationsService::new(ctx.clone()),
            messages_service: MessagesService::new(ctx),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    /// Get the transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get the conversations service
    pub fn conversations(&self) -> &ConversationsService {
        &self.conversations_service
    }

    /// Get the messages service
    pub fn messages(&self) -> &MessagesService {
        &self.messages_service
    }
}

impl ConversationsClient for ConversationsClientImpl {
    fn config(&self) -> &ConversationsConfig {
        &self.config
    }

    fn auth_manager(&self) -> &AuthManager {
        &self.auth
    }

    fn conversations(&self) -> &dyn ConversationsServiceTrait {
        &self.conversations_service
    }

    fn messages(&self) -> &dyn MessagesServiceTrait {
        &self.messages_service
    }
}

impl std::fmt::Debug for ConversationsClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationsClientImpl")
            .field("base_url", &self.config.base_url.as_str())
            .field("auth", &self.auth)
            .finish()
    }
}
