//! Chat service operations used by the app layer
//!
//! The app never talks HTTP directly. Background tasks call through this trait,
//! which keeps the update function testable with a scripted gateway.

use chrono::{DateTime, Utc};
use slackdeck_core::prelude::*;
use slackdeck_core::{Channel, Identity, MessageReceipt, Presence};

use crate::session::Session;

/// A history entry as returned by the service, before the author is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMessage {
    /// Author user ID. `None` for bot and system messages.
    pub user_id: Option<String>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryMessage {
    pub fn new(user_id: Option<&str>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.map(str::to_string),
            text: text.into(),
            timestamp,
        }
    }
}

/// Operations the app performs against the chat service.
///
/// Implement [`ChatGateway`] (the `Send` variant); the local variant exists
/// for single-threaded callers and is implemented automatically.
#[trait_variant::make(ChatGateway: Send)]
pub trait LocalChatGateway {
    /// Validate a credential and learn who it belongs to
    async fn authenticate(&self, credential: &str) -> Result<(Session, Identity)>;

    /// Non-archived public and private conversations visible to the user
    async fn list_channels(&self, session: &Session) -> Result<Vec<Channel>>;

    /// Most recent messages of one conversation, newest first
    async fn list_recent_messages(
        &self,
        session: &Session,
        channel_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoryMessage>>;

    /// Display name for a user ID
    async fn resolve_display_name(&self, session: &Session, user_id: &str) -> Result<String>;

    /// Set both the presence flag and the matching custom status
    async fn set_presence(&self, session: &Session, presence: Presence) -> Result<()>;

    /// Post a plain-text message to a conversation
    async fn post_message(
        &self,
        session: &Session,
        channel_id: &str,
        text: &str,
    ) -> Result<MessageReceipt>;
}
