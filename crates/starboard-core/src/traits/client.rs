//! Platform client port - the engine's window onto the chat platform
//!
//! The real connection lives outside this crate; the engine only depends
//! on this trait. Every fetch returns current platform state, which is
//! the authoritative view at decision time.

use async_trait::async_trait;

use crate::entities::{Channel, Embed, Message, ReactionSnapshot};
use crate::error::ClientResult;
use crate::value_objects::Snowflake;

/// Outbound message payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
}

impl OutgoingMessage {
    /// Create a plain-text payload
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: Vec::new(),
        }
    }

    /// Attach rendered embeds to the payload
    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = embeds;
        self
    }
}

/// Platform client operations used by the aggregation engine
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Fetch a channel by id
    async fn fetch_channel(&self, channel_id: Snowflake) -> ClientResult<Channel>;

    /// Fetch a message by id
    async fn fetch_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ClientResult<Message>;

    /// Fetch the current reaction counts on a message
    async fn fetch_reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ClientResult<ReactionSnapshot>;

    /// Send a message, returning the id the platform assigned
    async fn send_message(
        &self,
        channel_id: Snowflake,
        payload: OutgoingMessage,
    ) -> ClientResult<Snowflake>;

    /// Edit a previously sent message in place
    async fn edit_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        payload: OutgoingMessage,
    ) -> ClientResult<()>;

    /// Delete a message
    async fn delete_message(&self, channel_id: Snowflake, message_id: Snowflake)
        -> ClientResult<()>;
}
