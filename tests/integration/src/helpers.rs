//! Test helpers for integration tests
//!
//! Provides an in-memory platform client and a minimal quote renderer so
//! engine behavior can be exercised without a live platform connection.
//! The mock client yields at every call, matching the engine's model of
//! suspension at each externally-fetched resource.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use starboard_core::{
    Channel, ChatClient, ClientError, ClientResult, Embed, Message, OutgoingMessage,
    QuoteRenderer, Reaction, ReactionSnapshot, RenderResult, Snowflake, User,
};

/// A message the mock client sent on behalf of the engine
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel_id: Snowflake,
    pub id: Snowflake,
    pub payload: OutgoingMessage,
}

/// An in-place edit the mock client performed
#[derive(Debug, Clone)]
pub struct EditRecord {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub payload: OutgoingMessage,
}

#[derive(Default)]
struct WorldState {
    channels: HashMap<Snowflake, Channel>,
    messages: HashMap<(Snowflake, Snowflake), Message>,
    reactions: HashMap<Snowflake, ReactionSnapshot>,
    posted: HashSet<(Snowflake, Snowflake)>,
    sent: Vec<SentMessage>,
    edits: Vec<EditRecord>,
    deletions: Vec<(Snowflake, Snowflake)>,
    next_id: i64,
}

/// In-memory platform client
pub struct MockClient {
    state: Mutex<WorldState>,
}

impl MockClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(WorldState {
                next_id: 9_000,
                ..WorldState::default()
            }),
        })
    }

    pub fn add_channel(&self, channel: Channel) {
        self.state.lock().channels.insert(channel.id, channel);
    }

    pub fn add_message(&self, message: Message) {
        self.state
            .lock()
            .messages
            .insert((message.channel_id, message.id), message);
    }

    /// Replace the current reaction counts for a message
    pub fn set_reactions(&self, message_id: Snowflake, reactions: Vec<Reaction>) {
        self.state
            .lock()
            .reactions
            .insert(message_id, ReactionSnapshot::new(reactions));
    }

    /// Everything sent to one channel, in order
    pub fn sent_to(&self, channel_id: Snowflake) -> Vec<SentMessage> {
        self.state
            .lock()
            .sent
            .iter()
            .filter(|m| m.channel_id == channel_id)
            .cloned()
            .collect()
    }

    /// Every in-place edit, in order
    pub fn edits(&self) -> Vec<EditRecord> {
        self.state.lock().edits.clone()
    }

    /// Every deletion `(channel_id, message_id)`, in order
    pub fn deletions(&self) -> Vec<(Snowflake, Snowflake)> {
        self.state.lock().deletions.clone()
    }

    /// Check whether a source message still exists
    pub fn message_exists(&self, channel_id: Snowflake, message_id: Snowflake) -> bool {
        self.state
            .lock()
            .messages
            .contains_key(&(channel_id, message_id))
    }

    /// Simulate a bot-posted message vanishing out from under the ledger
    pub fn forget_posted(&self, channel_id: Snowflake, message_id: Snowflake) {
        self.state.lock().posted.remove(&(channel_id, message_id));
    }
}

#[async_trait]
impl ChatClient for MockClient {
    async fn fetch_channel(&self, channel_id: Snowflake) -> ClientResult<Channel> {
        tokio::task::yield_now().await;
        self.state
            .lock()
            .channels
            .get(&channel_id)
            .cloned()
            .ok_or(ClientError::ChannelNotFound(channel_id))
    }

    async fn fetch_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ClientResult<Message> {
        tokio::task::yield_now().await;
        self.state
            .lock()
            .messages
            .get(&(channel_id, message_id))
            .cloned()
            .ok_or(ClientError::MessageNotFound {
                channel_id,
                message_id,
            })
    }

    async fn fetch_reactions(
        &self,
        _channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ClientResult<ReactionSnapshot> {
        tokio::task::yield_now().await;
        Ok(self
            .state
            .lock()
            .reactions
            .get(&message_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send_message(
        &self,
        channel_id: Snowflake,
        payload: OutgoingMessage,
    ) -> ClientResult<Snowflake> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = Snowflake::new(state.next_id);
        state.posted.insert((channel_id, id));
        state.sent.push(SentMessage {
            channel_id,
            id,
            payload,
        });
        Ok(id)
    }

    async fn edit_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        payload: OutgoingMessage,
    ) -> ClientResult<()> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock();
        if !state.posted.contains(&(channel_id, message_id)) {
            return Err(ClientError::MessageNotFound {
                channel_id,
                message_id,
            });
        }
        state.edits.push(EditRecord {
            channel_id,
            message_id,
            payload,
        });
        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ClientResult<()> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock();
        if state.posted.remove(&(channel_id, message_id)) {
            state.deletions.push((channel_id, message_id));
            return Ok(());
        }
        if state.messages.remove(&(channel_id, message_id)).is_some() {
            state.deletions.push((channel_id, message_id));
            return Ok(());
        }
        Err(ClientError::MessageNotFound {
            channel_id,
            message_id,
        })
    }
}

/// Renderer that quotes message content into a single embed
pub struct MockRenderer;

#[async_trait]
impl QuoteRenderer for MockRenderer {
    async fn render(
        &self,
        messages: &[Message],
        requested_by: Option<&User>,
        _safe_link: bool,
        jump_link_template: Option<&str>,
    ) -> RenderResult<Vec<Embed>> {
        let mut description = messages
            .iter()
            .map(|m| m.content.clone())
            .collect::<Vec<_>>()
            .join("\n");
        if let Some(template) = jump_link_template {
            description.push_str(template);
        }
        let mut embed = Embed::new();
        if let Some(message) = messages.first() {
            embed = embed.with_author(
                message.author.username.clone(),
                message.author.avatar_url.clone(),
            );
        }
        embed = embed.with_description(description);
        if let Some(requester) = requested_by {
            embed.footer = Some(format!("Quoted by {}", requester.username));
        }
        Ok(vec![embed])
    }
}
