//! Gateway events - message and reaction lifecycle notifications
//!
//! Independent events delivered by the platform connection. A reaction
//! event carries the emoji identity but no count; counts are always
//! re-fetched at decision time.

use serde::{Deserialize, Serialize};

use crate::value_objects::{EmojiId, Snowflake};

/// Lifecycle events the aggregation engine reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEvent {
    ReactionAdded {
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: EmojiId,
    },
    ReactionRemoved {
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: EmojiId,
    },
    MessageUpdated {
        channel_id: Snowflake,
        message_id: Snowflake,
    },
    MessageDeleted {
        channel_id: Snowflake,
        message_id: Snowflake,
    },
}

impl GatewayEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReactionAdded { .. } => "REACTION_ADDED",
            Self::ReactionRemoved { .. } => "REACTION_REMOVED",
            Self::MessageUpdated { .. } => "MESSAGE_UPDATED",
            Self::MessageDeleted { .. } => "MESSAGE_DELETED",
        }
    }

    /// The message this event concerns (the serialization key)
    pub fn message_id(&self) -> Snowflake {
        match self {
            Self::ReactionAdded { message_id, .. }
            | Self::ReactionRemoved { message_id, .. }
            | Self::MessageUpdated { message_id, .. }
            | Self::MessageDeleted { message_id, .. } => *message_id,
        }
    }

    /// The channel the message lives in
    pub fn channel_id(&self) -> Snowflake {
        match self {
            Self::ReactionAdded { channel_id, .. }
            | Self::ReactionRemoved { channel_id, .. }
            | Self::MessageUpdated { channel_id, .. }
            | Self::MessageDeleted { channel_id, .. } => *channel_id,
        }
    }
}
