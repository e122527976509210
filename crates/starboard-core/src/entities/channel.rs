//! Channel entity - the bot's view of a platform channel

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Channel type enum (platform type codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ChannelType {
    /// Guild text channel
    #[default]
    GuildText = 0,
    /// Direct message between users
    Dm = 1,
    /// Guild announcement channel
    GuildAnnouncement = 5,
    /// Thread under a text or announcement channel
    PublicThread = 11,
    /// Guild forum channel (posts only, no plain messages)
    GuildForum = 15,
}

impl From<i16> for ChannelType {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Dm,
            5 => Self::GuildAnnouncement,
            11 => Self::PublicThread,
            15 => Self::GuildForum,
            _ => Self::GuildText, // Default for 0 and unknown values
        }
    }
}

impl From<ChannelType> for i16 {
    fn from(ct: ChannelType) -> Self {
        ct as i16
    }
}

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub name: Option<String>,
    pub channel_type: ChannelType,
}

impl Channel {
    /// Create a new guild text channel
    #[must_use]
    pub fn new_text(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: Some(name.into()),
            channel_type: ChannelType::GuildText,
        }
    }

    /// Create a new DM channel
    #[must_use]
    pub fn new_dm(id: Snowflake) -> Self {
        Self {
            id,
            guild_id: None,
            name: None,
            channel_type: ChannelType::Dm,
        }
    }

    /// Create a new forum channel
    #[must_use]
    pub fn new_forum(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: Some(name.into()),
            channel_type: ChannelType::GuildForum,
        }
    }

    /// Check if this channel lives in a DM context
    #[inline]
    #[must_use]
    pub fn is_dm_based(&self) -> bool {
        matches!(self.channel_type, ChannelType::Dm)
    }

    /// Check if this is a forum channel
    #[inline]
    #[must_use]
    pub fn is_forum(&self) -> bool {
        matches!(self.channel_type, ChannelType::GuildForum)
    }

    /// Get display name (channel name or fallback for DMs)
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Direct Message")
    }

    /// Channel mention string for outbound message content
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}
