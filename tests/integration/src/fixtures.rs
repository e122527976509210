//! Shared fixtures: channel layout, users, and a fully wired engine

use std::collections::HashSet;
use std::sync::Arc;

use starboard_common::GuildConfig;
use starboard_core::{
    Channel, ChannelType, EmojiId, KeyValueStore, Message, Reaction, Snowflake, User,
};
use starboard_engine::{EngineContext, StarboardService};
use starboard_store::{MemoryStore, StarboardData};

use crate::helpers::{MockClient, MockRenderer};

pub const GUILD: Snowflake = Snowflake::new(1);
/// Ordinary text channel with default thresholds
pub const GENERAL: Snowflake = Snowflake::new(100);
/// High-traffic channel: elevated thresholds, auto-delete armed
pub const MEMES: Snowflake = Snowflake::new(777);
/// The curated feed channel
pub const STARBOARD: Snowflake = Snowflake::new(500);
/// Moderation log channel
pub const ACTION_LOG: Snowflake = Snowflake::new(600);
/// Channel on the exclusion list
pub const EXCLUDED: Snowflake = Snowflake::new(400);
/// Forum channel (never tracked)
pub const FORUM: Snowflake = Snowflake::new(410);
/// DM channel (never tracked)
pub const DM: Snowflake = Snowflake::new(420);

pub const ADMIN_USER: Snowflake = Snowflake::new(50);
pub const AUTHOR: Snowflake = Snowflake::new(60);

pub fn guild_config() -> GuildConfig {
    GuildConfig {
        guild_id: GUILD,
        starboard_channel_id: STARBOARD,
        high_traffic_channel_id: MEMES,
        moderated_channel_id: MEMES,
        action_log_channel_id: ACTION_LOG,
        excluded_channel_ids: HashSet::from([EXCLUDED]),
        admin_user_ids: HashSet::from([ADMIN_USER]),
        notify_ttl_secs: 24 * 60 * 60,
    }
}

pub fn author() -> User {
    User::new(AUTHOR, "luke")
}

pub fn admin_author() -> User {
    User::new(ADMIN_USER, "zelis")
}

pub fn star(count: u32) -> Reaction {
    Reaction::new(EmojiId::unicode("\u{2b50}"), count)
}

pub fn emoji(name: &str, count: u32) -> Reaction {
    Reaction::new(EmojiId::unicode(name), count)
}

pub fn delete_emoji(count: u32) -> Reaction {
    Reaction::new(EmojiId::custom("delet_this", Snowflake::new(9_999)), count)
}

/// A fully wired engine over mock collaborators
pub struct Harness {
    pub client: Arc<MockClient>,
    pub store: Arc<MemoryStore>,
    pub service: StarboardService,
}

impl Harness {
    pub fn new() -> Self {
        let client = MockClient::new();
        client.add_channel(Channel::new_text(GENERAL, GUILD, "general"));
        client.add_channel(Channel::new_text(MEMES, GUILD, "memes"));
        client.add_channel(Channel::new_text(STARBOARD, GUILD, "starboard"));
        client.add_channel(Channel::new_text(ACTION_LOG, GUILD, "action-log"));
        client.add_channel(Channel::new_text(EXCLUDED, GUILD, "rules"));
        client.add_channel(Channel::new_forum(FORUM, GUILD, "help"));
        client.add_channel(Channel {
            id: DM,
            guild_id: None,
            name: None,
            channel_type: ChannelType::Dm,
        });

        let store = Arc::new(MemoryStore::new());
        let data = StarboardData::load(Arc::clone(&store) as Arc<dyn KeyValueStore>)
            .expect("fresh store always loads");
        let ctx = EngineContext::new(
            Arc::clone(&client) as Arc<dyn starboard_core::ChatClient>,
            Arc::new(MockRenderer),
            data,
            guild_config(),
        );
        Self {
            client,
            store,
            service: StarboardService::new(ctx),
        }
    }

    /// Seed a source message with the given reactions
    pub fn seed_message(&self, channel_id: Snowflake, message_id: Snowflake, user: User) {
        self.client
            .add_message(Message::new(message_id, channel_id, user, "nice message"));
    }

    /// Check whether the ledger tracks a source message
    pub fn is_tracked(&self, message_id: Snowflake) -> bool {
        self.service
            .context()
            .data()
            .read(|doc| doc.is_tracked(message_id))
    }

    /// Number of ledger entries
    pub fn ledger_len(&self) -> usize {
        self.service
            .context()
            .data()
            .read(|doc| doc.starboard.len())
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
