//! User entity - the bot's view of a platform user

use crate::value_objects::Snowflake;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bot: bool,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            avatar_url: None,
            bot: false,
        }
    }

    /// Mark this user as a bot account
    #[must_use]
    pub fn as_bot(mut self) -> Self {
        self.bot = true;
        self
    }

    /// Check if user is a bot account
    #[inline]
    pub fn is_bot(&self) -> bool {
        self.bot
    }

    /// User mention string for outbound message content
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}
