//! Emoji identity - platform-global symbols and guild custom emoji
//!
//! Reaction decisions key off emoji *names* (the taxonomy stores names),
//! while rendering needs the full identity to resolve custom emoji by id.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::value_objects::Snowflake;

/// The platform-global star symbol, promoted at the lower star threshold.
pub const STAR_EMOJI: &str = "\u{2b50}";

/// Identity of a reaction emoji
///
/// Either a platform-global symbol (identified by the character itself) or
/// a guild custom emoji (identified by snowflake, with a display name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmojiId {
    /// Platform-global symbol, e.g. "⭐"
    Unicode(String),
    /// Guild custom emoji
    Custom { name: String, id: Snowflake },
}

impl EmojiId {
    /// Create a platform-global emoji identity
    pub fn unicode(symbol: impl Into<String>) -> Self {
        Self::Unicode(symbol.into())
    }

    /// Create a guild custom emoji identity
    pub fn custom(name: impl Into<String>, id: Snowflake) -> Self {
        Self::Custom {
            name: name.into(),
            id,
        }
    }

    /// The emoji name used for taxonomy membership checks
    pub fn name(&self) -> &str {
        match self {
            Self::Unicode(symbol) => symbol,
            Self::Custom { name, .. } => name,
        }
    }

    /// Check whether this is the platform-global star symbol
    #[inline]
    pub fn is_star(&self) -> bool {
        matches!(self, Self::Unicode(symbol) if symbol == STAR_EMOJI)
    }

    /// Check whether this is a guild custom emoji
    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

// Custom emoji render as the platform's `<:name:id>` tag so outbound
// message content displays them rather than the raw name.
impl fmt::Display for EmojiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(symbol) => write!(f, "{symbol}"),
            Self::Custom { name, id } => write!(f, "<:{name}:{id}>"),
        }
    }
}

fn emoji_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?x)
            (<a?:(?P<name>[^:>\s]+):(?P<id>[0-9]+)>)   # custom emoji tag
            | (?P<uni>\p{Emoji_Presentation}|\p{Extended_Pictographic})
            ",
        )
        .expect("emoji pattern is valid")
    })
}

/// Extract every emoji mentioned in free text
///
/// Recognizes guild custom emoji tags (`<:name:id>`, animated `<a:name:id>`)
/// and pictographic symbols. A custom tag preceded by a backslash is an
/// escaped literal and is skipped.
pub fn extract_emojis(input: &str) -> Vec<EmojiId> {
    let mut found = Vec::new();
    for captures in emoji_pattern().captures_iter(input) {
        let whole = captures.get(0).expect("group 0 always present");
        if let Some(symbol) = captures.name("uni") {
            found.push(EmojiId::unicode(symbol.as_str()));
            continue;
        }
        if whole.start() > 0 && input.as_bytes()[whole.start() - 1] == b'\\' {
            continue;
        }
        let name = &captures["name"];
        match captures["id"].parse::<i64>() {
            Ok(raw) => found.push(EmojiId::custom(name, Snowflake::new(raw))),
            Err(_) => continue,
        }
    }
    found
}
