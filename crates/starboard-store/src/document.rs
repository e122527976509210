//! Persisted document - the bot's single named record
//!
//! Taxonomy plus starboard ledger, serialized as one JSON object and
//! rewritten in full on every mutation. Layout:
//! `{"negative_emojis": [...], "delete_emojis": [...], "starboard": {source: entry}}`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use starboard_core::{EmojiTaxonomy, Snowflake};

/// Record name under which the document is stored
pub const RECORD_KEY: &str = "starboard";

/// The persisted state: emoji taxonomy and the starboard ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarboardDocument {
    #[serde(flatten)]
    pub taxonomy: EmojiTaxonomy,
    /// Source message id → posted starboard message id, one-to-one
    #[serde(default)]
    pub starboard: BTreeMap<Snowflake, Snowflake>,
}

impl StarboardDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a source message has a live starboard entry
    #[inline]
    pub fn is_tracked(&self, source_id: Snowflake) -> bool {
        self.starboard.contains_key(&source_id)
    }

    /// The posted starboard message for a source message, if any
    #[inline]
    pub fn entry(&self, source_id: Snowflake) -> Option<Snowflake> {
        self.starboard.get(&source_id).copied()
    }

    /// Record a newly posted starboard entry
    pub fn insert_entry(&mut self, source_id: Snowflake, starboard_id: Snowflake) {
        self.starboard.insert(source_id, starboard_id);
    }

    /// Remove a starboard entry, returning the posted message id
    pub fn remove_entry(&mut self, source_id: Snowflake) -> Option<Snowflake> {
        self.starboard.remove(&source_id)
    }
}
