//! Emoji taxonomy - operator-maintained emoji classification
//!
//! Two sets of emoji names: "negative" (counts toward removal
//! consideration, never toward promotion) and "delete" (arms the
//! auto-delete evaluation). An emoji may sit in neither, either, or both
//! sets; each decision point checks the membership it cares about.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Operator-maintained emoji classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiTaxonomy {
    #[serde(rename = "negative_emojis", default)]
    negative: BTreeSet<String>,
    #[serde(rename = "delete_emojis", default)]
    delete: BTreeSet<String>,
}

impl EmojiTaxonomy {
    /// Create an empty taxonomy
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an emoji name is registered as negative
    #[inline]
    pub fn is_negative(&self, name: &str) -> bool {
        self.negative.contains(name)
    }

    /// Check whether an emoji name is registered as a delete trigger
    #[inline]
    pub fn is_delete(&self, name: &str) -> bool {
        self.delete.contains(name)
    }

    /// Register emoji names as negative
    pub fn add_negative<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negative.extend(names.into_iter().map(Into::into));
    }

    /// Register emoji names as delete triggers
    pub fn add_delete<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delete.extend(names.into_iter().map(Into::into));
    }

    /// Iterate registered negative emoji names
    pub fn negative(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }

    /// Iterate registered delete emoji names
    pub fn delete(&self) -> impl Iterator<Item = &str> {
        self.delete.iter().map(String::as_str)
    }
}
