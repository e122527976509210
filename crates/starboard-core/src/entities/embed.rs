//! Embed - display payload carried to the platform
//!
//! Produced by the quote renderer and passed through to the client
//! untouched; the engine never inspects embed internals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rendered embed block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

impl Embed {
    /// Create an empty embed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description text
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the primary image
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the author line
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_icon_url = icon_url;
        self
    }
}
