//! Domain errors - failure types for the collaborator ports
//!
//! The engine distinguishes "target no longer resolvable" (recoverable by
//! a later event) from transport failures, so not-found conditions are
//! first-class variants rather than options.

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Errors surfaced by the platform client port
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Message not found: {message_id} in channel {channel_id}")]
    MessageNotFound {
        channel_id: Snowflake,
        message_id: Snowflake,
    },

    #[error("Platform request failed: {0}")]
    Request(String),
}

impl ClientError {
    /// Check if this is a "no longer resolvable" error
    ///
    /// Distinguishes stale references (cleared so a later event can
    /// recover) from transient transport failures (abandoned outright).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ChannelNotFound(_) | Self::MessageNotFound { .. }
        )
    }
}

/// Result type for platform client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the persistence port
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage I/O failed: {0}")]
    Io(String),
}

/// Result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the embed renderer port
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Render failed: {0}")]
    Render(String),
}

/// Result type for renderer operations
pub type RenderResult<T> = Result<T, RenderError>;
