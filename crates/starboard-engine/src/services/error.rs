//! Engine error types
//!
//! Unified error type for all engine operations. Event cascades log and
//! swallow these at the dispatch boundary; operator commands surface them
//! to the caller.

use starboard_core::{ClientError, RenderError, StoreError};
use thiserror::Error;

/// Engine layer error type
#[derive(Debug, Error)]
pub enum EngineError {
    /// Platform client failure (fetch, send, edit, delete)
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Embed renderer failure
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Command invoker lacks a required permission
    #[error("Missing required permission: {permission}")]
    PermissionDenied { permission: String },

    /// Command input could not be used
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Create a permission denied error
    pub fn permission_denied(permission: impl Into<String>) -> Self {
        Self::PermissionDenied {
            permission: permission.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check whether a later event for the same message can recover
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Client(_) | Self::Render(_) | Self::Store(_))
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
