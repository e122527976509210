//! Quote renderer port - message body to display payload
//!
//! Embed construction (author line, avatar, jump link, image selection) is
//! a separate subsystem; the engine only asks it to quote messages.

use async_trait::async_trait;

use crate::entities::{Embed, Message, User};
use crate::error::RenderResult;

/// Renders one or more source messages into a quoted display payload
#[async_trait]
pub trait QuoteRenderer: Send + Sync {
    /// Render a quoted view of `messages`
    ///
    /// `requested_by` adds a "quoted by" footer when present. `safe_link`
    /// marks the jump link as trusted; `jump_link_template` (with a `$$`
    /// placeholder for the message url) appends a jump line to the body.
    async fn render(
        &self,
        messages: &[Message],
        requested_by: Option<&User>,
        safe_link: bool,
        jump_link_template: Option<&str>,
    ) -> RenderResult<Vec<Embed>>;
}
