//! Operator taxonomy commands
//!
//! The three admin-only commands the bot exposes: register negative
//! emoji, register delete emoji, list the current configuration. Each is
//! a synchronous request/response with a plain-text reply. Persistence
//! failures propagate to the invoker instead of being swallowed.

use starboard_core::{extract_emojis, Permissions, Snowflake};
use tracing::{info, instrument};

use super::context::EngineContext;
use super::error::{EngineError, EngineResult};

/// The member invoking a command, with resolved permissions
#[derive(Debug, Clone)]
pub struct CommandActor {
    pub user_id: Snowflake,
    pub permissions: Permissions,
}

impl CommandActor {
    /// Create a new actor
    pub fn new(user_id: Snowflake, permissions: Permissions) -> Self {
        Self {
            user_id,
            permissions,
        }
    }
}

/// Taxonomy command service
pub struct TaxonomyCommands<'a> {
    ctx: &'a EngineContext,
}

impl<'a> TaxonomyCommands<'a> {
    /// Create a new TaxonomyCommands
    pub fn new(ctx: &'a EngineContext) -> Self {
        Self { ctx }
    }

    /// Register one or more negative emoji
    #[instrument(skip(self))]
    pub async fn add_negative_emojis(
        &self,
        actor: &CommandActor,
        input: &str,
    ) -> EngineResult<String> {
        self.require_admin(actor)?;
        let names = parse_emoji_names(input)?;
        self.ctx.data().mutate(|doc| {
            doc.taxonomy.add_negative(names.iter().cloned());
        });
        self.ctx.data().persist().await?;

        info!(user_id = %actor.user_id, emojis = ?names, "Registered negative emojis");
        Ok(format!("Added {} to the negative emojis", names.join(", ")))
    }

    /// Register one or more delete emoji
    #[instrument(skip(self))]
    pub async fn add_delete_emojis(
        &self,
        actor: &CommandActor,
        input: &str,
    ) -> EngineResult<String> {
        self.require_admin(actor)?;
        let names = parse_emoji_names(input)?;
        self.ctx.data().mutate(|doc| {
            doc.taxonomy.add_delete(names.iter().cloned());
        });
        self.ctx.data().persist().await?;

        info!(user_id = %actor.user_id, emojis = ?names, "Registered delete emojis");
        Ok(format!("Added {} to the delete emojis", names.join(", ")))
    }

    /// List the current taxonomy configuration
    #[instrument(skip(self))]
    pub async fn list_config(&self, actor: &CommandActor) -> EngineResult<String> {
        self.require_admin(actor)?;
        Ok(self.ctx.data().read(|doc| {
            let negative: Vec<&str> = doc.taxonomy.negative().collect();
            let delete: Vec<&str> = doc.taxonomy.delete().collect();
            format!(
                "Negative emojis: {}\nDelete emojis: {}",
                negative.join(", "),
                delete.join(", ")
            )
        }))
    }

    fn require_admin(&self, actor: &CommandActor) -> EngineResult<()> {
        if actor.permissions.has(Permissions::ADMINISTRATOR) {
            Ok(())
        } else {
            Err(EngineError::permission_denied("ADMINISTRATOR"))
        }
    }
}

/// Extract emoji names from free-text command input
fn parse_emoji_names(input: &str) -> EngineResult<Vec<String>> {
    let names: Vec<String> = extract_emojis(input)
        .iter()
        .map(|emoji| emoji.name().to_string())
        .collect();
    if names.is_empty() {
        return Err(EngineError::invalid_input("no emojis found in input"));
    }
    Ok(names)
}
