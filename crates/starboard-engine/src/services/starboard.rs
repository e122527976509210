//! Starboard service - the aggregation engine
//!
//! Receives message and reaction lifecycle events, consults the threshold
//! policy and the emoji taxonomy, and drives the starboard ledger and the
//! auto-delete cascade. All state-changing work for a message happens
//! under that message's exclusivity lock; the durable write follows after
//! the lock is released.
//!
//! State machine per message id: untracked → tracked → removed. A tracked
//! message refreshes in place on reaction changes and edits; the only
//! demotion path is deletion of the source message.

use starboard_common::{ExpiringSet, KeyedMutexSet};
use starboard_core::decision::meets_promotion_threshold;
use starboard_core::{
    Channel, EmojiId, GatewayEvent, OutgoingMessage, Reaction, ReactionSnapshot, Snowflake,
};
use tracing::{debug, info, instrument, warn};

use super::context::EngineContext;
use super::error::EngineResult;

/// Jump-link template appended to rendered entries; the renderer expands
/// `$$` to the source message url.
const JUMP_LINK_TEMPLATE: &str = "\n\n**[Jump to message!]($$)**";

/// The aggregation engine
pub struct StarboardService {
    pub(crate) ctx: EngineContext,
    locks: KeyedMutexSet<Snowflake>,
    pub(crate) notified: ExpiringSet<Snowflake>,
}

impl StarboardService {
    /// Create the engine over a context
    pub fn new(ctx: EngineContext) -> Self {
        let notify_ttl = ctx.config().notify_ttl();
        Self {
            ctx,
            locks: KeyedMutexSet::new(),
            notified: ExpiringSet::new(notify_ttl),
        }
    }

    /// Get the engine context
    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Process one gateway event, never propagating failure
    ///
    /// Fetch failures and downstream errors degrade to a log entry; a
    /// later event for the same message recovers naturally.
    pub async fn handle_event(&self, event: GatewayEvent) {
        let outcome = match &event {
            GatewayEvent::ReactionAdded {
                channel_id,
                message_id,
                emoji,
            } => self.on_reaction_added(*channel_id, *message_id, emoji).await,
            GatewayEvent::ReactionRemoved {
                channel_id,
                message_id,
                ..
            } => self.on_reaction_removed(*channel_id, *message_id).await,
            GatewayEvent::MessageUpdated {
                channel_id,
                message_id,
            } => self.on_message_updated(*channel_id, *message_id).await,
            GatewayEvent::MessageDeleted { message_id, .. } => {
                self.on_message_deleted(*message_id).await
            }
        };
        if let Err(err) = outcome {
            warn!(
                event = event.event_type(),
                message_id = %event.message_id(),
                error = %err,
                "Event cascade abandoned"
            );
        }
    }

    /// Reaction added to a message
    #[instrument(skip(self))]
    pub async fn on_reaction_added(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &EmojiId,
    ) -> EngineResult<()> {
        let Some(channel) = self.eligible_channel(channel_id).await? else {
            return Ok(());
        };
        let guard = self.locks.lock(message_id).await;
        let snapshot = self
            .ctx
            .client()
            .fetch_reactions(channel_id, message_id)
            .await?;

        // Delete emojis are checked before any promotion logic.
        let is_delete = self
            .ctx
            .data()
            .read(|doc| doc.taxonomy.is_delete(emoji.name()));
        let count = snapshot.count_of(emoji);
        if is_delete && count >= self.ctx.policy().auto_delete_threshold() {
            let trigger = Reaction::new(emoji.clone(), count);
            self.run_auto_delete(&channel, message_id, &trigger, &snapshot)
                .await?;
            return Ok(());
        }

        let tracked = self.ctx.data().read(|doc| doc.is_tracked(message_id));
        let promote = tracked
            || self.ctx.data().read(|doc| {
                meets_promotion_threshold(&snapshot, channel_id, self.ctx.policy(), &doc.taxonomy)
            });
        if !promote {
            return Ok(());
        }

        self.update_entry(channel_id, message_id, &snapshot).await?;
        drop(guard);
        self.ctx.data().persist().await?;
        Ok(())
    }

    /// Reaction removed from a message
    ///
    /// Refreshes the displayed counts of a tracked message. Count drops
    /// never demote.
    #[instrument(skip(self))]
    pub async fn on_reaction_removed(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> EngineResult<()> {
        if self.eligible_channel(channel_id).await?.is_none() {
            return Ok(());
        }
        let guard = self.locks.lock(message_id).await;
        if !self.ctx.data().read(|doc| doc.is_tracked(message_id)) {
            return Ok(());
        }
        let snapshot = self
            .ctx
            .client()
            .fetch_reactions(channel_id, message_id)
            .await?;
        self.update_entry(channel_id, message_id, &snapshot).await?;
        drop(guard);
        self.ctx.data().persist().await?;
        Ok(())
    }

    /// Message content edited
    #[instrument(skip(self))]
    pub async fn on_message_updated(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> EngineResult<()> {
        if self.eligible_channel(channel_id).await?.is_none() {
            return Ok(());
        }
        let guard = self.locks.lock(message_id).await;
        if !self.ctx.data().read(|doc| doc.is_tracked(message_id)) {
            return Ok(());
        }
        let snapshot = self
            .ctx
            .client()
            .fetch_reactions(channel_id, message_id)
            .await?;
        self.update_entry(channel_id, message_id, &snapshot).await?;
        drop(guard);
        self.ctx.data().persist().await?;
        Ok(())
    }

    /// Source message deleted - the only demotion path
    #[instrument(skip(self))]
    pub async fn on_message_deleted(&self, message_id: Snowflake) -> EngineResult<()> {
        let guard = self.locks.lock(message_id).await;
        let Some(starboard_id) = self.ctx.data().read(|doc| doc.entry(message_id)) else {
            return Ok(());
        };
        let starboard_channel = self.ctx.config().starboard_channel_id;
        match self
            .ctx
            .client()
            .delete_message(starboard_channel, starboard_id)
            .await
        {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                warn!(
                    %message_id,
                    %starboard_id,
                    "Starboard message already gone; clearing stale ledger entry"
                );
            }
            Err(err) => return Err(err.into()),
        }
        self.ctx.data().mutate(|doc| {
            doc.remove_entry(message_id);
        });
        info!(%message_id, %starboard_id, "Removed starboard entry");
        drop(guard);
        self.ctx.data().persist().await?;
        Ok(())
    }

    /// Create or refresh the posted starboard entry for a message
    ///
    /// Renders the current message content plus a reaction summary line.
    /// If the ledger references a starboard message that no longer exists,
    /// the stale entry is cleared so a future event can re-create it.
    async fn update_entry(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        snapshot: &ReactionSnapshot,
    ) -> EngineResult<()> {
        let message = self
            .ctx
            .client()
            .fetch_message(channel_id, message_id)
            .await?;
        let embeds = self
            .ctx
            .renderer()
            .render(&[message], None, true, Some(JUMP_LINK_TEMPLATE))
            .await?;
        let payload = OutgoingMessage {
            content: Some(reactions_line(snapshot, channel_id)),
            embeds,
        };

        let starboard_channel = self.ctx.config().starboard_channel_id;
        match self.ctx.data().read(|doc| doc.entry(message_id)) {
            Some(starboard_id) => {
                match self
                    .ctx
                    .client()
                    .edit_message(starboard_channel, starboard_id, payload)
                    .await
                {
                    Ok(()) => {
                        debug!(%message_id, %starboard_id, "Refreshed starboard entry");
                    }
                    Err(err) if err.is_not_found() => {
                        warn!(
                            %message_id,
                            %starboard_id,
                            "Ledger references a missing starboard message; clearing stale entry"
                        );
                        self.ctx.data().mutate(|doc| {
                            doc.remove_entry(message_id);
                        });
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            None => {
                let starboard_id = self
                    .ctx
                    .client()
                    .send_message(starboard_channel, payload)
                    .await?;
                self.ctx.data().mutate(|doc| {
                    doc.insert_entry(message_id, starboard_id);
                });
                info!(%message_id, %starboard_id, "Created starboard entry");
            }
        }
        Ok(())
    }

    /// Resolve a channel and apply the eligibility filter
    ///
    /// Excluded channels are rejected without a fetch; forum channels and
    /// DM contexts are rejected after resolution. `None` is a silent skip,
    /// not an error.
    async fn eligible_channel(&self, channel_id: Snowflake) -> EngineResult<Option<Channel>> {
        if self.ctx.config().is_excluded(channel_id) {
            return Ok(None);
        }
        let channel = self.ctx.client().fetch_channel(channel_id).await?;
        if channel.is_forum() || channel.is_dm_based() {
            return Ok(None);
        }
        Ok(Some(channel))
    }
}

/// Reaction summary line for a posted entry
///
/// Every reaction with its count, sorted by descending count, followed by
/// a reference to the source channel.
pub(crate) fn reactions_line(snapshot: &ReactionSnapshot, channel_id: Snowflake) -> String {
    snapshot
        .sorted_by_count_desc()
        .iter()
        .map(|reaction| format!("{} **{}**", reaction.emoji, reaction.count))
        .chain(std::iter::once(format!("<#{channel_id}>")))
        .collect::<Vec<_>>()
        .join(" | ")
}
