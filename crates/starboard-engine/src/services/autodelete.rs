//! Auto-delete cascade
//!
//! Invoked from the reaction-added transition once a delete emoji reaches
//! the trigger threshold, already under the per-message lock. Decides via
//! the pure verdict, then logs, notifies, and deletes. A suppressed
//! verdict logs at most once per message per notification window.

use starboard_core::decision::evaluate_auto_delete;
use starboard_core::{Channel, OutgoingMessage, Reaction, ReactionSnapshot, Snowflake};
use tracing::info;

use super::error::EngineResult;
use super::starboard::{reactions_line, StarboardService};

/// Log prefix when the message is actually removed
const ACTION_DELETING: &str = "Auto-deleting";
/// Log prefix when the threshold was reached but deletion is suppressed
const ACTION_THRESHOLD: &str = "Auto-delete threshold reached";

impl StarboardService {
    /// Evaluate and execute the auto-delete cascade for one trigger
    pub(crate) async fn run_auto_delete(
        &self,
        channel: &Channel,
        message_id: Snowflake,
        trigger: &Reaction,
        snapshot: &ReactionSnapshot,
    ) -> EngineResult<()> {
        let message = self
            .ctx
            .client()
            .fetch_message(channel.id, message_id)
            .await?;

        let config = self.ctx.config();
        let verdict = self.ctx.data().read(|doc| {
            evaluate_auto_delete(
                snapshot,
                trigger,
                channel.id,
                config.moderated_channel_id,
                &message.author,
                &config.admin_user_ids,
                &doc.taxonomy,
            )
        });
        let do_delete = verdict.should_delete();
        let action = if do_delete {
            ACTION_DELETING
        } else {
            ACTION_THRESHOLD
        };
        info!(
            %message_id,
            emoji = %trigger.emoji,
            count = trigger.count,
            action,
            "Auto-delete evaluation"
        );

        // A suppressed outcome logs once per window; an actual deletion
        // always logs.
        if do_delete || !self.notified.has(&message_id) {
            let embeds = self
                .ctx
                .renderer()
                .render(&[message.clone()], None, true, None)
                .await?;
            let record = format!(
                "{action} message from {} for {} {} reactions\n{}",
                message.author.mention(),
                trigger.count,
                trigger.emoji,
                reactions_line(snapshot, channel.id),
            );
            self.ctx
                .client()
                .send_message(
                    config.action_log_channel_id,
                    OutgoingMessage {
                        content: Some(record),
                        embeds,
                    },
                )
                .await?;
            self.notified.insert(message_id);
        }

        if do_delete {
            let notice = format!(
                "{} A message of yours was automatically removed because the \
                 community flagged it past the removal threshold.",
                message.author.mention()
            );
            self.ctx
                .client()
                .send_message(channel.id, OutgoingMessage::text(notice))
                .await?;
            self.ctx
                .client()
                .delete_message(channel.id, message_id)
                .await?;
        }
        Ok(())
    }
}
