//! Pure decision layer - classification separated from effects
//!
//! Every promotion and auto-delete question is answered here from a
//! reaction snapshot, the threshold policy, and the taxonomy. The engine
//! fetches state and applies outcomes; nothing in this module touches the
//! platform.

use std::collections::HashSet;

use crate::entities::{Reaction, ReactionSnapshot, User};
use crate::policy::{EmojiClass, ThresholdPolicy};
use crate::taxonomy::EmojiTaxonomy;
use crate::value_objects::Snowflake;

/// Check whether a single reaction qualifies the message for promotion
///
/// A negative emoji never qualifies, whatever its count. Otherwise the
/// star symbol is held to the star threshold and everything else to the
/// other-positive threshold for the message's channel.
pub fn reaction_qualifies(
    reaction: &Reaction,
    channel_id: Snowflake,
    policy: &ThresholdPolicy,
    taxonomy: &EmojiTaxonomy,
) -> bool {
    if taxonomy.is_negative(reaction.emoji.name()) {
        return false;
    }
    let class = if reaction.emoji.is_star() {
        EmojiClass::Star
    } else {
        EmojiClass::OtherPositive
    };
    reaction.count >= policy.required_count(channel_id, class)
}

/// Check whether any reaction on the snapshot qualifies for promotion
pub fn meets_promotion_threshold(
    snapshot: &ReactionSnapshot,
    channel_id: Snowflake,
    policy: &ThresholdPolicy,
    taxonomy: &EmojiTaxonomy,
) -> bool {
    snapshot
        .iter()
        .any(|reaction| reaction_qualifies(reaction, channel_id, policy, taxonomy))
}

/// Highest count among reactions that are neither negative nor delete
///
/// `None` when no such reaction exists on the message.
pub fn max_non_negative(snapshot: &ReactionSnapshot, taxonomy: &EmojiTaxonomy) -> Option<u32> {
    snapshot
        .iter()
        .filter(|reaction| {
            let name = reaction.emoji.name();
            !taxonomy.is_negative(name) && !taxonomy.is_delete(name)
        })
        .map(|reaction| reaction.count)
        .max()
}

/// Outcome of the auto-delete evaluation, one field per criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDeleteVerdict {
    /// The message sits in the designated high-moderation channel
    pub in_moderated_channel: bool,
    /// The trigger count strictly exceeds every non-negative reaction
    pub outweighs_positive: bool,
    /// The author is a configured administrator or a bot account
    pub author_exempt: bool,
}

impl AutoDeleteVerdict {
    /// All criteria hold: the message should be deleted
    #[inline]
    pub fn should_delete(&self) -> bool {
        self.in_moderated_channel && self.outweighs_positive && !self.author_exempt
    }
}

/// Evaluate the auto-delete criteria for a delete-emoji trigger
pub fn evaluate_auto_delete(
    snapshot: &ReactionSnapshot,
    trigger: &Reaction,
    channel_id: Snowflake,
    moderated_channel: Snowflake,
    author: &User,
    admins: &HashSet<Snowflake>,
    taxonomy: &EmojiTaxonomy,
) -> AutoDeleteVerdict {
    let ceiling = max_non_negative(snapshot, taxonomy);
    AutoDeleteVerdict {
        in_moderated_channel: channel_id == moderated_channel,
        outweighs_positive: ceiling.is_none_or(|max| trigger.count > max),
        author_exempt: admins.contains(&author.id) || author.is_bot(),
    }
}
