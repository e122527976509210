//! Threshold policy - reaction counts required for promotion
//!
//! Pure and constant: no hidden state, no failure modes. One designated
//! high-traffic channel carries elevated thresholds; everywhere else the
//! defaults apply.

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Star reactions needed to promote in a default channel
pub const STAR_THRESHOLD: u32 = 5;
/// Non-star positive reactions needed to promote in a default channel
pub const OTHER_THRESHOLD: u32 = 7;
/// Star reactions needed to promote in the elevated channel
pub const ELEVATED_STAR_THRESHOLD: u32 = 14;
/// Non-star positive reactions needed to promote in the elevated channel
pub const ELEVATED_OTHER_THRESHOLD: u32 = 14;
/// Delete-emoji count that arms the auto-delete evaluation
pub const AUTO_DELETE_THRESHOLD: u32 = 10;

/// Classification of a promotion-eligible emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmojiClass {
    /// The platform-global star symbol
    Star,
    /// Any other non-negative emoji
    OtherPositive,
}

/// Channel-sensitive promotion thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    elevated_channel: Snowflake,
}

impl ThresholdPolicy {
    /// Create a policy with the given high-traffic channel
    pub fn new(elevated_channel: Snowflake) -> Self {
        Self { elevated_channel }
    }

    /// Reaction count required to promote a message in a channel
    pub fn required_count(&self, channel_id: Snowflake, class: EmojiClass) -> u32 {
        if channel_id == self.elevated_channel {
            match class {
                EmojiClass::Star => ELEVATED_STAR_THRESHOLD,
                EmojiClass::OtherPositive => ELEVATED_OTHER_THRESHOLD,
            }
        } else {
            match class {
                EmojiClass::Star => STAR_THRESHOLD,
                EmojiClass::OtherPositive => OTHER_THRESHOLD,
            }
        }
    }

    /// Delete-emoji count that arms the auto-delete evaluation
    #[inline]
    pub fn auto_delete_threshold(&self) -> u32 {
        AUTO_DELETE_THRESHOLD
    }
}
