//! Domain entities - the bot's view of platform objects

mod channel;
mod embed;
mod message;
mod reaction;
mod user;

pub use channel::{Channel, ChannelType};
pub use embed::Embed;
pub use message::{Attachment, Message};
pub use reaction::{Reaction, ReactionSnapshot};
pub use user::User;
