//! Domain entities

mod friendship;
mod intimacy;
mod message;
mod record;
mod task;
mod user;

pub use friendship::{FriendEntry, Friendship, FriendshipStatus, RankedFriend};
pub use intimacy::{IntimacyScore, InteractionKind};
pub use message::{InboxMessage, Message, MessageKind};
pub use record::CheckinRecord;
pub use task::CheckinTask;
pub use user::{User, DEFAULT_AVATAR_URL};
