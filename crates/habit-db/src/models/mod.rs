//! Database models
//!
//! Plain structs mirroring table rows, deserialized via SQLx `FromRow`.
//! Mapping to domain entities lives in `crate::mappers`.

mod friendship;
mod intimacy;
mod message;
mod record;
mod task;
mod user;

pub use friendship::{FriendListModel, FriendshipModel, RankedFriendModel};
pub use intimacy::IntimacyScoreModel;
pub use message::{InboxMessageModel, MessageModel};
pub use record::RecordModel;
pub use task::TaskModel;
pub use user::UserModel;
