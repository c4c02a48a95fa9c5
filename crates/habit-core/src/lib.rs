//! # habit-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    CheckinRecord, CheckinTask, FriendEntry, Friendship, FriendshipStatus, InboxMessage,
    IntimacyScore, InteractionKind, Message, MessageKind, RankedFriend, User,
};
pub use error::DomainError;
pub use traits::{
    FriendshipRepository, IntimacyRepository, MessageRepository, NewUser, RecordRepository,
    RepoResult, TaskRepository, UserRepository,
};
pub use value_objects::{PageWindow, RankWindow, UserId, UserIdParseError};
