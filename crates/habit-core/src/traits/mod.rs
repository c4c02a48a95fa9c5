//! Repository traits (ports)

mod repositories;

pub use repositories::{
    FriendshipRepository, IntimacyRepository, MessageRepository, NewUser, RecordRepository,
    RepoResult, TaskRepository, UserRepository,
};
