//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in habit-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod friendship;
mod intimacy;
mod message;
mod record;
mod task;
mod user;

pub use friendship::PgFriendshipRepository;
pub use intimacy::PgIntimacyRepository;
pub use message::PgMessageRepository;
pub use record::PgRecordRepository;
pub use task::PgTaskRepository;
pub use user::PgUserRepository;
