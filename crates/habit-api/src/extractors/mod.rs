//! Request extractors for handlers

pub mod pagination;
pub mod path;
pub mod validated;

pub use pagination::{Pagination, PaginationParams};
pub use path::{FriendPath, MessageIdPath, TaskPath, UserIdPath};
pub use validated::ValidatedJson;
