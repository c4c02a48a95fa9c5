//! Value objects - small immutable domain types

mod user_id;
mod window;

pub use user_id::{UserId, UserIdParseError};
pub use window::{PageWindow, RankWindow, DEFAULT_PAGE_SIZE, DEFAULT_TOP_LIMIT, MAX_PAGE_SIZE};
