//! Path parameter structs
//!
//! Identifiers arrive as raw integers; positivity is checked in the
//! service layer so a bad id surfaces as the same error everywhere.

use serde::Deserialize;

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: i64,
}

/// Path parameters with user_id and friend_id
#[derive(Debug, Deserialize)]
pub struct FriendPath {
    pub user_id: i64,
    pub friend_id: i64,
}

/// Path parameters with task_id
#[derive(Debug, Deserialize)]
pub struct TaskPath {
    pub task_id: i64,
}

/// Path parameters with message_id
#[derive(Debug, Deserialize)]
pub struct MessageIdPath {
    pub message_id: i64,
}
