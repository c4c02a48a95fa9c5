//! Friendship database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for one directed edge in the friendships table
#[derive(Debug, Clone, FromRow)]
pub struct FriendshipModel {
    pub user_id: i64,
    pub friend_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape for plain friend listings: edge joined with the friend's profile
#[derive(Debug, Clone, FromRow)]
pub struct FriendListModel {
    pub friend_id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_url: Option<String>,
    pub status: String,
    pub friends_since: DateTime<Utc>,
}

/// Row shape for intimacy-ranked friend listings
///
/// `intimacy_score` is COALESCEd to 0 when no score row exists.
#[derive(Debug, Clone, FromRow)]
pub struct RankedFriendModel {
    pub friend_id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_url: Option<String>,
    pub intimacy_score: i32,
    pub friends_since: DateTime<Utc>,
}
