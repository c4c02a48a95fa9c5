//! Friendship entity and friend-listing read models
//!
//! Friendships are stored as directed edges but always created in both
//! directions at once: an accepted relationship between A and B is the row
//! pair (A,B) and (B,A). Intimacy, by contrast, stays directional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Status of a friendship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    #[default]
    Accepted,
}

impl FriendshipStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
        }
    }
}

/// One directed friendship edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub user_id: UserId,
    pub friend_id: UserId,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

/// A friend as seen in plain listings: profile plus edge metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendEntry {
    pub friend_id: UserId,
    pub username: String,
    pub nickname: String,
    pub avatar_url: Option<String>,
    pub status: FriendshipStatus,
    pub friends_since: DateTime<Utc>,
}

/// A friend as seen in intimacy-ranked listings
///
/// `intimacy_score` is the querying user's directed score toward this
/// friend, 0 when no score row exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedFriend {
    pub friend_id: UserId,
    pub username: String,
    pub nickname: String,
    pub avatar_url: Option<String>,
    pub intimacy_score: i32,
    pub friends_since: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(FriendshipStatus::Accepted.as_str(), "accepted");
    }
}
