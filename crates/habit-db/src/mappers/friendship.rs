//! Friendship read-model mappers

use habit_core::entities::{FriendEntry, Friendship, FriendshipStatus, RankedFriend};
use habit_core::value_objects::UserId;

use crate::models::{FriendListModel, FriendshipModel, RankedFriendModel};

// The friendships table only ever holds accepted edges; anything else in the
// status column is treated as accepted rather than failing the read.
fn parse_status(_s: &str) -> FriendshipStatus {
    FriendshipStatus::Accepted
}

impl From<FriendshipModel> for Friendship {
    fn from(model: FriendshipModel) -> Self {
        Friendship {
            user_id: UserId::new(model.user_id),
            friend_id: UserId::new(model.friend_id),
            status: parse_status(&model.status),
            created_at: model.created_at,
        }
    }
}

impl From<FriendListModel> for FriendEntry {
    fn from(model: FriendListModel) -> Self {
        FriendEntry {
            friend_id: UserId::new(model.friend_id),
            username: model.username,
            nickname: model.nickname,
            avatar_url: model.avatar_url,
            status: parse_status(&model.status),
            friends_since: model.friends_since,
        }
    }
}

impl From<RankedFriendModel> for RankedFriend {
    fn from(model: RankedFriendModel) -> Self {
        RankedFriend {
            friend_id: UserId::new(model.friend_id),
            username: model.username,
            nickname: model.nickname,
            avatar_url: model.avatar_url,
            intimacy_score: model.intimacy_score,
            friends_since: model.friends_since,
        }
    }
}
