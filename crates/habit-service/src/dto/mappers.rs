//! Entity -> response DTO mappers
//!
//! Responses always carry a concrete avatar URL; the default avatar fills in
//! when the user never uploaded one.

use habit_core::entities::{
    CheckinRecord, CheckinTask, FriendEntry, InboxMessage, RankedFriend, User, DEFAULT_AVATAR_URL,
};

use super::responses::{
    FriendResponse, InboxMessageResponse, RankedFriendResponse, RecordResponse, TaskResponse,
    UserResponse,
};

fn avatar_or_default(avatar_url: Option<String>) -> String {
    avatar_url.unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string())
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: user.username,
            nickname: user.nickname,
            email: user.email,
            avatar_url: avatar_or_default(user.avatar_url),
            phone: user.phone,
            created_at: user.created_at,
        }
    }
}

impl From<FriendEntry> for FriendResponse {
    fn from(entry: FriendEntry) -> Self {
        Self {
            friend_id: entry.friend_id.into_inner(),
            username: entry.username,
            nickname: entry.nickname,
            avatar_url: avatar_or_default(entry.avatar_url),
            status: entry.status.as_str().to_string(),
            friends_since: entry.friends_since,
        }
    }
}

impl From<RankedFriend> for RankedFriendResponse {
    fn from(friend: RankedFriend) -> Self {
        Self {
            friend_id: friend.friend_id.into_inner(),
            username: friend.username,
            nickname: friend.nickname,
            avatar_url: avatar_or_default(friend.avatar_url),
            intimacy_score: friend.intimacy_score,
            friends_since: friend.friends_since,
        }
    }
}

impl From<CheckinRecord> for RecordResponse {
    fn from(record: CheckinRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id.into_inner(),
            title: record.title,
            date: record.date,
            create_time: record.create_time,
        }
    }
}

impl From<CheckinTask> for TaskResponse {
    fn from(task: CheckinTask) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id.into_inner(),
            title: task.title,
            created_at: task.created_at,
        }
    }
}

impl From<InboxMessage> for InboxMessageResponse {
    fn from(inbox: InboxMessage) -> Self {
        Self {
            id: inbox.message.id,
            sender_id: inbox.message.sender_id.into_inner(),
            kind: inbox.message.kind.as_str().to_string(),
            content: inbox.message.content,
            read: inbox.message.read,
            created_at: inbox.message.created_at,
            sender_username: inbox.sender_username,
            sender_nickname: inbox.sender_nickname,
            sender_avatar_url: avatar_or_default(inbox.sender_avatar_url),
        }
    }
}
