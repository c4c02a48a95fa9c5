//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub kind: String,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Row shape for inbox listings: message joined with the sender's profile
#[derive(Debug, Clone, FromRow)]
pub struct InboxMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub kind: String,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub sender_username: String,
    pub sender_nickname: String,
    pub sender_avatar_url: Option<String>,
}
