//! Message entity - reminders and notifications between users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Check-in reminder sent between friends
    Remind,
    /// Anything else
    #[default]
    General,
}

impl MessageKind {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remind => "remind",
            Self::General => "general",
        }
    }

    /// Parse the storage representation; unknown values fall back to General.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "remind" => Self::Remind,
            _ => Self::General,
        }
    }
}

/// A message from one user to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub kind: MessageKind,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Default content for a check-in reminder
    pub const REMINDER_CONTENT: &'static str = "Your friend reminds you to check in today";
}

/// A received message joined with the sender's profile, as shown in the inbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxMessage {
    pub message: Message,
    pub sender_username: String,
    pub sender_nickname: String,
    pub sender_avatar_url: Option<String>,
}
