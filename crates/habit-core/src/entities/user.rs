//! User entity - a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Default avatar served when a user never uploaded one
pub const DEFAULT_AVATAR_URL: &str = "/images/default-avatar.png";

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub nickname: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: UserId, username: String, nickname: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            nickname,
            email: None,
            avatar_url: None,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get avatar URL or the default avatar
    pub fn avatar_url(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }

    /// Update the nickname
    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }

    /// Update the avatar
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }
}
