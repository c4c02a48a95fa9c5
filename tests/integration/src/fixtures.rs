//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Usernames are
//! process-unique so parallel tests never collide on the UNIQUE constraint.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::from(d.subsec_nanos()))
        .unwrap_or(0);
    COUNTER.fetch_add(1, Ordering::SeqCst) ^ (nanos << 20)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<i64>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            password: "hunter2pass".to_string(),
            nickname: None,
            email: None,
            referrer_id: None,
        }
    }

    pub fn with_referrer(referrer_id: i64) -> Self {
        Self {
            referrer_id: Some(referrer_id),
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Password change request
#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub user_id: i64,
    pub old_password: String,
    pub new_password: String,
}

/// Profile update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Check-in request
#[derive(Debug, Serialize)]
pub struct CheckinRequest {
    pub user_id: i64,
    pub title: String,
}

/// Task creation request
#[derive(Debug, Serialize)]
pub struct CreateTaskRequest {
    pub user_id: i64,
    pub title: String,
}

/// Mutual friendship request
#[derive(Debug, Serialize)]
pub struct AddFriendRequest {
    pub user_id: i64,
    pub friend_id: i64,
}

/// User profile response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_url: String,
}

/// Check-in record response
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub date: String,
}

/// Task response
#[derive(Debug, Deserialize)]
pub struct TaskResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
}

/// Friend listing entry
#[derive(Debug, Deserialize)]
pub struct FriendResponse {
    pub friend_id: i64,
    pub username: String,
    pub status: String,
}

/// Intimacy-ranked friend entry
#[derive(Debug, Deserialize)]
pub struct RankedFriendResponse {
    pub friend_id: i64,
    pub username: String,
    pub intimacy_score: i32,
}

/// Reminder result
#[derive(Debug, Deserialize)]
pub struct RemindResponse {
    pub friend_id: i64,
    pub intimacy_score: i32,
}

/// Paginated listing envelope
#[derive(Debug, Deserialize)]
pub struct PaginatedBody<T> {
    pub data: Vec<T>,
    pub total_count: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

/// Capped ranked listing envelope
#[derive(Debug, Deserialize)]
pub struct RankedListBody<T> {
    pub data: Vec<T>,
    pub total_count: i64,
}

/// Inbox message entry
#[derive(Debug, Deserialize)]
pub struct InboxMessageResponse {
    pub id: i64,
    pub sender_id: i64,
    pub kind: String,
    pub content: String,
    pub read: bool,
}

/// Unread count body
#[derive(Debug, Deserialize)]
pub struct UnreadCountBody {
    pub unread_count: i64,
}

/// Statistics body
#[derive(Debug, Deserialize)]
pub struct StatsBody {
    pub total_checkins: i64,
    pub friend_count: i64,
    pub unfinished_friend_count: i64,
    pub unread_messages: i64,
    pub recent_checkins: Vec<RecordResponse>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
