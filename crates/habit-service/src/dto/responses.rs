//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use habit_core::value_objects::PageWindow;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with page/page_size windowing
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total_count: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total_count: i64, window: PageWindow) -> Self {
        Self {
            data,
            total_count,
            current_page: window.page(),
            page_size: window.page_size(),
            total_pages: window.total_pages(total_count),
        }
    }
}

/// Capped ranked listing (no page arithmetic, just the total)
#[derive(Debug, Serialize)]
pub struct RankedListResponse<T> {
    pub data: Vec<T>,
    pub total_count: i64,
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user profile
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Friend Responses
// ============================================================================

/// A friend in plain listings
#[derive(Debug, Serialize)]
pub struct FriendResponse {
    pub friend_id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_url: String,
    pub status: String,
    pub friends_since: DateTime<Utc>,
}

/// A friend in intimacy-ranked listings
#[derive(Debug, Serialize)]
pub struct RankedFriendResponse {
    pub friend_id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_url: String,
    pub intimacy_score: i32,
    pub friends_since: DateTime<Utc>,
}

/// Result of a reminder: the sender's new directed score
#[derive(Debug, Serialize)]
pub struct RemindResponse {
    pub friend_id: i64,
    pub intimacy_score: i32,
}

// ============================================================================
// Check-in Responses
// ============================================================================

/// One daily check-in record
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub create_time: DateTime<Utc>,
}

/// One habit task
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// A received message with the sender's profile
#[derive(Debug, Serialize)]
pub struct InboxMessageResponse {
    pub id: i64,
    pub sender_id: i64,
    pub kind: String,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub sender_username: String,
    pub sender_nickname: String,
    pub sender_avatar_url: String,
}

/// Unread message count
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

// ============================================================================
// Stats Responses
// ============================================================================

/// Aggregate user statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_checkins: i64,
    pub friend_count: i64,
    pub unfinished_friend_count: i64,
    pub unread_messages: i64,
    pub recent_checkins: Vec<RecordResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    /// The process is up
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness response including dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    /// Build from the database probe result
    #[must_use]
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" },
            database: if database_healthy { "up" } else { "down" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_metadata() {
        let window = PageWindow::new(2, 10);
        let response = PaginatedResponse::new(vec![1, 2, 3], 23, window);

        assert_eq!(response.current_page, 2);
        assert_eq!(response.page_size, 10);
        assert_eq!(response.total_count, 23);
        assert_eq!(response.total_pages, 3);
    }
}
