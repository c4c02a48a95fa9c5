//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, and `Validate` where the input
//! carries user-supplied fields worth checking before the service runs.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
///
/// `referrer_id` optionally befriends the new user with an existing one in
/// the same operation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Nickname must be 1-50 characters"))]
    pub nickname: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub referrer_id: Option<i64>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub user_id: i64,

    pub old_password: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "Nickname must be 1-50 characters"))]
    pub nickname: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Avatar URL must be at most 255 characters"))]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Check-in Requests
// ============================================================================

/// Daily check-in request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckinRequest {
    pub user_id: i64,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}

/// Create habit task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    pub user_id: i64,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}

// ============================================================================
// Friend Requests
// ============================================================================

/// Mutual friend add request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddFriendRequest {
    pub user_id: i64,
    pub friend_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            nickname: None,
            email: None,
            referrer_id: None,
        };
        assert!(valid.validate().is_ok());

        let short_name = RegisterRequest {
            username: "a".to_string(),
            ..valid.clone()
        };
        assert!(short_name.validate().is_err());

        let bad_email = RegisterRequest {
            email: Some("not-an-email".to_string()),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_checkin_request_title_bounds() {
        let empty = CheckinRequest {
            user_id: 1,
            title: String::new(),
        };
        assert!(empty.validate().is_err());

        let long = CheckinRequest {
            user_id: 1,
            title: "x".repeat(201),
        };
        assert!(long.validate().is_err());
    }
}
