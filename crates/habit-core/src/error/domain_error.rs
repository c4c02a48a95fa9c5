//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Friend not found: {0}")]
    FriendNotFound(UserId),

    #[error("Message not found: {0}")]
    MessageNotFound(i64),

    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid user id: {0}")]
    InvalidId(i64),

    #[error("Operation not allowed on yourself")]
    SelfReference,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already checked in on {0}")]
    AlreadyCheckedIn(NaiveDate),

    #[error("Users are already friends")]
    AlreadyFriends,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Users {0} and {1} are not friends")]
    NotFriends(UserId, UserId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::FriendNotFound(_) => "UNKNOWN_FRIEND",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::TaskNotFound(_) => "UNKNOWN_TASK",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::SelfReference => "SELF_REFERENCE",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::AlreadyCheckedIn(_) => "ALREADY_CHECKED_IN",
            Self::AlreadyFriends => "ALREADY_FRIENDS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",

            // Business Rules
            Self::NotFriends(_, _) => "NOT_FRIENDS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::FriendNotFound(_)
                | Self::MessageNotFound(_)
                | Self::TaskNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidId(_)
                | Self::SelfReference
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
                | Self::NotFriends(_, _)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyCheckedIn(_) | Self::AlreadyFriends | Self::UsernameAlreadyExists
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(UserId::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::AlreadyFriends;
        assert_eq!(err.code(), "ALREADY_FRIENDS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::MessageNotFound(9).is_not_found());
        assert!(!DomainError::AlreadyFriends.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(DomainError::AlreadyCheckedIn(date).is_conflict());
        assert!(DomainError::AlreadyFriends.is_conflict());
        assert!(!DomainError::SelfReference.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound(UserId::new(123));
        assert_eq!(err.to_string(), "User not found: 123");

        let err = DomainError::NotFriends(UserId::new(1), UserId::new(2));
        assert_eq!(err.to_string(), "Users 1 and 2 are not friends");
    }
}
