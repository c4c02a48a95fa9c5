//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod checkin;
pub mod context;
pub mod error;
pub mod friendship;
pub mod intimacy;
pub mod message;
pub mod ranking;
pub mod stats;
pub mod task;
pub mod user;

use habit_core::error::DomainError;
use habit_core::value_objects::UserId;

/// Validate a raw id from a request as a strictly positive UserId
pub(crate) fn parse_user_id(raw: i64) -> error::ServiceResult<UserId> {
    UserId::try_new(raw).map_err(|_| DomainError::InvalidId(raw).into())
}

// Re-export all services for convenience
pub use auth::AuthService;
pub use checkin::CheckinService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use friendship::FriendshipService;
pub use intimacy::IntimacyService;
pub use message::MessageService;
pub use ranking::RankingService;
pub use stats::StatsService;
pub use task::TaskService;
pub use user::UserService;
