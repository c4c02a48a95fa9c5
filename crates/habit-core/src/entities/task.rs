//! Check-in task entity - a user-defined habit to track

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// A habit task a user intends to check in for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinTask {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
