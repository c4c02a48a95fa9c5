//! Check-in task database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the checkin_tasks table
#[derive(Debug, Clone, FromRow)]
pub struct TaskModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
