//! Check-in record database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for the records table
#[derive(Debug, Clone, FromRow)]
pub struct RecordModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub create_time: DateTime<Utc>,
}
