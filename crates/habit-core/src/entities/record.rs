//! Check-in record entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::UserId;

/// One daily check-in. At most one exists per (user, date).
///
/// `date` is a calendar date in the server's local timezone; `create_time`
/// is the instant the check-in was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinRecord {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
    pub date: NaiveDate,
    pub create_time: DateTime<Utc>,
}
