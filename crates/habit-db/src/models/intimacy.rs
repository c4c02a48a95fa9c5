//! Intimacy score database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for one directed row in the intimacy_scores table
#[derive(Debug, Clone, FromRow)]
pub struct IntimacyScoreModel {
    pub user_id: i64,
    pub friend_id: i64,
    pub score: i32,
    pub last_interaction: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
