//! PostgreSQL implementation of RecordRepository
//!
//! The one-check-in-per-day rule is enforced by the UNIQUE (user_id, date)
//! constraint, not by a read-then-write, so concurrent inserts can't both
//! succeed.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::CheckinRecord;
use habit_core::error::DomainError;
use habit_core::traits::{RecordRepository, RepoResult};
use habit_core::value_objects::{PageWindow, UserId};

use crate::models::RecordModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RecordRepository
#[derive(Clone)]
pub struct PgRecordRepository {
    pool: PgPool,
}

impl PgRecordRepository {
    /// Create a new PgRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        user_id: UserId,
        title: &str,
        date: NaiveDate,
    ) -> RepoResult<CheckinRecord> {
        let model = sqlx::query_as::<_, RecordModel>(
            r"
            INSERT INTO records (user_id, title, date)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, date, create_time
            ",
        )
        .bind(user_id.into_inner())
        .bind(title)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyCheckedIn(date)))?;

        Ok(CheckinRecord::from(model))
    }

    #[instrument(skip(self, user_ids))]
    async fn checked_in_on(
        &self,
        user_ids: &[UserId],
        date: NaiveDate,
    ) -> RepoResult<Vec<UserId>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = user_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM records
            WHERE date = $1 AND user_id = ANY($2)
            ",
        )
        .bind(date)
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserId::new).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<CheckinRecord>> {
        let rows = sqlx::query_as::<_, RecordModel>(
            r"
            SELECT id, user_id, title, date, create_time
            FROM records
            WHERE user_id = $1
            ORDER BY date DESC, create_time DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CheckinRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn recent_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<CheckinRecord>> {
        let rows = sqlx::query_as::<_, RecordModel>(
            r"
            SELECT id, user_id, title, date, create_time
            FROM records
            WHERE user_id = $1
            ORDER BY date DESC, create_time DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CheckinRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn recent(&self, window: PageWindow) -> RepoResult<Vec<CheckinRecord>> {
        let rows = sqlx::query_as::<_, RecordModel>(
            r"
            SELECT id, user_id, title, date, create_time
            FROM records
            ORDER BY create_time DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(window.page_size())
        .bind(window.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CheckinRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM records WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
