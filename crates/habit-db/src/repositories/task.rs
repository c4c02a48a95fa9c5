//! PostgreSQL implementation of TaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::CheckinTask;
use habit_core::traits::{RepoResult, TaskRepository};
use habit_core::value_objects::UserId;

use crate::models::TaskModel;

use super::error::{map_db_error, task_not_found};

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new PgTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    #[instrument(skip(self))]
    async fn create(&self, user_id: UserId, title: &str) -> RepoResult<CheckinTask> {
        let model = sqlx::query_as::<_, TaskModel>(
            r"
            INSERT INTO checkin_tasks (user_id, title)
            VALUES ($1, $2)
            RETURNING id, user_id, title, created_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CheckinTask::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, task_id: i64) -> RepoResult<Option<CheckinTask>> {
        let result = sqlx::query_as::<_, TaskModel>(
            r"
            SELECT id, user_id, title, created_at
            FROM checkin_tasks
            WHERE id = $1
            ",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CheckinTask::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<CheckinTask>> {
        let rows = sqlx::query_as::<_, TaskModel>(
            r"
            SELECT id, user_id, title, created_at
            FROM checkin_tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CheckinTask::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, task_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM checkin_tasks WHERE id = $1
            ",
        )
        .bind(task_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(task_id));
        }

        Ok(())
    }
}
