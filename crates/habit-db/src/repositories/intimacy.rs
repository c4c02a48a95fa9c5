//! PostgreSQL implementation of IntimacyRepository
//!
//! Score updates are single atomic upserts so concurrent interactions never
//! lose a delta. Only the (actor, target) direction is ever written.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::{IntimacyScore, InteractionKind, MessageKind};
use habit_core::traits::{IntimacyRepository, RepoResult};
use habit_core::value_objects::UserId;

use crate::models::IntimacyScoreModel;

use super::error::map_db_error;

/// Upsert applying a score delta to the (user, friend) directed row.
///
/// Seeds at GREATEST(0, delta) when no row exists; otherwise accumulates
/// and clamps at zero. Recency columns are refreshed either way.
const APPLY_DELTA_SQL: &str = r"
    INSERT INTO intimacy_scores (user_id, friend_id, score, last_interaction)
    VALUES ($1, $2, GREATEST(0, $3), NOW())
    ON CONFLICT (user_id, friend_id) DO UPDATE
    SET score = GREATEST(0, intimacy_scores.score + $3),
        last_interaction = NOW(),
        updated_at = NOW()
    RETURNING score
";

/// PostgreSQL implementation of IntimacyRepository
#[derive(Clone)]
pub struct PgIntimacyRepository {
    pool: PgPool,
}

impl PgIntimacyRepository {
    /// Create a new PgIntimacyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IntimacyRepository for PgIntimacyRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId, friend_id: UserId) -> RepoResult<Option<IntimacyScore>> {
        let result = sqlx::query_as::<_, IntimacyScoreModel>(
            r"
            SELECT user_id, friend_id, score, last_interaction, created_at, updated_at
            FROM intimacy_scores
            WHERE user_id = $1 AND friend_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(friend_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(IntimacyScore::from))
    }

    #[instrument(skip(self))]
    async fn apply_interaction(
        &self,
        actor_id: UserId,
        target_id: UserId,
        kind: InteractionKind,
    ) -> RepoResult<i32> {
        let score = sqlx::query_scalar::<_, i32>(APPLY_DELTA_SQL)
            .bind(actor_id.into_inner())
            .bind(target_id.into_inner())
            .bind(kind.delta())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(score)
    }

    #[instrument(skip(self, content))]
    async fn record_reminder(
        &self,
        actor_id: UserId,
        target_id: UserId,
        content: &str,
    ) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO messages (sender_id, receiver_id, kind, content)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(actor_id.into_inner())
        .bind(target_id.into_inner())
        .bind(MessageKind::Remind.as_str())
        .bind(content)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let score = sqlx::query_scalar::<_, i32>(APPLY_DELTA_SQL)
            .bind(actor_id.into_inner())
            .bind(target_id.into_inner())
            .bind(InteractionKind::Remind.delta())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(score)
    }
}
