//! PostgreSQL implementation of FriendshipRepository
//!
//! Friendships are stored as directed edges, always written in pairs.
//! Ranked listings join the querying user's directed intimacy scores and
//! treat a missing score row as 0.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::{FriendEntry, RankedFriend};
use habit_core::error::DomainError;
use habit_core::traits::{FriendshipRepository, RepoResult};
use habit_core::value_objects::{PageWindow, RankWindow, UserId};

use crate::models::{FriendListModel, RankedFriendModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FriendshipRepository
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: PgPool,
}

impl PgFriendshipRepository {
    /// Create a new PgFriendshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    #[instrument(skip(self))]
    async fn create_pair(&self, user_id: UserId, friend_id: UserId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO friendships (user_id, friend_id, status)
            VALUES ($1, $2, 'accepted')
            ",
        )
        .bind(user_id.into_inner())
        .bind(friend_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFriends))?;

        sqlx::query(
            r"
            INSERT INTO friendships (user_id, friend_id, status)
            VALUES ($1, $2, 'accepted')
            ",
        )
        .bind(friend_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFriends))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, user_id: UserId, friend_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM friendships
                WHERE user_id = $1 AND friend_id = $2 AND status = 'accepted'
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(friend_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_friends(&self, user_id: UserId) -> RepoResult<Vec<FriendEntry>> {
        let rows = sqlx::query_as::<_, FriendListModel>(
            r"
            SELECT f.friend_id, u.username, u.nickname, u.avatar_url, f.status,
                   f.created_at AS friends_since
            FROM friendships f
            JOIN users u ON u.id = f.friend_id
            WHERE f.user_id = $1 AND f.status = 'accepted'
            ORDER BY f.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FriendEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, user_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM friendships
            WHERE user_id = $1 AND status = 'accepted'
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn ranked_by_intimacy(
        &self,
        user_id: UserId,
        window: PageWindow,
    ) -> RepoResult<(Vec<RankedFriend>, i64)> {
        let rows = sqlx::query_as::<_, RankedFriendModel>(
            r"
            SELECT f.friend_id, u.username, u.nickname, u.avatar_url,
                   COALESCE(i.score, 0) AS intimacy_score,
                   f.created_at AS friends_since
            FROM friendships f
            JOIN users u ON u.id = f.friend_id
            LEFT JOIN intimacy_scores i
                   ON i.user_id = f.user_id AND i.friend_id = f.friend_id
            WHERE f.user_id = $1 AND f.status = 'accepted'
            ORDER BY intimacy_score DESC, f.created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(window.page_size())
        .bind(window.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = self.count(user_id).await?;

        Ok((rows.into_iter().map(RankedFriend::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn unfinished(&self, user_id: UserId, date: NaiveDate) -> RepoResult<Vec<FriendEntry>> {
        let rows = sqlx::query_as::<_, FriendListModel>(
            r"
            SELECT f.friend_id, u.username, u.nickname, u.avatar_url, f.status,
                   f.created_at AS friends_since
            FROM friendships f
            JOIN users u ON u.id = f.friend_id
            WHERE f.user_id = $1 AND f.status = 'accepted'
              AND f.friend_id NOT IN (SELECT user_id FROM records WHERE date = $2)
            ORDER BY f.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FriendEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn ranked_unfinished(
        &self,
        user_id: UserId,
        date: NaiveDate,
        window: RankWindow,
    ) -> RepoResult<(Vec<RankedFriend>, i64)> {
        let rows = sqlx::query_as::<_, RankedFriendModel>(
            r"
            SELECT f.friend_id, u.username, u.nickname, u.avatar_url,
                   COALESCE(i.score, 0) AS intimacy_score,
                   f.created_at AS friends_since
            FROM friendships f
            JOIN users u ON u.id = f.friend_id
            LEFT JOIN intimacy_scores i
                   ON i.user_id = f.user_id AND i.friend_id = f.friend_id
            WHERE f.user_id = $1 AND f.status = 'accepted'
              AND f.friend_id NOT IN (SELECT user_id FROM records WHERE date = $2)
            ORDER BY intimacy_score DESC, f.created_at DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(user_id.into_inner())
        .bind(date)
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Total counts friends left unfinished today, not all friends.
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM friendships f
            WHERE f.user_id = $1 AND f.status = 'accepted'
              AND f.friend_id NOT IN (SELECT user_id FROM records WHERE date = $2)
            ",
        )
        .bind(user_id.into_inner())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(RankedFriend::from).collect(), total))
    }
}
