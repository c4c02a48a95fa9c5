//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::{InboxMessage, Message, MessageKind};
use habit_core::traits::{MessageRepository, RepoResult};
use habit_core::value_objects::{PageWindow, UserId};

use crate::models::{InboxMessageModel, MessageModel};

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, content))]
    async fn create(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        kind: MessageKind,
        content: &str,
    ) -> RepoResult<Message> {
        let model = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (sender_id, receiver_id, kind, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, sender_id, receiver_id, kind, content, read, created_at
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .bind(kind.as_str())
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_receiver(
        &self,
        receiver_id: UserId,
        window: PageWindow,
    ) -> RepoResult<Vec<InboxMessage>> {
        let rows = sqlx::query_as::<_, InboxMessageModel>(
            r"
            SELECT m.id, m.sender_id, m.receiver_id, m.kind, m.content, m.read, m.created_at,
                   u.username AS sender_username,
                   u.nickname AS sender_nickname,
                   u.avatar_url AS sender_avatar_url
            FROM messages m
            JOIN users u ON u.id = m.sender_id
            WHERE m.receiver_id = $1
            ORDER BY m.created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(receiver_id.into_inner())
        .bind(window.page_size())
        .bind(window.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(InboxMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, message_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE messages SET read = TRUE WHERE id = $1
            ",
        )
        .bind(message_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(message_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unread_count(&self, receiver_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND read = FALSE
            ",
        )
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
