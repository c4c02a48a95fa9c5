//! Message service
//!
//! Inbox listings, unread counts, and the read flag. Messages enter the
//! system only through `IntimacyService::remind_friend`; this service is
//! read-side plus the mark-read flip.

use tracing::instrument;

use habit_core::value_objects::PageWindow;

use crate::dto::{InboxMessageResponse, UnreadCountResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A user's inbox joined with sender profiles, newest first
    #[instrument(skip(self))]
    pub async fn inbox(
        &self,
        raw_id: i64,
        window: PageWindow,
    ) -> ServiceResult<Vec<InboxMessageResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let messages = self
            .ctx
            .message_repo()
            .find_by_receiver(user_id, window)
            .await?;

        Ok(messages.into_iter().map(InboxMessageResponse::from).collect())
    }

    /// Number of unread messages
    #[instrument(skip(self))]
    pub async fn unread_count(&self, raw_id: i64) -> ServiceResult<UnreadCountResponse> {
        let user_id = super::parse_user_id(raw_id)?;
        let unread_count = self.ctx.message_repo().unread_count(user_id).await?;

        Ok(UnreadCountResponse { unread_count })
    }

    /// Flip a message to read; marking twice is a no-op at the API level
    /// but an unknown id is NotFound.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, message_id: i64) -> ServiceResult<()> {
        self.ctx.message_repo().mark_read(message_id).await?;

        Ok(())
    }
}
