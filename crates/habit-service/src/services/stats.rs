//! Statistics service
//!
//! Aggregates a user's activity: check-in totals, friend counts, how many
//! friends still haven't checked in today, and unread messages.

use chrono::Local;
use tracing::instrument;

use habit_core::error::DomainError;

use crate::dto::{RecordResponse, StatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many recent check-ins the stats payload carries
const RECENT_CHECKINS_LIMIT: i64 = 10;

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate statistics for a user
    #[instrument(skip(self))]
    pub async fn user_stats(&self, raw_id: i64) -> ServiceResult<StatsResponse> {
        let user_id = super::parse_user_id(raw_id)?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let total_checkins = self.ctx.record_repo().count_by_user(user_id).await?;

        let friends = self.ctx.friendship_repo().find_friends(user_id).await?;
        let friend_ids: Vec<_> = friends.iter().map(|f| f.friend_id).collect();

        let today = Local::now().date_naive();
        let checked_in = self
            .ctx
            .record_repo()
            .checked_in_on(&friend_ids, today)
            .await?;

        let friend_count = friend_ids.len() as i64;
        let unfinished_friend_count = friend_count - checked_in.len() as i64;

        let unread_messages = self.ctx.message_repo().unread_count(user_id).await?;

        let recent = self
            .ctx
            .record_repo()
            .recent_by_user(user_id, RECENT_CHECKINS_LIMIT)
            .await?;

        Ok(StatsResponse {
            total_checkins,
            friend_count,
            unfinished_friend_count,
            unread_messages,
            recent_checkins: recent.into_iter().map(RecordResponse::from).collect(),
        })
    }
}
