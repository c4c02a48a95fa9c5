//! Intimacy service
//!
//! Interactions that move the directed affinity score between friends.
//! Only the acting side's score ever changes.

use tracing::{info, instrument};

use habit_core::entities::{InteractionKind, Message};
use habit_core::error::DomainError;
use habit_core::value_objects::UserId;

use crate::dto::RemindResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Intimacy service
pub struct IntimacyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IntimacyService<'a> {
    /// Create a new IntimacyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate ids and require an accepted friendship actor -> target
    async fn resolve_friends(&self, raw_actor: i64, raw_target: i64) -> ServiceResult<(UserId, UserId)> {
        let actor_id = super::parse_user_id(raw_actor)?;
        let target_id = super::parse_user_id(raw_target)?;

        if actor_id == target_id {
            return Err(DomainError::SelfReference.into());
        }

        if !self.ctx.friendship_repo().exists(actor_id, target_id).await? {
            return Err(DomainError::NotFriends(actor_id, target_id).into());
        }

        Ok((actor_id, target_id))
    }

    /// Remind a friend to check in: one transaction writes the reminder
    /// message and bumps the actor's directed score.
    #[instrument(skip(self))]
    pub async fn remind_friend(
        &self,
        raw_actor: i64,
        raw_target: i64,
    ) -> ServiceResult<RemindResponse> {
        let (actor_id, target_id) = self.resolve_friends(raw_actor, raw_target).await?;

        let score = self
            .ctx
            .intimacy_repo()
            .record_reminder(actor_id, target_id, Message::REMINDER_CONTENT)
            .await?;

        info!(actor_id = %actor_id, target_id = %target_id, score, "Reminder sent");

        Ok(RemindResponse {
            friend_id: target_id.into_inner(),
            intimacy_score: score,
        })
    }

    /// Apply a non-reminder interaction to the actor's directed score
    #[instrument(skip(self))]
    pub async fn record_interaction(
        &self,
        raw_actor: i64,
        raw_target: i64,
        kind: InteractionKind,
    ) -> ServiceResult<i32> {
        let (actor_id, target_id) = self.resolve_friends(raw_actor, raw_target).await?;

        let score = self
            .ctx
            .intimacy_repo()
            .apply_interaction(actor_id, target_id, kind)
            .await?;

        Ok(score)
    }

    /// The actor's directed score toward a friend, 0 when no row exists
    #[instrument(skip(self))]
    pub async fn get_score(&self, raw_actor: i64, raw_target: i64) -> ServiceResult<i32> {
        let actor_id = super::parse_user_id(raw_actor)?;
        let target_id = super::parse_user_id(raw_target)?;

        let score = self
            .ctx
            .intimacy_repo()
            .find(actor_id, target_id)
            .await?
            .map_or(0, |row| row.score);

        Ok(score)
    }
}
