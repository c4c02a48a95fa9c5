//! Friendship service
//!
//! Mutual adds and friend listings. The reminder flow lives in
//! `IntimacyService` because it touches messages and scores together.

use tracing::{info, instrument};

use habit_core::error::DomainError;
use habit_core::value_objects::{PageWindow, UserId};

use crate::dto::{AddFriendRequest, FriendResponse, PaginatedResponse, RankedFriendResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Friendship service
pub struct FriendshipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendshipService<'a> {
    /// Create a new FriendshipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve and validate both ends of a friendship operation
    async fn resolve_pair(&self, raw_user: i64, raw_friend: i64) -> ServiceResult<(UserId, UserId)> {
        let user_id = super::parse_user_id(raw_user)?;
        let friend_id = super::parse_user_id(raw_friend)?;

        if user_id == friend_id {
            return Err(DomainError::SelfReference.into());
        }

        for id in [user_id, friend_id] {
            if self.ctx.user_repo().find_by_id(id).await?.is_none() {
                return Err(DomainError::UserNotFound(id).into());
            }
        }

        Ok((user_id, friend_id))
    }

    /// Befriend two users in both directions
    #[instrument(skip(self, request), fields(user_id = request.user_id, friend_id = request.friend_id))]
    pub async fn add_friend(&self, request: AddFriendRequest) -> ServiceResult<()> {
        let (user_id, friend_id) = self.resolve_pair(request.user_id, request.friend_id).await?;

        self.ctx
            .friendship_repo()
            .create_pair(user_id, friend_id)
            .await?;

        info!(user_id = %user_id, friend_id = %friend_id, "Friendship created");

        Ok(())
    }

    /// All friends of a user, most recently befriended first
    #[instrument(skip(self))]
    pub async fn list_friends(&self, raw_id: i64) -> ServiceResult<Vec<FriendResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let friends = self.ctx.friendship_repo().find_friends(user_id).await?;

        Ok(friends.into_iter().map(FriendResponse::from).collect())
    }

    /// All friends ranked by intimacy, paginated
    ///
    /// `total_count` here is the full friend count, unlike the unfinished
    /// ranking where it counts only unfinished friends.
    #[instrument(skip(self))]
    pub async fn list_friends_ranked(
        &self,
        raw_id: i64,
        window: PageWindow,
    ) -> ServiceResult<PaginatedResponse<RankedFriendResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let (friends, total) = self
            .ctx
            .friendship_repo()
            .ranked_by_intimacy(user_id, window)
            .await?;

        Ok(PaginatedResponse::new(
            friends.into_iter().map(RankedFriendResponse::from).collect(),
            total,
            window,
        ))
    }
}
