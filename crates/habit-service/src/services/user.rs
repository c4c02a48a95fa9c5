//! User profile service

use tracing::{info, instrument};
use validator::Validate;

use habit_core::error::DomainError;

use crate::dto::{UpdateProfileRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User profile service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a user's public profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, raw_id: i64) -> ServiceResult<UserResponse> {
        let user_id = super::parse_user_id(raw_id)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(user))
    }

    /// Update profile fields; absent fields stay as they are
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        raw_id: i64,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        request.validate()?;
        let user_id = super::parse_user_id(raw_id)?;

        self.ctx
            .user_repo()
            .update_profile(
                user_id,
                request.nickname.as_deref(),
                request.phone.as_deref(),
                request.avatar_url.as_deref(),
            )
            .await?;

        info!(user_id = %user_id, "Profile updated");

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(user))
    }
}
