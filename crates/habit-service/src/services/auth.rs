//! Authentication service
//!
//! Handles user registration, login, and password changes. Registration can
//! befriend the new user with a referrer in the same operation.

use habit_common::{validate_password_strength, AppError};
use habit_core::error::DomainError;
use habit_core::traits::NewUser;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{ChangePasswordRequest, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// When `referrer_id` is present, the bidirectional friendship with the
    /// referrer is created as part of registration.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        request.validate()?;
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Resolve the referrer before creating anything so a bad id fails fast
        let referrer_id = match request.referrer_id {
            Some(raw) => {
                let id = super::parse_user_id(raw)?;
                if self.ctx.user_repo().find_by_id(id).await?.is_none() {
                    return Err(DomainError::UserNotFound(id).into());
                }
                Some(id)
            }
            None => None,
        };

        // Same error as the UNIQUE-constraint mapping, so losing the race
        // between this check and the insert changes nothing for the caller
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser {
            nickname: request
                .nickname
                .unwrap_or_else(|| request.username.clone()),
            username: request.username,
            email: request.email,
            avatar_url: None,
        };
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        if let Some(referrer_id) = referrer_id {
            self.ctx
                .friendship_repo()
                .create_pair(user.id, referrer_id)
                .await?;
            info!(user_id = %user.id, referrer_id = %referrer_id, "Referral friendship created");
        }

        Ok(UserResponse::from(user))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: unknown username");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "User logged in");

        Ok(UserResponse::from(user))
    }

    /// Change a user's password after verifying the old one
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn change_password(&self, request: ChangePasswordRequest) -> ServiceResult<()> {
        request.validate()?;
        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let user_id = super::parse_user_id(request.user_id)?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx
            .password_service()
            .verify_or_error(&request.old_password, &password_hash)
            .map_err(ServiceError::from)?;

        let new_hash = self
            .ctx
            .password_service()
            .hash(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash)
            .await?;

        info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
