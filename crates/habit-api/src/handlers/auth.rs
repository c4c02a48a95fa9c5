//! Authentication handlers
//!
//! Endpoints for user registration, login, and password changes.

use axum::{extract::State, Json};
use habit_service::{
    AuthService, ChangePasswordRequest, LoginRequest, RegisterRequest, UserResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// An optional `referrer_id` in the body establishes the mutual friendship
/// with the referring user as part of registration.
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Change password after verifying the current one
///
/// POST /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.change_password(request).await?;
    Ok(NoContent)
}
