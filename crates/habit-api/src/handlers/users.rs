//! User profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use habit_service::{UpdateProfileRequest, UserResponse, UserService};

use crate::extractors::{UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user's public profile
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(path.user_id).await?;
    Ok(Json(response))
}

/// Partially update a user's profile
///
/// PATCH /users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(path.user_id, request).await?;
    Ok(Json(response))
}
