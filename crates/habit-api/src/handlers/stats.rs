//! User statistics handler

use axum::{
    extract::{Path, State},
    Json,
};
use habit_service::{StatsResponse, StatsService};

use crate::extractors::UserIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Aggregate statistics for a user
///
/// GET /users/:user_id/stats
pub async fn user_stats(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.user_stats(path.user_id).await?;
    Ok(Json(response))
}
