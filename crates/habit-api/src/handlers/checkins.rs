//! Daily check-in handlers

use axum::{
    extract::{Path, State},
    Json,
};
use habit_service::{CheckinRequest, CheckinService, RecordResponse};

use crate::extractors::{Pagination, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record today's check-in
///
/// A second attempt on the same calendar day is a 409.
///
/// POST /checkins
pub async fn check_in(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CheckinRequest>,
) -> ApiResult<Created<Json<RecordResponse>>> {
    let service = CheckinService::new(state.service_context());
    let response = service.check_in(request).await?;
    Ok(Created(Json(response)))
}

/// A user's check-in history, newest first
///
/// GET /users/:user_id/records
pub async fn user_records(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<RecordResponse>>> {
    let service = CheckinService::new(state.service_context());
    let response = service.user_records(path.user_id).await?;
    Ok(Json(response))
}

/// Global recent check-ins across all users, paginated
///
/// GET /records
pub async fn recent_records(
    State(state): State<AppState>,
    Pagination(window): Pagination,
) -> ApiResult<Json<Vec<RecordResponse>>> {
    let service = CheckinService::new(state.service_context());
    let response = service.recent_records(window).await?;
    Ok(Json(response))
}
