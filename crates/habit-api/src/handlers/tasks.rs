//! Habit task handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use habit_service::{CreateTaskRequest, TaskResponse, TaskService};
use serde::Deserialize;

use crate::extractors::{TaskPath, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters identifying the requesting user
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: i64,
}

/// Create a habit task
///
/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<Created<Json<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.create_task(request).await?;
    Ok(Created(Json(response)))
}

/// A user's tasks, newest first
///
/// GET /users/:user_id/tasks
pub async fn user_tasks(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.user_tasks(path.user_id).await?;
    Ok(Json(response))
}

/// Delete a task owned by the requesting user
///
/// DELETE /tasks/:task_id?user_id=N
pub async fn delete_task(
    State(state): State<AppState>,
    Path(path): Path<TaskPath>,
    Query(owner): Query<OwnerQuery>,
) -> ApiResult<NoContent> {
    let service = TaskService::new(state.service_context());
    service.delete_task(owner.user_id, path.task_id).await?;
    Ok(NoContent)
}
