//! Message inbox handlers
//!
//! Read-side endpoints only; reminder messages are written by the remind
//! flow, not through a direct send route.

use axum::{
    extract::{Path, State},
    Json,
};
use habit_service::{InboxMessageResponse, MessageService, UnreadCountResponse};

use crate::extractors::{MessageIdPath, Pagination, UserIdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// A user's inbox joined with sender profiles, newest first
///
/// GET /users/:user_id/messages
pub async fn inbox(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    Pagination(window): Pagination,
) -> ApiResult<Json<Vec<InboxMessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.inbox(path.user_id, window).await?;
    Ok(Json(response))
}

/// Number of unread messages
///
/// GET /users/:user_id/messages/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.unread_count(path.user_id).await?;
    Ok(Json(response))
}

/// Mark a message as read
///
/// PUT /messages/:message_id/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(path): Path<MessageIdPath>,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.mark_read(path.message_id).await?;
    Ok(NoContent)
}
