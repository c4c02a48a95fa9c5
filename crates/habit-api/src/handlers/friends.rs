//! Friendship and intimacy handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use habit_service::{
    AddFriendRequest, FriendResponse, FriendshipService, IntimacyService, PaginatedResponse,
    RankedFriendResponse, RankedListResponse, RankingService, RemindResponse,
};
use serde::Deserialize;

use crate::extractors::{FriendPath, Pagination, PaginationParams, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Optional hard cap for top-N listings
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Create a mutual friendship between two users
///
/// Both directions are written in one transaction; an existing pair in
/// either direction is a 409.
///
/// POST /friends
pub async fn add_friend(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddFriendRequest>,
) -> ApiResult<Created<()>> {
    let service = FriendshipService::new(state.service_context());
    service.add_friend(request).await?;
    Ok(Created(()))
}

/// All friends of a user, most recent friendships first
///
/// GET /users/:user_id/friends
pub async fn list_friends(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<FriendResponse>>> {
    let service = FriendshipService::new(state.service_context());
    let response = service.list_friends(path.user_id).await?;
    Ok(Json(response))
}

/// Intimacy-ranked friends, paged
///
/// `total_count` is the full friend count.
///
/// GET /users/:user_id/friends/paginated
pub async fn list_friends_ranked(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    Pagination(window): Pagination,
) -> ApiResult<Json<PaginatedResponse<RankedFriendResponse>>> {
    let service = FriendshipService::new(state.service_context());
    let response = service.list_friends_ranked(path.user_id, window).await?;
    Ok(Json(response))
}

/// Friends without a check-in today
///
/// Without pagination parameters this is the plain friendship-recency
/// listing. With `page`/`page_size` it switches to the intimacy-ranked
/// paged view, whose `total_count` counts unfinished friends only.
///
/// GET /users/:user_id/friends/unfinished
pub async fn unfinished_friends(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Response> {
    let service = RankingService::new(state.service_context());

    if params.is_specified() {
        let response = service.unfinished_page(path.user_id, params.window()).await?;
        Ok(Json(response).into_response())
    } else {
        let response = service.unfinished_friends(path.user_id).await?;
        Ok(Json(response).into_response())
    }
}

/// Top-N intimacy-ranked friends without a check-in today
///
/// GET /users/:user_id/friends/unfinished/top?limit=N
pub async fn unfinished_top(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<RankedListResponse<RankedFriendResponse>>> {
    let service = RankingService::new(state.service_context());
    let response = service.unfinished_top(path.user_id, query.limit).await?;
    Ok(Json(response))
}

/// Remind a friend to check in
///
/// Writes the reminder message and bumps the sender's directed intimacy
/// score in one transaction. Returns the new score.
///
/// POST /users/:user_id/friends/:friend_id/remind
pub async fn remind_friend(
    State(state): State<AppState>,
    Path(path): Path<FriendPath>,
) -> ApiResult<Json<RemindResponse>> {
    let service = IntimacyService::new(state.service_context());
    let response = service.remind_friend(path.user_id, path.friend_id).await?;
    Ok(Json(response))
}
