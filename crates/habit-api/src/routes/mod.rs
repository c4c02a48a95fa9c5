//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, checkins, friends, health, messages, stats, tasks, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(checkin_routes())
        .merge(task_routes())
        .merge(friend_routes())
        .merge(message_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/change-password", post(auth::change_password))
}

/// User profile and statistics routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", patch(users::update_user))
        .route("/users/:user_id/stats", get(stats::user_stats))
}

/// Check-in routes
fn checkin_routes() -> Router<AppState> {
    Router::new()
        .route("/checkins", post(checkins::check_in))
        .route("/users/:user_id/records", get(checkins::user_records))
        .route("/records", get(checkins::recent_records))
}

/// Habit task routes
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(tasks::create_task))
        .route("/users/:user_id/tasks", get(tasks::user_tasks))
        .route("/tasks/:task_id", delete(tasks::delete_task))
}

/// Friendship, ranking, and reminder routes
fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/friends", post(friends::add_friend))
        .route("/users/:user_id/friends", get(friends::list_friends))
        .route("/users/:user_id/friends/paginated", get(friends::list_friends_ranked))
        .route("/users/:user_id/friends/unfinished", get(friends::unfinished_friends))
        .route("/users/:user_id/friends/unfinished/top", get(friends::unfinished_top))
        .route(
            "/users/:user_id/friends/:friend_id/remind",
            post(friends::remind_friend),
        )
}

/// Message inbox routes
///
/// Read-side only: messages enter the system through the remind flow.
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/messages", get(messages::inbox))
        .route("/users/:user_id/messages/unread-count", get(messages::unread_count))
        .route("/messages/:message_id/read", put(messages::mark_read))
}
