//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use habit_common::{AppConfig, AppError, PasswordService};
use habit_db::{
    create_pool, PgFriendshipRepository, PgIntimacyRepository, PgMessageRepository,
    PgRecordRepository, PgTaskRepository, PgUserRepository,
};
use habit_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware stack so probes bypass
/// rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let router = create_router();
    let router = apply_middleware_with_config(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let friendship_repo = Arc::new(PgFriendshipRepository::new(pool.clone()));
    let intimacy_repo = Arc::new(PgIntimacyRepository::new(pool.clone()));
    let record_repo = Arc::new(PgRecordRepository::new(pool.clone()));
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let task_repo = Arc::new(PgTaskRepository::new(pool.clone()));

    // Password hashing service
    let password_service = Arc::new(PasswordService::new());

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .friendship_repo(friendship_repo)
        .intimacy_repo(intimacy_repo)
        .record_repo(record_repo)
        .message_repo(message_repo)
        .task_repo(task_repo)
        .password_service(password_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
