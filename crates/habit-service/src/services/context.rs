//! Service context - dependency container for services
//!
//! Holds the connection pool, repositories, and the password service.

use std::sync::Arc;

use habit_common::PasswordService;
use habit_core::traits::{
    FriendshipRepository, IntimacyRepository, MessageRepository, RecordRepository,
    TaskRepository, UserRepository,
};
use habit_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Password hashing service
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    friendship_repo: Arc<dyn FriendshipRepository>,
    intimacy_repo: Arc<dyn IntimacyRepository>,
    record_repo: Arc<dyn RecordRepository>,
    message_repo: Arc<dyn MessageRepository>,
    task_repo: Arc<dyn TaskRepository>,

    // Services
    password_service: Arc<PasswordService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        friendship_repo: Arc<dyn FriendshipRepository>,
        intimacy_repo: Arc<dyn IntimacyRepository>,
        record_repo: Arc<dyn RecordRepository>,
        message_repo: Arc<dyn MessageRepository>,
        task_repo: Arc<dyn TaskRepository>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            friendship_repo,
            intimacy_repo,
            record_repo,
            message_repo,
            task_repo,
            password_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the friendship repository
    pub fn friendship_repo(&self) -> &dyn FriendshipRepository {
        self.friendship_repo.as_ref()
    }

    /// Get the intimacy repository
    pub fn intimacy_repo(&self) -> &dyn IntimacyRepository {
        self.intimacy_repo.as_ref()
    }

    /// Get the check-in record repository
    pub fn record_repo(&self) -> &dyn RecordRepository {
        self.record_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the task repository
    pub fn task_repo(&self) -> &dyn TaskRepository {
        self.task_repo.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    friendship_repo: Option<Arc<dyn FriendshipRepository>>,
    intimacy_repo: Option<Arc<dyn IntimacyRepository>>,
    record_repo: Option<Arc<dyn RecordRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    task_repo: Option<Arc<dyn TaskRepository>>,
    password_service: Option<Arc<PasswordService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            friendship_repo: None,
            intimacy_repo: None,
            record_repo: None,
            message_repo: None,
            task_repo: None,
            password_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn friendship_repo(mut self, repo: Arc<dyn FriendshipRepository>) -> Self {
        self.friendship_repo = Some(repo);
        self
    }

    pub fn intimacy_repo(mut self, repo: Arc<dyn IntimacyRepository>) -> Self {
        self.intimacy_repo = Some(repo);
        self
    }

    pub fn record_repo(mut self, repo: Arc<dyn RecordRepository>) -> Self {
        self.record_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn task_repo(mut self, repo: Arc<dyn TaskRepository>) -> Self {
        self.task_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.friendship_repo
                .ok_or_else(|| ServiceError::validation("friendship_repo is required"))?,
            self.intimacy_repo
                .ok_or_else(|| ServiceError::validation("intimacy_repo is required"))?,
            self.record_repo
                .ok_or_else(|| ServiceError::validation("record_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.task_repo
                .ok_or_else(|| ServiceError::validation("task_repo is required"))?,
            self.password_service
                .ok_or_else(|| ServiceError::validation("password_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
