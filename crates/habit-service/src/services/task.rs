//! Habit task service

use tracing::{info, instrument};
use validator::Validate;

use habit_core::error::DomainError;

use crate::dto::{CreateTaskRequest, TaskResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Habit task service
pub struct TaskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskService<'a> {
    /// Create a new TaskService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a habit task
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn create_task(&self, request: CreateTaskRequest) -> ServiceResult<TaskResponse> {
        request.validate()?;
        let user_id = super::parse_user_id(request.user_id)?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let task = self.ctx.task_repo().create(user_id, &request.title).await?;

        info!(user_id = %user_id, task_id = task.id, "Task created");

        Ok(TaskResponse::from(task))
    }

    /// All tasks of a user, newest first
    #[instrument(skip(self))]
    pub async fn user_tasks(&self, raw_id: i64) -> ServiceResult<Vec<TaskResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let tasks = self.ctx.task_repo().find_by_user(user_id).await?;

        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    /// Delete a task owned by the requesting user
    ///
    /// A task owned by someone else reads as not found rather than leaking
    /// its existence.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, raw_user_id: i64, task_id: i64) -> ServiceResult<()> {
        let user_id = super::parse_user_id(raw_user_id)?;

        let task = self
            .ctx
            .task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or(DomainError::TaskNotFound(task_id))?;

        if task.user_id != user_id {
            return Err(DomainError::TaskNotFound(task_id).into());
        }

        self.ctx.task_repo().delete(task_id).await?;

        info!(user_id = %user_id, task_id, "Task deleted");

        Ok(())
    }
}
