//! Check-in service
//!
//! Records daily check-ins and serves check-in listings. The date is always
//! derived server-side from the local clock; clients never pick it.

use chrono::{Local, NaiveDate};
use tracing::{info, instrument};
use validator::Validate;

use habit_core::error::DomainError;
use habit_core::value_objects::PageWindow;

use crate::dto::{CheckinRequest, RecordResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Check-in service
pub struct CheckinService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckinService<'a> {
    /// Create a new CheckinService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Today as a server-local calendar date
    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Record today's check-in; a second same-day attempt is a conflict
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn check_in(&self, request: CheckinRequest) -> ServiceResult<RecordResponse> {
        request.validate()?;
        let user_id = super::parse_user_id(request.user_id)?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let record = self
            .ctx
            .record_repo()
            .create(user_id, &request.title, Self::today())
            .await?;

        info!(user_id = %user_id, date = %record.date, "Check-in recorded");

        Ok(RecordResponse::from(record))
    }

    /// All check-ins of a user, newest first
    #[instrument(skip(self))]
    pub async fn user_records(&self, raw_id: i64) -> ServiceResult<Vec<RecordResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let records = self.ctx.record_repo().find_by_user(user_id).await?;

        Ok(records.into_iter().map(RecordResponse::from).collect())
    }

    /// Global check-in feed, newest first
    #[instrument(skip(self))]
    pub async fn recent_records(&self, window: PageWindow) -> ServiceResult<Vec<RecordResponse>> {
        let records = self.ctx.record_repo().recent(window).await?;

        Ok(records.into_iter().map(RecordResponse::from).collect())
    }
}
