//! Ranking service - who hasn't checked in today
//!
//! Friends who already checked in on the date are excluded entirely; the
//! rest are ordered by the querying user's directed intimacy score, then by
//! friendship recency. Dates are calendar dates in the server's local
//! timezone.

use chrono::{Local, NaiveDate};
use tracing::instrument;

use habit_core::value_objects::{PageWindow, RankWindow};

use crate::dto::{FriendResponse, PaginatedResponse, RankedFriendResponse, RankedListResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ranking service
pub struct RankingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RankingService<'a> {
    /// Create a new RankingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Today as a server-local calendar date
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Friends without a check-in today, most recently befriended first
    #[instrument(skip(self))]
    pub async fn unfinished_friends(&self, raw_id: i64) -> ServiceResult<Vec<FriendResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let friends = self
            .ctx
            .friendship_repo()
            .unfinished(user_id, Self::today())
            .await?;

        Ok(friends.into_iter().map(FriendResponse::from).collect())
    }

    /// Top-N intimacy-ranked friends without a check-in today
    #[instrument(skip(self))]
    pub async fn unfinished_top(
        &self,
        raw_id: i64,
        limit: Option<i64>,
    ) -> ServiceResult<RankedListResponse<RankedFriendResponse>> {
        let user_id = super::parse_user_id(raw_id)?;
        let window = match limit {
            Some(n) => RankWindow::top(n),
            None => RankWindow::default(),
        };

        let (friends, total) = self
            .ctx
            .friendship_repo()
            .ranked_unfinished(user_id, Self::today(), window)
            .await?;

        Ok(RankedListResponse {
            data: friends.into_iter().map(RankedFriendResponse::from).collect(),
            total_count: total,
        })
    }

    /// Paged intimacy-ranked friends without a check-in today
    ///
    /// `total_count` counts unfinished friends, not all friends.
    #[instrument(skip(self))]
    pub async fn unfinished_page(
        &self,
        raw_id: i64,
        window: PageWindow,
    ) -> ServiceResult<PaginatedResponse<RankedFriendResponse>> {
        let user_id = super::parse_user_id(raw_id)?;

        let (friends, total) = self
            .ctx
            .friendship_repo()
            .ranked_unfinished(user_id, Self::today(), RankWindow::Page(window))
            .await?;

        Ok(PaginatedResponse::new(
            friends.into_iter().map(RankedFriendResponse::from).collect(),
            total,
            window,
        ))
    }
}
