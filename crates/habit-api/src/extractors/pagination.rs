//! Pagination extractor
//!
//! Extracts page/page_size pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use habit_core::value_objects::{PageWindow, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Number of items per page
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// True when the caller asked for pagination explicitly
    pub fn is_specified(&self) -> bool {
        self.page.is_some() || self.page_size.is_some()
    }

    /// Resolve to a validated window, filling in defaults
    pub fn window(&self) -> PageWindow {
        PageWindow::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Validated pagination window extractor
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageWindow);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination(params.window()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habit_core::value_objects::MAX_PAGE_SIZE;

    #[test]
    fn test_defaults_when_unspecified() {
        let params = PaginationParams {
            page: None,
            page_size: None,
        };
        assert!(!params.is_specified());

        let window = params.window();
        assert_eq!(window.page(), 1);
        assert_eq!(window.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_clamping() {
        let params = PaginationParams {
            page: Some(2),
            page_size: Some(500),
        };
        assert!(params.is_specified());

        let window = params.window();
        assert_eq!(window.page(), 2);
        assert_eq!(window.page_size(), MAX_PAGE_SIZE);
    }
}
