//! Result windowing for ranked friend queries
//!
//! A ranked sequence is presented either as a hard-capped top list or as
//! page/page_size windows. The two modes are mutually exclusive views over
//! the same ordering.

/// Default page size for paginated listings
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Maximum page size; larger requests are silently clamped
pub const MAX_PAGE_SIZE: i64 = 50;
/// Default hard cap for top-N recommendation lists
pub const DEFAULT_TOP_LIMIT: i64 = 10;

/// Validated page/page_size window (page is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    page_size: i64,
}

impl PageWindow {
    /// Build a window, clamping out-of-range values instead of rejecting them.
    ///
    /// page < 1 becomes 1; page_size is clamped to 1..=MAX_PAGE_SIZE.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    #[inline]
    pub const fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub const fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Row offset of the first element of this page
    #[inline]
    pub const fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Number of pages needed to cover `total` elements
    pub const fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.page_size - 1) / self.page_size
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Presentation mode for a ranked friend sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankWindow {
    /// Hard cap: the first `n` elements of the ranking
    Top(i64),
    /// Page/page_size windowing over the full ranking
    Page(PageWindow),
}

impl RankWindow {
    /// Top-N window with the limit clamped to 1..=MAX_PAGE_SIZE
    pub fn top(limit: i64) -> Self {
        Self::Top(limit.clamp(1, MAX_PAGE_SIZE))
    }

    /// SQL LIMIT value for this window
    pub fn limit(&self) -> i64 {
        match self {
            Self::Top(n) => *n,
            Self::Page(w) => w.page_size(),
        }
    }

    /// SQL OFFSET value for this window
    pub fn offset(&self) -> i64 {
        match self {
            Self::Top(_) => 0,
            Self::Page(w) => w.offset(),
        }
    }
}

impl Default for RankWindow {
    fn default() -> Self {
        Self::Top(DEFAULT_TOP_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_clamps_page_size() {
        let w = PageWindow::new(1, 500);
        assert_eq!(w.page_size(), MAX_PAGE_SIZE);

        let w = PageWindow::new(1, 0);
        assert_eq!(w.page_size(), 1);
    }

    #[test]
    fn test_page_window_clamps_page() {
        let w = PageWindow::new(0, 20);
        assert_eq!(w.page(), 1);
        assert_eq!(w.offset(), 0);

        let w = PageWindow::new(-5, 20);
        assert_eq!(w.page(), 1);
    }

    #[test]
    fn test_offset() {
        let w = PageWindow::new(3, 20);
        assert_eq!(w.offset(), 40);
    }

    #[test]
    fn test_total_pages() {
        let w = PageWindow::new(1, 20);
        assert_eq!(w.total_pages(0), 0);
        assert_eq!(w.total_pages(1), 1);
        assert_eq!(w.total_pages(20), 1);
        assert_eq!(w.total_pages(21), 2);
        assert_eq!(w.total_pages(41), 3);
    }

    #[test]
    fn test_rank_window_top_clamped() {
        assert_eq!(RankWindow::top(1000).limit(), MAX_PAGE_SIZE);
        assert_eq!(RankWindow::top(0).limit(), 1);
        assert_eq!(RankWindow::top(10).offset(), 0);
    }

    #[test]
    fn test_rank_window_page_limits() {
        let w = RankWindow::Page(PageWindow::new(2, 25));
        assert_eq!(w.limit(), 25);
        assert_eq!(w.offset(), 25);
    }
}
