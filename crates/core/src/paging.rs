//! Page request normalization and the page envelope.
//!
//! Every listing endpoint takes `page_num`/`page_sz` and responds with a
//! [`Page`] carrying the rows plus total counts, so clients can render
//! pagers without a second request.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 250;

/// Number of leading rows fetched when a search result is cached as a batch.
pub const SEARCH_BATCH_ROWS: i64 = 1000;

/// Clamp a user-provided page number to non-negative, defaulting to the
/// first page.
///
/// # Examples
///
/// ```
/// use cinescope_core::paging::clamp_page_num;
/// assert_eq!(clamp_page_num(None), 0);
/// assert_eq!(clamp_page_num(Some(-3)), 0);
/// assert_eq!(clamp_page_num(Some(7)), 7);
/// ```
pub fn clamp_page_num(page_num: Option<i64>) -> i64 {
    page_num.unwrap_or(0).max(0)
}

/// Clamp a user-provided page size to valid bounds.
///
/// # Examples
///
/// ```
/// use cinescope_core::paging::clamp_page_sz;
/// assert_eq!(clamp_page_sz(None), 25);
/// assert_eq!(clamp_page_sz(Some(0)), 1);
/// assert_eq!(clamp_page_sz(Some(10_000)), 250);
/// ```
pub fn clamp_page_sz(page_sz: Option<i64>) -> i64 {
    page_sz.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A normalized page request: page number and size are already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Normalize raw query parameters into a page request.
    pub fn from_params(page_num: Option<i64>, page_sz: Option<i64>) -> Self {
        Self {
            page: clamp_page_num(page_num),
            size: clamp_page_sz(page_sz),
        }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

// ---------------------------------------------------------------------------
// Page envelope
// ---------------------------------------------------------------------------

/// One page of results plus the metadata needed to render a pager.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched rows and the total match count.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        let total_pages = if total_elements <= 0 {
            0
        } else {
            (total_elements + request.size - 1) / request.size
        };

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
