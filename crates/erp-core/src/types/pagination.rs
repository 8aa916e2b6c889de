//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Out-of-range values are rejected by [`PageRequest::validate`] rather than
/// clamped, so a caller asking for page 0 or a 10,000-row page gets a
/// validation error instead of silently different results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Reject out-of-range page parameters before any SQL is built.
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::validation("page must be >= 1"));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages. Zero when there are no matching items.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1 && total_pages > 0,
        }
    }
}

/// Response shape for offset-based "load more" lookups.
///
/// Unlike [`PageResponse`] there is no total count; `has_more` is determined
/// by fetching one row past the requested limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetPage<T: Serialize> {
    /// The items in this slice.
    pub items: Vec<T>,
    /// Whether more items exist past this slice.
    pub has_more: bool,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let resp = PageResponse::new(vec![1u32; 20], 1, 20, 52);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
        assert!(!resp.has_previous);
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let resp: PageResponse<u32> = PageResponse::new(Vec::new(), 1, 20, 0);
        assert_eq!(resp.total_pages, 0);
        assert_eq!(resp.total_items, 0);
        assert!(resp.items.is_empty());
        assert!(!resp.has_next);
        assert!(!resp.has_previous);
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let resp = PageResponse::new(vec![0u32; 20], 2, 20, 40);
        assert_eq!(resp.total_pages, 2);
        assert!(!resp.has_next);
        assert!(resp.has_previous);
    }

    #[test]
    fn test_offset_calculation() {
        let page = PageRequest::new(3, 25);
        assert_eq!(page.offset(), 50);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn test_validate_rejects_zero_page() {
        assert!(PageRequest::new(0, 25).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_page_size() {
        assert!(PageRequest::new(1, 101).validate().is_err());
        assert!(PageRequest::new(1, 0).validate().is_err());
        assert!(PageRequest::new(1, 100).validate().is_ok());
    }
}
