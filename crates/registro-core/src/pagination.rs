//! Pagination
//!
//! Windowing over an ordered sequence. The requested page index is clamped to
//! the pages that exist right now, so a caller holding a stale page number
//! after the collection shrank gets the last real page instead of an empty
//! slice.

/// Rows per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of an ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `page_size` long
    pub items: &'a [T],
    /// Number of pages, never less than 1
    pub page_count: usize,
    /// Requested index clamped into `0..page_count`
    pub effective_page_index: usize,
    /// Length of the whole sequence
    pub total: usize,
}

impl<T> Page<'_, T> {
    /// 1-based page number for display
    pub fn display_number(&self) -> usize {
        self.effective_page_index + 1
    }

    pub fn has_previous(&self) -> bool {
        self.effective_page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.effective_page_index + 1 < self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut page `page_index` out of `items`
///
/// A `page_size` of 0 is treated as 1. An empty sequence has one empty page.
pub fn window<T>(items: &[T], page_size: usize, page_index: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let effective_page_index = page_index.min(page_count - 1);

    let start = (effective_page_index * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        items: &items[start..end],
        page_count,
        effective_page_index,
        total,
    }
}
