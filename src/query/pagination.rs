//! Fixed-size pages over ranked results.
//!
//! Page numbers are 1-based. An empty result set still has one (empty)
//! page, so callers can always display "page 1 of 1".

use serde::Serialize;

/// Results shown per page
pub const PAGE_SIZE: usize = 10;

/// Slice out page `page_number` (1-based).
///
/// Page 0, a page past the end, or a zero page size yield an empty slice.
#[must_use]
pub fn page<T>(results: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }

    let start = (page_number - 1).saturating_mul(page_size);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// Number of pages needed for `len` results.
///
/// Never less than 1: an empty result set is reported as a single empty
/// page rather than zero pages.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Clamp a requested page number into `1..=page_count`
#[must_use]
pub fn clamp_page(page_number: usize, len: usize, page_size: usize) -> usize {
    page_number.clamp(1, page_count(len, page_size))
}

/// One page of results with the totals needed to render navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub items: Vec<T>,
}

impl<T: Clone> Page<T> {
    /// Build page `page_number` of `results`, clamping it into range
    pub fn new(results: &[T], page_number: usize, page_size: usize) -> Self {
        let number = clamp_page(page_number, results.len(), page_size);
        Self {
            number,
            total_pages: page_count(results.len(), page_size),
            total_results: results.len(),
            items: page(results, number, page_size).to_vec(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}
