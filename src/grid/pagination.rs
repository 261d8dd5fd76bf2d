//! Pagination engine
//!
//! Slices an ordered collection into fixed-size pages. Changing the page
//! size resets to the first page; shrinking the underlying collection does
//! not clamp the current page, so a filtered-down grid may show an empty
//! page until the user navigates. That matches the original UI behavior.

use crate::constants::DEFAULT_ROWS_PER_PAGE;

/// Current page and page size for a grid view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    rows_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pager {
    /// Create a pager on page 0. A zero page size is nonsensical and is
    /// bumped to 1.
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and reset to the first page, so the user is
    /// never stranded beyond the new last page by the resize itself.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    /// The slice of `items` visible on the current page. A page start past
    /// the end of the collection yields an empty slice.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.rows_per_page).min(items.len());
        &items[start..end]
    }

    /// Number of pages needed for `total` items (at least 1).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }
}
