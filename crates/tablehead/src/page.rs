#![forbid(unsafe_code)]

//! Page windowing for the row model.
//!
//! The pipeline has two stages: the core stage ([`crate::row`]) maps the
//! data slice into identified rows, and the pagination stage here windows
//! that output into the currently visible page. Degenerate requests are
//! absorbed, never surfaced: a zero page size acts as one, an out-of-range
//! page index lands on the last page, and empty data yields a single empty
//! page.

use std::ops::Range;

use crate::row::{Row, core_rows};

const DEFAULT_PAGE_SIZE: usize = 10;

/// A requested page window: which page, and how many rows per page.
///
/// The size is kept at least 1; the index is a request that the derivation
/// clamps against the actual page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    index: usize,
    size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    /// Create a window at `index` with `size` rows per page.
    #[must_use]
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    /// The requested page index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rows per page. Always at least 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Changing the page size moves the window back to the first page.
    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size.max(1);
        self.index = 0;
    }
}

/// Pagination metadata derived for one pass.
///
/// This is the entire surface an external pagination control may read; the
/// mutators live on [`DataTable`](crate::table::DataTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Effective (clamped) page index.
    pub index: usize,
    /// Total pages. Always at least 1, even for empty data.
    pub count: usize,
    /// Rows per page.
    pub size: usize,
    /// Rows in the underlying collection.
    pub total_rows: usize,
}

/// The derived, paginated view of the raw rows.
pub struct RowModel<'a, T> {
    all: Vec<Row<'a, T>>,
    visible: Range<usize>,
    page: PageInfo,
}

impl<'a, T> RowModel<'a, T> {
    /// Derive the row model for `data` under the requested window.
    ///
    /// Referentially re-derivable from `(data, window)` alone; no state is
    /// read or written.
    #[must_use]
    pub fn compute(data: &'a [T], window: PageWindow) -> Self {
        let all = core_rows(data);
        let size = window.size().max(1);
        let count = page_count(all.len(), size);
        let index = window.index().min(count - 1);
        let start = (index * size).min(all.len());
        let end = start.saturating_add(size).min(all.len());
        Self {
            all,
            visible: start..end,
            page: PageInfo {
                index,
                count,
                size,
                total_rows: data.len(),
            },
        }
    }

    /// Every row of the collection, in input order.
    #[must_use]
    pub fn all_rows(&self) -> &[Row<'a, T>] {
        &self.all
    }

    /// The rows of the current page.
    #[must_use]
    pub fn visible_rows(&self) -> &[Row<'a, T>] {
        &self.all[self.visible.clone()]
    }

    /// Pagination metadata for this pass.
    #[must_use]
    pub fn page(&self) -> PageInfo {
        self.page
    }

    /// Whether the underlying collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl<T> std::fmt::Debug for RowModel<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowModel")
            .field("total_rows", &self.all.len())
            .field("visible", &self.visible)
            .field("page", &self.page)
            .finish()
    }
}

/// `max(1, ceil(total / size))`.
fn page_count(total: usize, size: usize) -> usize {
    total.div_ceil(size).max(1)
}
