//! Page-number pagination.
//!
//! Pages are 1-indexed. The requested page and page size are echoed back
//! untouched; only the slice they select is clamped to the collection.

use std::ops::Range;

use serde::Serialize;

/// Page parameters as received from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page (1-indexed, unvalidated).
    pub page: i64,
    /// Requested rows per page (unvalidated).
    pub page_size: i64,
}

impl PageRequest {
    /// Creates page parameters without validation.
    #[must_use]
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Returns `(page - 1) * page_size`, or `None` on overflow.
    ///
    /// The result is negative for `page < 1`.
    #[must_use]
    pub const fn offset(&self) -> Option<i64> {
        match self.page.checked_sub(1) {
            Some(zero_based) => zero_based.checked_mul(self.page_size),
            None => None,
        }
    }

    /// Returns the positions this request selects from `total` records.
    ///
    /// Non-positive pages or page sizes select nothing, as does an offset
    /// at or past the end.
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.page < 1 || self.page_size < 1 {
            return 0..0;
        }
        let Some(offset) = self.offset() else {
            return 0..0;
        };
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(total);
        let length = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let end = start.saturating_add(length).min(total);
        start..end
    }
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Size of the whole collection when the page was taken.
    pub total_rows: usize,
    /// The requested page, echoed back.
    pub current_page: i64,
    /// The requested page size, echoed back.
    pub rows_per_page: i64,
    /// Records on this page, in collection order.
    pub page: Vec<T>,
}

impl<T> Page<T> {
    /// Takes the page `request` selects from `records`.
    #[must_use]
    pub fn slice(records: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        Self {
            total_rows: records.len(),
            current_page: request.page,
            rows_per_page: request.page_size,
            page: records[request.window(records.len())].to_vec(),
        }
    }

    /// Converts every row, keeping the envelope.
    #[must_use]
    pub fn map<U>(self, function: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_rows: self.total_rows,
            current_page: self.current_page,
            rows_per_page: self.rows_per_page,
            page: self.page.into_iter().map(function).collect(),
        }
    }
}
