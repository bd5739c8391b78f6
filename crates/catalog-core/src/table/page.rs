//! Pagination cursor.

use std::ops::Range;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page index and page size. `size` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    /// Returns `None` for a zero page size.
    pub fn with_size(size: usize) -> Option<Self> {
        (size > 0).then_some(Self { index: 0, size })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of pages for `total` rows. Never zero.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size).max(1)
    }

    /// Moves to `index`, clamped to the pages available for `total` rows.
    pub fn set_index(&mut self, index: i64, total: usize) {
        let last = self.page_count(total) - 1;
        self.index = if index <= 0 {
            0
        } else {
            usize::try_from(index).unwrap_or(usize::MAX).min(last)
        };
    }

    /// Caller guarantees `size > 0`.
    pub(crate) fn set_size(&mut self, size: usize, total: usize) {
        debug_assert!(size > 0);
        self.size = size;
        self.clamp(total);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn clamp(&mut self, total: usize) {
        self.index = self.index.min(self.page_count(total) - 1);
    }

    /// Row range of the current page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.index.saturating_mul(self.size).min(total);
        let end = start.saturating_add(self.size).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_never_zero() {
        let p = PageState::default();
        assert_eq!(p.page_count(0), 1);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(11), 2);
    }

    #[test]
    fn with_size_rejects_zero() {
        assert!(PageState::with_size(0).is_none());
        assert_eq!(PageState::with_size(3).map(|p| p.size()), Some(3));
    }

    #[test]
    fn set_index_clamps_both_ends() {
        let mut p = PageState::with_size(2).unwrap();
        p.set_index(-7, 5);
        assert_eq!(p.index(), 0);
        p.set_index(i64::MAX, 5);
        assert_eq!(p.index(), 2);
        p.set_index(1, 5);
        assert_eq!(p.index(), 1);
    }

    #[test]
    fn range_on_last_partial_page() {
        let mut p = PageState::with_size(4).unwrap();
        p.set_index(2, 10);
        assert_eq!(p.range(10), 8..10);
    }

    #[test]
    fn set_size_reclamps() {
        let mut p = PageState::with_size(1).unwrap();
        p.set_index(4, 5);
        p.set_size(2, 5);
        assert_eq!(p.index(), 2);
        p.set_size(10, 5);
        assert_eq!(p.index(), 0);
    }
}
