//! Fixed-size page arithmetic with clamping.
//!
//! Page requests coming from the UI are clamped into bounds rather than
//! rejected: clicks on stale page controls must never surface an error.

/// Page position over a filtered item sequence.
///
/// `current_page` is 1-based. `total_pages` is 0 for an empty sequence, and
/// callers render no page controls in that case (not "page 1 of 0").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    items_per_page: usize,
}

impl Pager {
    /// Create a pager starting on page 1. `items_per_page` has a floor of 1.
    pub fn new(items_per_page: usize) -> Self {
        Pager {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages needed for `len` items (0 when `len` is 0).
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.items_per_page)
    }

    /// Apply a page-change request, clamped to `[1, max(1, total_pages)]`.
    ///
    /// Out-of-bounds requests (zero, beyond the last page) are clamped, never
    /// rejected.
    pub fn set_page(&mut self, requested: usize, len: usize) {
        let last = self.total_pages(len).max(1);
        self.current_page = requested.clamp(1, last);
    }

    /// Re-clamp the current page after the underlying sequence shrank or
    /// grew. A page that is still in bounds is left unchanged.
    pub fn clamp_to(&mut self, len: usize) {
        let last = self.total_pages(len).max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// Back to page 1 (tab switches).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// The half-open slice for the current page; empty when the page is past
    /// the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let pager = Pager::new(15);
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(15), 1);
        assert_eq!(pager.total_pages(16), 2);
        assert_eq!(pager.total_pages(45), 3);
    }

    #[test]
    fn test_set_page_clamps_low_and_high() {
        let mut pager = Pager::new(10);

        pager.set_page(0, 25);
        assert_eq!(pager.current_page(), 1);

        pager.set_page(99, 25);
        assert_eq!(pager.current_page(), 3);

        pager.set_page(2, 25);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_set_page_on_empty_sequence_stays_on_page_one() {
        let mut pager = Pager::new(10);
        pager.set_page(5, 0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(0), 0);
    }

    #[test]
    fn test_clamp_to_only_moves_out_of_bounds_pages() {
        let mut pager = Pager::new(15);
        pager.set_page(2, 45);
        assert_eq!(pager.current_page(), 2);

        // 45 -> 44 items: still 3 pages, page 2 untouched
        pager.clamp_to(44);
        assert_eq!(pager.current_page(), 2);

        // 44 -> 16 items: 2 pages, page 2 still fine
        pager.clamp_to(16);
        assert_eq!(pager.current_page(), 2);

        // 16 -> 5 items: 1 page, page 2 clamped down
        pager.clamp_to(5);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_slice_half_open_ranges() {
        let items: Vec<i32> = (1..=12).collect();
        let mut pager = Pager::new(5);

        assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5]);

        pager.set_page(3, items.len());
        assert_eq!(pager.slice(&items), &[11, 12]);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let items: Vec<i32> = (1..=4).collect();
        let mut pager = Pager::new(5);
        // Force the pager out of range against a longer sequence, then slice
        // the shorter one.
        pager.set_page(3, 20);
        assert!(pager.slice(&items).is_empty());
        assert!(pager.slice::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_items_per_page_floor_of_one() {
        let pager = Pager::new(0);
        assert_eq!(pager.items_per_page(), 1);
        assert_eq!(pager.total_pages(3), 3);
    }
}
