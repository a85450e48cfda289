//! Grouped pagination arithmetic.
//!
//! Page buttons are shown in fixed-size windows. Group navigation jumps between whole
//! windows, and every navigation is reported as a requested page number so the caller stays
//! the owner of the current page.

use std::ops::RangeInclusive;

/// Items per page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page buttons per window when the caller does not choose a count.
pub const DEFAULT_VISIBLE_COUNT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The page window containing the current page.
pub struct PageWindow {
    current: i64,
    total_pages: i64,
    window_size: i64,
    start: i64,
    end: i64,
}

impl PageWindow {
    /// Computes the window for `page` over `total` items.
    ///
    /// Returns `None` when there is nothing to paginate (`total <= 0`). Other inputs are
    /// clamped: a non-positive page size counts as one item per page, the window holds at
    /// least one button, and `page` is pulled into `1..=total_pages`.
    pub fn compute(page: i64, total: i64, page_size: i64, visible_count: i64) -> Option<Self> {
        if total <= 0 {
            return None;
        }

        let page_size = page_size.max(1);
        let total_pages = (total - 1) / page_size + 1;
        let window_size = visible_count.min(total_pages).max(1);
        let current = page.clamp(1, total_pages);
        let start = (current - 1) / window_size * window_size + 1;
        let end = total_pages.min(start.saturating_add(window_size - 1));

        Some(Self {
            current,
            total_pages,
            window_size,
            start,
            end,
        })
    }

    /// Current page after clamping.
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Total number of pages, at least one.
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Buttons per window after clamping.
    pub fn window_size(&self) -> i64 {
        self.window_size
    }

    /// First page number in the window.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last page number in the window.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Page numbers to render.
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Returns `true` for the current page.
    pub fn is_current(&self, page: i64) -> bool {
        page == self.current
    }

    /// Whether a window exists before this one.
    pub fn has_prev_group(&self) -> bool {
        self.start != 1
    }

    /// Whether a window exists after this one.
    pub fn has_next_group(&self) -> bool {
        self.end != self.total_pages
    }

    /// Page requested by the previous-group control: the tail of the previous window.
    pub fn prev_group_target(&self) -> Option<i64> {
        self.has_prev_group().then(|| self.start - 1)
    }

    /// Page requested by the next-group control: the head of the next window.
    pub fn next_group_target(&self) -> Option<i64> {
        self.has_next_group()
            .then(|| self.total_pages.min(self.start.saturating_add(self.window_size)))
    }

    /// Page requested by clicking `page`; clicking the current page requests nothing.
    pub fn select_target(&self, page: i64) -> Option<i64> {
        (page != self.current).then_some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn window(page: i64, total: i64, page_size: i64, visible: i64) -> PageWindow {
        PageWindow::compute(page, total, page_size, visible).expect("non-empty total")
    }

    #[test]
    fn empty_totals_render_nothing() {
        assert_eq!(PageWindow::compute(1, 0, 10, 5), None);
        assert_eq!(PageWindow::compute(1, -4, 10, 5), None);
    }

    #[test]
    fn hundred_twenty_three_items_walkthrough() {
        let first = window(1, 123, 10, 5);
        assert_eq!(first.total_pages(), 13);
        assert_eq!(first.pages(), 1..=5);
        assert_eq!(first.prev_group_target(), None);
        assert_eq!(first.next_group_target(), Some(6));

        let second = window(6, 123, 10, 5);
        assert_eq!(second.pages(), 6..=10);
        assert_eq!(second.prev_group_target(), Some(5));
        assert_eq!(second.next_group_target(), Some(11));

        let last = window(12, 123, 10, 5);
        assert_eq!(last.pages(), 11..=13);
        assert_eq!(last.next_group_target(), None);
        assert_eq!(last.prev_group_target(), Some(10));
    }

    #[test]
    fn next_group_lands_on_window_head_not_page_plus_one() {
        let mid = window(3, 123, 10, 5);
        assert_eq!(mid.next_group_target(), Some(6));
    }

    #[test]
    fn window_always_contains_current_page() {
        for total in 1..=60 {
            for page_size in 1..=7 {
                for visible in 1..=6 {
                    for page in -2..=14 {
                        let w = window(page, total, page_size, visible);
                        assert!(w.start() <= w.current() && w.current() <= w.end());
                        assert!(w.end() - w.start() + 1 <= visible);
                        assert!(w.end() <= w.total_pages());
                    }
                }
            }
        }
    }

    #[test]
    fn inputs_are_clamped() {
        let past_end = window(99, 25, 10, 5);
        assert_eq!(past_end.current(), 3);
        assert_eq!(past_end.pages(), 1..=3);

        let before_start = window(-7, 25, 10, 5);
        assert_eq!(before_start.current(), 1);

        let zero_page_size = window(1, 4, 0, 5);
        assert_eq!(zero_page_size.total_pages(), 4);

        let zero_visible = window(2, 30, 10, 0);
        assert_eq!(zero_visible.window_size(), 1);
        assert_eq!(zero_visible.pages(), 2..=2);
    }

    #[test]
    fn extreme_totals_stay_in_range() {
        let huge = window(1, i64::MAX, 10, 5);
        assert_eq!(huge.total_pages(), (i64::MAX - 1) / 10 + 1);
        assert_eq!(huge.pages(), 1..=5);
        assert_eq!(huge.next_group_target(), Some(6));

        let last = window(i64::MAX, i64::MAX, 1, 5);
        assert_eq!(last.current(), i64::MAX);
        assert!(last.start() <= last.current() && last.current() <= last.end());
        assert_eq!(last.end(), i64::MAX);
        assert_eq!(last.next_group_target(), None);

        let wide = window(1, i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(wide.total_pages(), 1);
        assert_eq!(wide.pages(), 1..=1);
    }

    #[test]
    fn less_than_one_page_is_a_single_window() {
        let w = window(1, 3, 10, 5);
        assert_eq!(w.total_pages(), 1);
        assert_eq!(w.pages(), 1..=1);
        assert!(!w.has_prev_group());
        assert!(!w.has_next_group());
    }

    #[test]
    fn selecting_the_current_page_is_a_no_op() {
        let w = window(4, 123, 10, 5);
        assert_eq!(w.select_target(4), None);
        assert_eq!(w.select_target(2), Some(2));
        assert!(w.is_current(4));
    }
}
