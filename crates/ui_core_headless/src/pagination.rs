//! Visible page-window computation for paginated lists.
//!
//! [`compute_visible_pages`] decides which page numbers a pagination control shows around the
//! current page, and where elided runs collapse into an ellipsis marker. Inputs outside their
//! documented ranges are clamped rather than rejected, so the output invariants always hold:
//!
//! - the current page appears exactly once, inside the main window;
//! - page `1` and the last page are always present;
//! - numeric entries are strictly increasing and two ellipses are never adjacent.
//!
//! [`PaginationState::validate`] reports the clamped precondition so callers can surface it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default count of numeric entries in the main page window.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

/// One slot in a rendered page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "kebab-case")]
pub enum PageWindowEntry {
    /// Actionable page number (1-indexed).
    Page(usize),
    /// Inert marker for one or more elided pages.
    Ellipsis,
}

impl PageWindowEntry {
    /// Returns the page number for [`PageWindowEntry::Page`] entries.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    /// Returns `true` for [`PageWindowEntry::Ellipsis`].
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Precondition violations detected by [`PaginationState::validate`].
pub enum PaginationError {
    /// The page count was zero.
    #[error("total pages must be at least 1 (got {total_pages})")]
    EmptyPageCount {
        /// Supplied page count.
        total_pages: usize,
    },
    /// The current page fell outside `1..=total_pages`.
    #[error("current page {current_page} is outside 1..={total_pages}")]
    CurrentPageOutOfRange {
        /// Supplied current page.
        current_page: usize,
        /// Supplied page count.
        total_pages: usize,
    },
    /// The window size was zero.
    #[error("max visible pages must be at least 1 (got {max_visible})")]
    InvalidMaxVisible {
        /// Supplied window size.
        max_visible: usize,
    },
}

/// Caller-owned pagination inputs.
///
/// The struct does not enforce its own invariants; [`PaginationState::normalized`] applies the
/// clamping policy and every derived query goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page, 1-indexed.
    pub current_page: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Maximum count of numeric entries in the main window.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl PaginationState {
    /// Creates a state with the default window size.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    /// Returns a copy using `max_visible` as the window size.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Checks the documented preconditions without modifying the state.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition, checked in the order page count, current page,
    /// window size.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.total_pages < 1 {
            return Err(PaginationError::EmptyPageCount {
                total_pages: self.total_pages,
            });
        }
        if !(1..=self.total_pages).contains(&self.current_page) {
            return Err(PaginationError::CurrentPageOutOfRange {
                current_page: self.current_page,
                total_pages: self.total_pages,
            });
        }
        if self.max_visible < 1 {
            return Err(PaginationError::InvalidMaxVisible {
                max_visible: self.max_visible,
            });
        }
        Ok(())
    }

    /// Applies the clamping policy: at least one page, current page inside the range, and a
    /// window of at least one entry.
    pub fn normalized(self) -> Self {
        let total_pages = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, total_pages),
            total_pages,
            max_visible: self.max_visible.max(1),
        }
    }

    /// Computes the visible page window for this state.
    pub fn visible_pages(&self) -> Vec<PageWindowEntry> {
        compute_visible_pages(self.current_page, self.total_pages, self.max_visible)
    }

    /// Whether the "previous" and "first" controls are disabled.
    pub fn is_previous_disabled(&self) -> bool {
        self.normalized().current_page == 1
    }

    /// Whether the "next" and "last" controls are disabled.
    pub fn is_next_disabled(&self) -> bool {
        let state = self.normalized();
        state.current_page == state.total_pages
    }

    /// Target page for the "previous" control, if enabled.
    pub fn previous_page(&self) -> Option<usize> {
        let state = self.normalized();
        (!self.is_previous_disabled()).then(|| state.current_page - 1)
    }

    /// Target page for the "next" control, if enabled.
    pub fn next_page(&self) -> Option<usize> {
        let state = self.normalized();
        (!self.is_next_disabled()).then(|| state.current_page + 1)
    }

    /// Target page for the "last" control.
    pub fn last_page(&self) -> usize {
        self.normalized().total_pages
    }
}

/// Computes the ordered page window for a paginated list.
///
/// The main window is centered on `current_page` and widened toward whichever edge still has
/// room so it spans `max_visible` pages when enough exist. Page `1` and `total_pages` are
/// attached outside the window, separated by [`PageWindowEntry::Ellipsis`] when pages between
/// them and the window are skipped. For an even `max_visible` a centered window holds
/// `max_visible + 1` pages.
///
/// Out-of-range input is clamped: `total_pages` to at least 1, `current_page` into
/// `1..=total_pages`, and `max_visible` to at least 1.
pub fn compute_visible_pages(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageWindowEntry> {
    let PaginationState {
        current_page,
        total_pages,
        max_visible,
    } = PaginationState {
        current_page,
        total_pages,
        max_visible,
    }
    .normalized();

    let half = max_visible / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let mut end = current_page.saturating_add(half).min(total_pages);

    if end - start < max_visible - 1 {
        if start == 1 {
            end = total_pages.min(start.saturating_add(max_visible - 1));
        } else {
            start = end.saturating_sub(max_visible - 1).max(1);
        }
    }

    let mut pages = Vec::with_capacity(end - start + 5);
    if start > 1 {
        pages.push(PageWindowEntry::Page(1));
        if start > 2 {
            pages.push(PageWindowEntry::Ellipsis);
        }
    }

    pages.extend((start..=end).map(PageWindowEntry::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            pages.push(PageWindowEntry::Ellipsis);
        }
        pages.push(PageWindowEntry::Page(total_pages));
    }

    pages
}

/// Number of pages needed to show `item_count` items, `page_size` at a time.
///
/// Always at least 1 so an empty list still renders a single page. A zero `page_size` is
/// treated as 1.
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use PageWindowEntry::{Ellipsis, Page};

    fn assert_window_invariants(current: usize, total: usize, max_visible: usize) {
        let pages = compute_visible_pages(current, total, max_visible);
        let case = format!("current={current} total={total} max_visible={max_visible}");

        assert!(!pages.is_empty(), "{case}");
        assert_eq!(
            pages.iter().filter(|entry| **entry == Page(current)).count(),
            1,
            "{case}"
        );
        assert_eq!(pages.first(), Some(&Page(1)), "{case}");
        assert_eq!(pages.last(), Some(&Page(total)), "{case}");
        assert!(
            pages.windows(2).all(|pair| !(pair[0].is_ellipsis() && pair[1].is_ellipsis())),
            "{case}"
        );

        let numbers: Vec<usize> = pages.iter().filter_map(|entry| entry.page()).collect();
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]), "{case}");

        for (index, entry) in pages.iter().enumerate() {
            if entry.is_ellipsis() {
                let before = pages[index - 1].page().expect("page before ellipsis");
                let after = pages[index + 1].page().expect("page after ellipsis");
                assert!(after - before >= 2, "{case}");
            } else if let (Some(Page(a)), Some(Page(b))) = (pages.get(index), pages.get(index + 1))
            {
                assert_eq!(a + 1, *b, "adjacent pages must be consecutive: {case}");
            }
        }
    }

    #[test]
    fn invariants_hold_across_small_ranges() {
        for total in 1..=200 {
            for current in 1..=total {
                for max_visible in 1..=10 {
                    assert_window_invariants(current, total, max_visible);
                }
            }
        }
    }

    #[test]
    fn single_page_is_just_page_one() {
        assert_eq!(compute_visible_pages(1, 1, 5), vec![Page(1)]);
        assert_eq!(compute_visible_pages(1, 1, 1), vec![Page(1)]);
    }

    #[test]
    fn window_at_left_edge_widens_rightward() {
        assert_eq!(
            compute_visible_pages(1, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_at_right_edge_widens_leftward() {
        assert_eq!(
            compute_visible_pages(10, 10, 5),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn centered_window_has_ellipsis_on_both_sides() {
        assert_eq!(
            compute_visible_pages(5, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn window_starting_at_two_joins_page_one_without_ellipsis() {
        assert_eq!(
            compute_visible_pages(4, 10, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn window_ending_one_before_last_joins_without_ellipsis() {
        assert_eq!(
            compute_visible_pages(7, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn fewer_pages_than_window_lists_every_page() {
        assert_eq!(
            compute_visible_pages(2, 3, 5),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn even_window_centers_with_an_extra_page() {
        assert_eq!(
            compute_visible_pages(5, 10, 4),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(compute_visible_pages(0, 10, 5), compute_visible_pages(1, 10, 5));
        assert_eq!(
            compute_visible_pages(42, 10, 5),
            compute_visible_pages(10, 10, 5)
        );
        assert_eq!(compute_visible_pages(3, 0, 5), vec![Page(1)]);
        assert_eq!(
            compute_visible_pages(5, 10, 0),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = compute_visible_pages(17, 120, 7);
        let second = compute_visible_pages(17, 120, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn boundary_controls_follow_current_page() {
        let first = PaginationState::new(1, 10);
        assert!(first.is_previous_disabled());
        assert!(!first.is_next_disabled());
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let last = PaginationState::new(10, 10);
        assert!(!last.is_previous_disabled());
        assert!(last.is_next_disabled());
        assert_eq!(last.next_page(), None);
        assert_eq!(last.last_page(), 10);

        let middle = PaginationState::new(4, 10);
        assert!(!middle.is_previous_disabled());
        assert!(!middle.is_next_disabled());

        let only = PaginationState::new(1, 1);
        assert!(only.is_previous_disabled());
        assert!(only.is_next_disabled());
    }

    #[test]
    fn validate_reports_the_violated_precondition() {
        assert_eq!(PaginationState::new(3, 10).validate(), Ok(()));
        assert_eq!(
            PaginationState::new(1, 0).validate(),
            Err(PaginationError::EmptyPageCount { total_pages: 0 })
        );
        assert_eq!(
            PaginationState::new(11, 10).validate(),
            Err(PaginationError::CurrentPageOutOfRange {
                current_page: 11,
                total_pages: 10
            })
        );
        assert_eq!(
            PaginationState::new(1, 10).with_max_visible(0).validate(),
            Err(PaginationError::InvalidMaxVisible { max_visible: 0 })
        );
    }

    #[test]
    fn state_deserializes_with_default_window() {
        let state: PaginationState =
            serde_json::from_str(r#"{"current_page":2,"total_pages":8}"#).expect("parse");
        assert_eq!(state, PaginationState::new(2, 8));
    }

    #[test]
    fn oversized_window_lists_every_page() {
        let every_page: Vec<_> = (1..=10).map(Page).collect();
        assert_eq!(compute_visible_pages(1, 10, usize::MAX), every_page);
        assert_eq!(compute_visible_pages(10, 10, usize::MAX), every_page);
        assert_eq!(compute_visible_pages(5, 10, usize::MAX - 1), every_page);
        assert_eq!(
            compute_visible_pages(usize::MAX, usize::MAX, 3),
            vec![Page(1), Ellipsis, Page(usize::MAX - 2), Page(usize::MAX - 1), Page(usize::MAX)]
        );
    }

    #[test]
    fn page_count_rounds_up_and_never_reaches_zero() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 5);
    }

    proptest! {
        #[test]
        fn invariants_hold_for_large_ranges(
            total in 1usize..5_000,
            offset in 0usize..5_000,
            max_visible in 1usize..40,
        ) {
            let current = offset % total + 1;
            assert_window_invariants(current, total, max_visible);
        }

        #[test]
        fn invariants_hold_for_any_window_size(
            total in 1usize..5_000,
            offset in 0usize..5_000,
            max_visible in 1usize..=usize::MAX,
        ) {
            let current = offset % total + 1;
            assert_window_invariants(current, total, max_visible);
        }

        #[test]
        fn window_never_exceeds_page_budget(
            total in 1usize..5_000,
            offset in 0usize..5_000,
            max_visible in 1usize..=usize::MAX,
        ) {
            let current = offset % total + 1;
            let numbers = compute_visible_pages(current, total, max_visible)
                .into_iter()
                .filter_map(PageWindowEntry::page)
                .count();
            prop_assert!(numbers <= (max_visible | 1).saturating_add(2));
        }
    }
}
