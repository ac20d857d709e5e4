//! Page/cursor navigation over a card sequence.
//!
//! Position is `(page, cursor)`; `page * page_size + cursor` is the absolute
//! index into the sequence currently being browsed. The navigator does not
//! own the sequence. Every operation takes its length, so the same navigator
//! follows whatever filtered view is current.
//!
//! Nothing here fails. Out-of-range requests resolve to "no selection".

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_PAGE_SIZE;

/// Direction of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Forward,
    Backward,
}

/// Page and in-page cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorState {
    pub page: usize,
    pub cursor: usize,
}

impl CursorState {
    #[must_use]
    pub const fn new(page: usize, cursor: usize) -> Self {
        Self { page, cursor }
    }

    /// Split an absolute index into page and cursor.
    #[must_use]
    pub const fn from_absolute(index: usize, page_size: usize) -> Self {
        Self {
            page: index / page_size,
            cursor: index % page_size,
        }
    }

    /// Absolute index this position points at.
    ///
    /// Saturates, so a page far past the end stays out of range.
    #[must_use]
    pub const fn absolute(self, page_size: usize) -> usize {
        self.page.saturating_mul(page_size).saturating_add(self.cursor)
    }
}

/// Number of pages needed for `len` items.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Cursor navigator.
///
/// ## Example
///
/// ```
/// use deck_keeper::navigation::{CursorState, Navigator, Step};
///
/// let mut nav = Navigator::new(25);
/// nav.jump_to(29, 30);
/// assert_eq!(nav.position(), CursorState::new(1, 4));
///
/// // Stepping past the last card wraps to the first.
/// assert_eq!(nav.step_by(Step::Forward, 30), Some(0));
/// assert_eq!(nav.position(), CursorState::new(0, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    page_size: usize,
    position: CursorState,
    selected: Option<usize>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Navigator {
    /// Create a navigator at page 0, cursor 0, with nothing selected.
    ///
    /// A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            position: CursorState::default(),
            selected: None,
        }
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn position(&self) -> CursorState {
        self.position
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.position.page
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.position.cursor
    }

    /// Absolute index of the current position.
    #[must_use]
    pub fn absolute(&self) -> usize {
        self.position.absolute(self.page_size)
    }

    /// Absolute index of the selected card, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Back to page 0, cursor 0. Selects index 0 if the sequence is non-empty.
    pub fn reset(&mut self, len: usize) -> Option<usize> {
        self.position = CursorState::default();
        self.selected = (len > 0).then_some(0);
        self.selected
    }

    /// Select the card at an absolute index.
    ///
    /// An index outside `[0, len)` clears the selection and leaves the
    /// position alone.
    pub fn jump_to(&mut self, index: usize, len: usize) -> Option<usize> {
        if index < len {
            self.position = CursorState::from_absolute(index, self.page_size);
            self.selected = Some(index);
        } else {
            self.selected = None;
        }
        self.selected
    }

    /// Move one card forward or backward with wraparound at both ends.
    pub fn step_by(&mut self, step: Step, len: usize) -> Option<usize> {
        if len == 0 {
            self.position = CursorState::default();
            self.selected = None;
            return None;
        }

        let current = self.absolute();
        let next = match step {
            Step::Forward => current.checked_add(1),
            Step::Backward => current.checked_sub(1),
        };
        let index = match next {
            None if step == Step::Backward => len - 1,
            Some(i) if i < len => i,
            _ => 0,
        };

        self.position = CursorState::from_absolute(index, self.page_size);
        self.selected = Some(index);
        self.selected
    }

    /// Jump to a page with the cursor on its first row.
    ///
    /// The page is not validated. A page past the end yields an empty
    /// page slice and no selection.
    pub fn set_page(&mut self, page: usize, len: usize) -> Option<usize> {
        self.position = CursorState::new(page, 0);
        self.sync_selection(len)
    }

    /// Next page, cursor 0. Wraps from the last page to page 0.
    pub fn advance_page(&mut self, len: usize) -> Option<usize> {
        let total = page_count(len, self.page_size);
        let page = match self.position.page.checked_add(1) {
            Some(next) if next < total => next,
            _ => 0,
        };

        self.position = CursorState::new(page, 0);
        self.sync_selection(len)
    }

    /// Previous page, cursor on its last row.
    ///
    /// Wrapping from page 0 lands on the last card of the last page, which
    /// is row `page_size - 1` when `len` is an exact multiple of the page
    /// size.
    pub fn retreat_page(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.reset(0);
        }

        self.position = match self.position.page.checked_sub(1) {
            Some(page) => CursorState::new(page, self.page_size - 1),
            None => {
                let total = page_count(len, self.page_size);
                CursorState::new(total - 1, (len - 1) % self.page_size)
            }
        };
        self.sync_selection(len)
    }

    /// Move down one row, crossing into the next page at the bottom.
    pub fn next_row(&mut self, len: usize) -> Option<usize> {
        let on_page = self.page_range(len).len();
        if self.position.cursor + 1 >= on_page {
            return self.advance_page(len);
        }
        self.position.cursor += 1;
        self.sync_selection(len)
    }

    /// Move up one row, crossing into the previous page at the top.
    pub fn prev_row(&mut self, len: usize) -> Option<usize> {
        if self.position.cursor == 0 {
            return self.retreat_page(len);
        }
        self.position.cursor -= 1;
        self.sync_selection(len)
    }

    /// Index range of the current page, clamped to the sequence.
    #[must_use]
    pub fn page_range(&self, len: usize) -> Range<usize> {
        page_range(self.position.page, self.page_size, len)
    }

    fn sync_selection(&mut self, len: usize) -> Option<usize> {
        let index = self.absolute();
        self.selected = (index < len).then_some(index);
        self.selected
    }
}

/// Index range of `page`, clamped to `len`. Empty past the end.
#[must_use]
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_state_absolute() {
        let pos = CursorState::from_absolute(29, 25);
        assert_eq!(pos, CursorState::new(1, 4));
        assert_eq!(pos.absolute(25), 29);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 25), 0);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
    }

    #[test]
    fn test_jump_out_of_range_clears_selection() {
        let mut nav = Navigator::new(25);
        assert_eq!(nav.jump_to(3, 10), Some(3));
        assert_eq!(nav.jump_to(10, 10), None);
        assert_eq!(nav.selected(), None);
        assert_eq!(nav.position(), CursorState::new(0, 3));
    }

    #[test]
    fn test_step_backward_wraps_to_last() {
        let mut nav = Navigator::new(25);
        assert_eq!(nav.step_by(Step::Backward, 30), Some(29));
        assert_eq!(nav.position(), CursorState::new(1, 4));
    }

    #[test]
    fn test_step_empty_sequence() {
        let mut nav = Navigator::new(25);
        nav.set_page(3, 0);
        assert_eq!(nav.step_by(Step::Forward, 0), None);
        assert_eq!(nav.position(), CursorState::default());
    }

    #[test]
    fn test_set_page_unvalidated() {
        let mut nav = Navigator::new(25);
        assert_eq!(nav.set_page(1, 30), Some(25));
        assert_eq!(nav.set_page(5, 30), None);
        assert_eq!(nav.page(), 5);
        assert!(nav.page_range(30).is_empty());
    }

    #[test]
    fn test_advance_wraps() {
        let mut nav = Navigator::new(25);
        nav.set_page(1, 30);
        assert_eq!(nav.advance_page(30), Some(0));
        assert_eq!(nav.position(), CursorState::new(0, 0));
    }

    #[test]
    fn test_retreat_wrap_partial_last_page() {
        let mut nav = Navigator::new(25);
        assert_eq!(nav.retreat_page(30), Some(29));
        assert_eq!(nav.position(), CursorState::new(1, 4));
    }

    #[test]
    fn test_retreat_wrap_exact_multiple() {
        let mut nav = Navigator::new(25);
        assert_eq!(nav.retreat_page(50), Some(49));
        assert_eq!(nav.position(), CursorState::new(1, 24));
    }

    #[test]
    fn test_retreat_without_wrap() {
        let mut nav = Navigator::new(25);
        nav.set_page(1, 60);
        assert_eq!(nav.retreat_page(60), Some(24));
        assert_eq!(nav.position(), CursorState::new(0, 24));
    }

    #[test]
    fn test_rows_cross_pages() {
        let mut nav = Navigator::new(25);
        nav.jump_to(24, 30);
        assert_eq!(nav.next_row(30), Some(25));
        assert_eq!(nav.position(), CursorState::new(1, 0));

        assert_eq!(nav.prev_row(30), Some(24));
        assert_eq!(nav.position(), CursorState::new(0, 24));

        nav.jump_to(29, 30);
        assert_eq!(nav.next_row(30), Some(0));
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(0, 25, 30), 0..25);
        assert_eq!(page_range(1, 25, 30), 25..30);
        assert_eq!(page_range(2, 25, 30), 30..30);
        assert_eq!(page_range(usize::MAX, 25, 30), 30..30);
    }

    #[test]
    fn test_zero_page_size() {
        let nav = Navigator::new(0);
        assert_eq!(nav.page_size(), 1);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let mut nav = Navigator::new(25);
        assert_eq!(nav.set_page(usize::MAX, 30), None);
        assert_eq!(nav.absolute(), usize::MAX);
        assert_eq!(nav.step_by(Step::Forward, 30), Some(0));

        nav.set_page(usize::MAX, 30);
        assert_eq!(nav.step_by(Step::Backward, 30), Some(0));

        nav.set_page(usize::MAX, 30);
        assert_eq!(nav.advance_page(30), Some(0));

        nav.set_page(usize::MAX, 30);
        assert_eq!(nav.retreat_page(30), None);
        assert!(nav.page_range(30).is_empty());
    }
}
