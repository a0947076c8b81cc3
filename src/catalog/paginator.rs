//! Fixed-size paging over a view.
//!
//! Pages are 1-indexed. A view always has at least one page, even when empty,
//! so `current_page` never has to represent "no page".

use crate::domain::Product;
use std::fmt;
use std::rc::Rc;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` entries, never less than one.
///
/// # Examples
///
/// ```
/// use zshelf::catalog::total_pages;
///
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(0, 10), 1);
/// ```
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Page position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Starts on page 1. A zero page size is raised to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Goes back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Changes the page size and resets to page 1.
    ///
    /// The reset happens even when the size is unchanged; callers that want a
    /// no-op for an identical size must check first.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Advances one page. Returns `false` when already on the last page.
    pub fn next_page(&mut self, view_len: usize) -> bool {
        if self.current_page >= total_pages(view_len, self.page_size) {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Goes back one page. Returns `false` when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists for a view of `view_len` entries.
    #[must_use]
    pub fn has_next(&self, view_len: usize) -> bool {
        self.current_page < total_pages(view_len, self.page_size)
    }
}

/// "`shown` of `total`" summary for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLabel {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.shown, self.total)
    }
}

/// One page of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: &'a [Rc<Product>],
    pub current_page: usize,
    pub total_pages: usize,
    pub range: RangeLabel,
}

/// Slices out page `state.current_page()` of `view`.
///
/// Bounds saturate, so a page past the end yields an empty slice instead of
/// panicking.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use zshelf::catalog::{get_page, PageState};
/// use zshelf::Product;
///
/// let view: Vec<_> = (0..25).map(|i| Rc::new(Product::new(i, "item", 1.0))).collect();
/// let mut state = PageState::new(10);
/// state.next_page(view.len());
/// state.next_page(view.len());
///
/// let page = get_page(&view, &state);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items.len(), 5);
/// assert_eq!(page.range.to_string(), "5 of 25");
/// ```
#[must_use]
pub fn get_page<'a>(view: &'a [Rc<Product>], state: &PageState) -> Page<'a> {
    let size = state.page_size();
    let start = (state.current_page() - 1).saturating_mul(size).min(view.len());
    let end = start.saturating_add(size).min(view.len());
    let items = &view[start..end];

    Page {
        items,
        current_page: state.current_page(),
        total_pages: total_pages(view.len(), size),
        range: RangeLabel {
            shown: items.len(),
            total: view.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(len: usize) -> Vec<Rc<Product>> {
        (0..len)
            .map(|i| Rc::new(Product::new(i as u64, format!("item {i}"), i as f64)))
            .collect()
    }

    #[test]
    fn scenario_c_last_page_is_partial() {
        let v = view(25);
        let mut state = PageState::new(10);
        assert!(state.next_page(v.len()));
        assert!(state.next_page(v.len()));

        let page = get_page(&v, &state);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, 20);
        assert_eq!(page.range.to_string(), "5 of 25");
    }

    #[test]
    fn scenario_d_page_size_change_resets_page() {
        let v = view(25);
        let mut state = PageState::new(10);
        state.next_page(v.len());
        state.next_page(v.len());
        assert_eq!(state.current_page(), 3);

        state.set_page_size(20);
        assert_eq!(state.current_page(), 1);
        assert_eq!(get_page(&v, &state).total_pages, 2);
    }

    #[test]
    fn pages_reconstruct_the_view() {
        for len in [0, 1, 9, 10, 11, 47] {
            for size in [1, 3, 10, 50] {
                let v = view(len);
                let mut state = PageState::new(size);
                let mut collected = Vec::new();
                loop {
                    collected.extend(get_page(&v, &state).items.iter().map(|p| p.id));
                    if !state.next_page(v.len()) {
                        break;
                    }
                }
                let expected: Vec<u64> = v.iter().map(|p| p.id).collect();
                assert_eq!(collected, expected, "len {len} size {size}");
            }
        }
    }

    #[test]
    fn empty_view_has_one_empty_page() {
        let page = get_page(&[], &PageState::new(10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.range, RangeLabel { shown: 0, total: 0 });
    }

    #[test]
    fn navigation_is_a_no_op_at_the_boundaries() {
        let mut state = PageState::new(10);
        assert!(!state.prev_page());
        assert_eq!(state.current_page(), 1);

        assert!(state.next_page(15));
        assert!(!state.next_page(15));
        assert_eq!(state.current_page(), 2);
        assert!(!state.has_next(15));
        assert!(state.has_prev());
    }

    #[test]
    fn page_past_the_end_yields_empty_slice() {
        let v = view(30);
        let mut state = PageState::new(10);
        state.next_page(v.len());
        state.next_page(v.len());
        // view shrinks without a reset
        let shrunk = &v[..5];
        let page = get_page(shrunk, &state);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let mut state = PageState::new(0);
        assert_eq!(state.page_size(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(total_pages(3, 0), 3);
    }
}
