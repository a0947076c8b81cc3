//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel(rows)` and consumed by
//! the renderer. They hold display-ready strings only; no catalog logic runs
//! during rendering.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub columns: Vec<ColumnHeader>,
    /// Rows of the current page, in view order.
    pub rows: Vec<ProductRow>,
    /// `None` when the view fits on a single page.
    pub pager: Option<PagerInfo>,
    pub footer: FooterInfo,
    /// Replaces table and pager when set (loading, failure, no results).
    pub status_screen: Option<StatusScreen>,
    /// Present while the keyword draft is being edited.
    pub search_bar: Option<SearchBarInfo>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// One table column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: &'static str,
    /// Whether the sort keys currently act on this column.
    pub is_focused: bool,
    /// `▲` or `▼` when the view is sorted by this column.
    pub sort_arrow: Option<char>,
}

/// Display information for a single product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub title: String,
    /// Character ranges of `title` matching the committed keyword.
    ///
    /// Each tuple is `(start, end)` in char indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
    pub price: String,
    pub category: String,
    pub description: String,
    /// Sanitized image URL or the placeholder.
    pub image_url: String,
    /// Alternating row shading.
    pub is_striped: bool,
    /// Row under the cursor. Takes precedence over striping and highlights.
    pub is_selected: bool,
}

/// Pager line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// "Showing S of T results".
    pub range_label: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Kind of full-screen status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Empty,
    Error,
}

/// Message shown instead of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusScreen {
    pub kind: StatusKind,
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Uncommitted keyword draft.
    pub query: String,
}
