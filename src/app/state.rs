//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the catalog
//! (dataset, view, filter and sort), the page position, the load lifecycle and
//! the transient input state. The event handler mutates it; the renderer only
//! reads the [`UIViewModel`] computed from it.
//!
//! # Example
//!
//! ```rust
//! use zshelf::{AppState, Config, Product, Theme};
//! use zshelf::catalog::SortDirection;
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! state.load_products(vec![
//!     Product::new(1, "Apple", 10.0),
//!     Product::new(2, "Banana", 5.0),
//! ]);
//! state.sort_column("price", SortDirection::Ascending);
//!
//! let vm = state.compute_viewmodel(24);
//! assert_eq!(vm.rows[0].title, "Banana");
//! ```

use super::modes::{Column, InputMode, LoadStatus};
use crate::catalog::{get_page, DataStore, PageState, SortDirection, SortKey};
use crate::domain::Product;
use crate::ui::components::table_body_rows;
use crate::ui::helpers::{keyword_highlight_ranges, sanitize_image_url};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, FooterInfo, HeaderInfo, PagerInfo, ProductRow, SearchBarInfo, StatusKind,
    StatusScreen, UIViewModel,
};
use crate::Config;

/// Message shown when the initial fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dataset plus the filtered and sorted view.
    pub store: DataStore,

    /// Current page and page size over `store.view()`.
    pub page: PageState,

    /// Row under the cursor, relative to the start of the current page.
    ///
    /// The table scrolls to keep it visible when the page is taller than the
    /// pane.
    pub row_cursor: usize,

    /// Discrete page sizes offered by `+`/`-`, ascending and without duplicates.
    pub page_sizes: Vec<usize>,

    pub input_mode: InputMode,

    /// Keyword being typed in search mode. Only applied on commit.
    pub search_draft: String,

    /// Column the sort keys act on.
    pub focused_column: Column,

    pub load_status: LoadStatus,

    /// Product listing URL.
    pub endpoint: String,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state in [`LoadStatus::Loading`].
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            store: DataStore::new(),
            page: PageState::new(config.page_size),
            row_cursor: 0,
            page_sizes: config.page_sizes.clone(),
            input_mode: InputMode::Normal,
            search_draft: String::new(),
            focused_column: Column::Title,
            load_status: LoadStatus::Loading,
            endpoint: config.endpoint.clone(),
            theme,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_status == LoadStatus::Loading
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.load_status == LoadStatus::Ready
    }

    /// Installs a freshly fetched dataset and makes the listing interactive.
    pub fn load_products(&mut self, products: Vec<Product>) {
        self.store.load(products);
        self.page.reset();
        self.row_cursor = 0;
        self.input_mode = InputMode::Normal;
        self.search_draft.clear();
        self.load_status = LoadStatus::Ready;
    }

    /// Enters the terminal failure state.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(reason = %reason, "product load failed");
        self.load_status = LoadStatus::Failed { reason };
    }

    /// Enters search mode with the draft seeded from the committed keyword.
    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_draft = self.store.filter().keyword().to_string();
    }

    /// Applies the draft as the new filter and leaves search mode.
    ///
    /// The active sort is re-applied to the rebuilt view and the page goes
    /// back to 1.
    pub fn commit_search(&mut self) {
        let keyword = std::mem::take(&mut self.search_draft);
        self.input_mode = InputMode::Normal;
        self.apply_keyword(keyword);
    }

    /// Leaves search mode, dropping the draft.
    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_draft.clear();
    }

    /// Removes an active keyword. Returns `false` when there was none.
    pub fn clear_filter(&mut self) -> bool {
        if !self.store.filter().is_active() {
            return false;
        }
        self.apply_keyword(String::new());
        true
    }

    fn apply_keyword(&mut self, keyword: String) {
        let _span = tracing::debug_span!("apply_keyword", keyword = %keyword).entered();
        self.store.set_filter(keyword);
        self.page.reset();
        self.row_cursor = 0;
    }

    /// Sorts the view by a named column.
    ///
    /// Names other than `price` and `title` select [`SortKey::None`]: the view
    /// keeps its current order. The page is left as is.
    pub fn sort_column(&mut self, column: &str, direction: SortDirection) {
        let key = SortKey::from_column(column);
        let _span = tracing::debug_span!("sort_column", column, key = ?key, %direction).entered();
        self.store.set_sort(key, direction);
    }

    /// Sorts by the focused column.
    pub fn sort_focused(&mut self, direction: SortDirection) {
        self.sort_column(self.focused_column.name(), direction);
    }

    pub fn focus_next_column(&mut self) {
        self.focused_column = self.focused_column.next();
    }

    pub fn focus_prev_column(&mut self) {
        self.focused_column = self.focused_column.prev();
    }

    /// Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        let moved = self.page.next_page(self.store.view().len());
        if moved {
            self.row_cursor = 0;
        }
        moved
    }

    /// Returns `false` on page 1.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.page.prev_page();
        if moved {
            self.row_cursor = 0;
        }
        moved
    }

    /// Number of products on the current page.
    fn page_len(&self) -> usize {
        get_page(self.store.view(), &self.page).items.len()
    }

    /// Moves the cursor one row down within the page. Returns `false` on the
    /// page's last row.
    pub fn cursor_down(&mut self) -> bool {
        if self.row_cursor + 1 >= self.page_len() {
            return false;
        }
        self.row_cursor += 1;
        true
    }

    /// Moves the cursor one row up. Returns `false` on the page's first row.
    pub fn cursor_up(&mut self) -> bool {
        if self.row_cursor == 0 {
            return false;
        }
        self.row_cursor -= 1;
        true
    }

    /// Switches to `size` and resets to page 1.
    ///
    /// Returns `false` for zero or for the size already in use; neither
    /// touches the current page.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 || size == self.page.page_size() {
            return false;
        }
        tracing::debug!(from = self.page.page_size(), to = size, "page size changed");
        self.page.set_page_size(size);
        self.row_cursor = 0;
        true
    }

    /// Moves to the next larger configured page size.
    pub fn page_size_up(&mut self) -> bool {
        let current = self.page.page_size();
        match self.page_sizes.iter().copied().find(|s| *s > current) {
            Some(size) => self.set_page_size(size),
            None => false,
        }
    }

    /// Moves to the next smaller configured page size.
    pub fn page_size_down(&mut self) -> bool {
        let current = self.page.page_size();
        match self.page_sizes.iter().rev().copied().find(|s| *s < current) {
            Some(size) => self.set_page_size(size),
            None => false,
        }
    }

    /// Computes the view model for a pane `rows` lines tall.
    ///
    /// # Windowing Algorithm
    ///
    /// A page taller than the table area is shown through a window of
    /// [`table_body_rows`] rows:
    ///
    /// 1. Center the window on the cursor
    /// 2. Pull it back if it would run past the end of the page
    ///
    /// The range label then counts only the drawn rows and names their
    /// positions, and the pager is shown even for a single page.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let status_screen = self.compute_status_screen();
        let (rows, pager) = if status_screen.is_some() {
            (vec![], None)
        } else {
            self.compute_page(rows)
        };

        UIViewModel {
            header: self.compute_header(),
            columns: self.compute_columns(),
            rows,
            pager,
            footer: self.compute_footer(),
            status_screen,
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_page(&self, rows: usize) -> (Vec<ProductRow>, Option<PagerInfo>) {
        let page = get_page(self.store.view(), &self.page);
        let needle = self.store.filter().needle();

        let page_len = page.items.len();
        let available_rows = table_body_rows(rows, self.input_mode == InputMode::Search).max(1);
        let cursor = self.row_cursor.min(page_len.saturating_sub(1));

        let mut visible_start = cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(page_len);
        if visible_end - visible_start < available_rows && page_len >= available_rows {
            visible_start = visible_end - available_rows;
        }
        let is_windowed = visible_end - visible_start < page_len;

        let rows = page.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, product)| (visible_start + relative_idx, product))
            .map(|(i, product)| ProductRow {
                title: product.title.clone(),
                highlight_ranges: needle
                    .as_deref()
                    .map_or_else(Vec::new, |n| keyword_highlight_ranges(&product.title, n)),
                price: product.display_price(),
                category: product.category_name().to_string(),
                description: product.description_preview(),
                image_url: sanitize_image_url(&product.images),
                is_striped: i % 2 == 1,
                is_selected: i == cursor,
            })
            .collect();

        let range_label = if is_windowed {
            let first = (page.current_page - 1) * self.page.page_size() + visible_start + 1;
            format!(
                "Showing {} of {} results · rows {first}–{}",
                visible_end - visible_start,
                page.range.total,
                first + (visible_end - visible_start) - 1
            )
        } else {
            format!("Showing {} results", page.range)
        };

        let pager = (page.total_pages > 1 || is_windowed).then(|| PagerInfo {
            current_page: page.current_page,
            total_pages: page.total_pages,
            has_prev: self.page.has_prev(),
            has_next: self.page.has_next(self.store.view().len()),
            range_label,
        });

        (rows, pager)
    }

    fn compute_status_screen(&self) -> Option<StatusScreen> {
        match &self.load_status {
            LoadStatus::Loading => Some(StatusScreen {
                kind: StatusKind::Loading,
                message: "Loading products...".to_string(),
                subtitle: self.endpoint.clone(),
            }),
            LoadStatus::Failed { reason } => Some(StatusScreen {
                kind: StatusKind::Error,
                message: FETCH_FAILED_MESSAGE.to_string(),
                subtitle: reason.clone(),
            }),
            LoadStatus::Ready if self.store.view().is_empty() => {
                let subtitle = if self.store.is_empty() {
                    "The catalog is empty.".to_string()
                } else {
                    format!(
                        "No titles contain \"{}\". Press Esc to clear the filter.",
                        self.store.filter().keyword().trim()
                    )
                };
                Some(StatusScreen {
                    kind: StatusKind::Empty,
                    message: "No products found.".to_string(),
                    subtitle,
                })
            }
            LoadStatus::Ready => None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let mut title = format!(
            " Products ({}) · {} per page",
            self.store.view().len(),
            self.page.page_size()
        );
        if self.store.filter().is_active() {
            title.push_str(&format!(" · filter: \"{}\"", self.store.filter().keyword().trim()));
        }
        title.push(' ');
        HeaderInfo { title }
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        let sort = self.store.sort();
        Column::ALL
            .into_iter()
            .map(|column| ColumnHeader {
                label: column.label(),
                is_focused: column == self.focused_column,
                sort_arrow: (sort.is_active() && SortKey::from_column(column.name()) == sort.key)
                    .then(|| sort.direction.arrow()),
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Enter: apply  ESC: cancel  Type to edit keyword".to_string(),
            InputMode::Normal if self.store.filter().is_active() => {
                "/: search  ESC: clear filter  j/k: row  h/l: column  a/d: sort  n/p: page  +/-: page size  q: quit"
                    .to_string()
            }
            InputMode::Normal => {
                "/: search  j/k: row  h/l: column  a/d: sort  n/p: page  +/-: page size  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.input_mode == InputMode::Search).then(|| SearchBarInfo {
            query: self.search_draft.clone(),
        })
    }
}
