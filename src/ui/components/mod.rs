//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the product count
//! - [`search`]: Keyword input box
//! - [`table`]: Product table (TITLE, PRICE, CATEGORY, DESCRIPTION, IMAGE)
//! - [`pager`]: Prev/next controls, page position and range label
//! - [`status`]: Loading, empty and error screens
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Table Headers]          or  [Status message]
//! [Table Rows]
//! [Pager]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod header;
mod pager;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use pager::render_pager;
use search::render_search_bar;
use status::render_status_screen;
use table::{render_table_headers, render_table_rows};

/// Blank line, header, border and column headers.
const CHROME_ABOVE_TABLE: usize = 4;
const SEARCH_BAR_HEIGHT: usize = 3;
/// Pager, border, footer and the unused last line.
const CHROME_BELOW_TABLE: usize = 4;

/// Number of product rows that fit between the column headers and the pager.
///
/// # Example
///
/// ```rust
/// use zshelf::ui::components::table_body_rows;
///
/// assert_eq!(table_body_rows(40, false), 32);
/// assert_eq!(table_body_rows(40, true), 29);
/// assert_eq!(table_body_rows(5, false), 0);
/// ```
#[must_use]
pub const fn table_body_rows(rows: usize, search_visible: bool) -> usize {
    let above = if search_visible {
        CHROME_ABOVE_TABLE + SEARCH_BAR_HEIGHT
    } else {
        CHROME_ABOVE_TABLE
    };
    rows.saturating_sub(above + CHROME_BELOW_TABLE)
}

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
///
/// `vm.rows` is expected to hold at most [`table_body_rows`] entries; the view
/// model windows the page to that height. Extra rows are not drawn.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pager_row = border_row.saturating_sub(1);

    if let Some(status) = &vm.status_screen {
        render_status_screen(current_row + 1, status, theme, cols);
    } else {
        current_row = render_table_headers(current_row, &vm.columns, theme, cols);
        let max_rows = table_body_rows(rows, vm.search_bar.is_some());
        render_table_rows(current_row, &vm.rows, theme, cols, max_rows);

        if let Some(pager) = &vm.pager {
            render_pager(pager_row, pager, theme, cols);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
