//! Table component renderer.
//!
//! Renders the visible rows of the current page as a table of up to five
//! columns: TITLE, PRICE, CATEGORY, DESCRIPTION and IMAGE. Odd rows get the
//! stripe background, prices are colored, and the committed keyword is
//! highlighted inside titles.
//!
//! Columns give way in a fixed order as the pane narrows: the image column
//! shrinks and then disappears, then the title shrinks, then the category
//! shrinks and disappears. The description only appears when there is room to
//! spare. A row never exceeds the pane width.

use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, ProductRow};

const TITLE_WIDTH: usize = 28;
const MIN_TITLE_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 14;
const MIN_CATEGORY_WIDTH: usize = 8;
const IMAGE_WIDTH: usize = 32;
const MIN_IMAGE_WIDTH: usize = 16;
/// One space between adjacent columns.
const GAP: usize = 1;
/// The description column is dropped below this width.
const MIN_DESCRIPTION_WIDTH: usize = 8;

/// Column widths for one terminal width, in display order. Zero means hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    title: usize,
    price: usize,
    category: usize,
    description: usize,
    image: usize,
}

impl ColumnWidths {
    fn for_width(cols: usize) -> Self {
        let mut widths = Self {
            title: TITLE_WIDTH,
            price: PRICE_WIDTH,
            category: CATEGORY_WIDTH,
            description: 0,
            image: IMAGE_WIDTH,
        };

        let excess = widths.excess(cols);
        widths.image -= excess.min(IMAGE_WIDTH - MIN_IMAGE_WIDTH);
        if widths.excess(cols) > 0 {
            widths.image = 0;
        }

        let excess = widths.excess(cols);
        widths.title -= excess.min(TITLE_WIDTH - MIN_TITLE_WIDTH);

        let excess = widths.excess(cols);
        widths.category -= excess.min(CATEGORY_WIDTH - MIN_CATEGORY_WIDTH);
        if widths.excess(cols) > 0 {
            widths.category = 0;
        }

        if widths.excess(cols) > 0 {
            // Title alone, or nothing at all.
            widths.price = 0;
            widths.title = cols;
            return widths;
        }

        let spare = cols - widths.total();
        if spare >= MIN_DESCRIPTION_WIDTH + GAP {
            widths.description = spare - GAP;
        } else {
            widths.title += spare;
        }
        widths
    }

    fn as_array(self) -> [usize; 5] {
        [self.title, self.price, self.category, self.description, self.image]
    }

    /// Width of a rendered row: visible columns plus the gaps between them.
    fn total(self) -> usize {
        let visible = self.as_array().into_iter().filter(|w| *w > 0);
        let (count, sum) = visible.fold((0usize, 0usize), |(count, sum), w| (count + 1, sum + w));
        sum + GAP * count.saturating_sub(1)
    }

    fn excess(self, cols: usize) -> usize {
        self.total().saturating_sub(cols)
    }
}

/// Renders the column header row and returns the next row.
///
/// The focused column is underlined in `column_focus_fg`; the sorted column
/// carries its direction arrow.
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    let widths = ColumnWidths::for_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    let mut first = true;
    for (column, width) in columns.iter().zip(widths.as_array()) {
        if width == 0 {
            continue;
        }
        if !first {
            print!("{}", " ".repeat(GAP));
        }
        first = false;

        let label = match column.sort_arrow {
            Some(arrow) => format!("{} {arrow}", column.label),
            None => column.label.to_string(),
        };
        if column.is_focused {
            print!("{}", Theme::underline());
            print!("{}", Theme::fg(&theme.colors.column_focus_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.header_fg));
        }
        print!("{}", fit(&label, width));
        print!("{}", Theme::reset());
        print!("{}", Theme::bold());
    }
    print!("{}", " ".repeat(cols.saturating_sub(widths.total())));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders up to `max_rows` product rows starting at `row`.
///
/// Returns the next free row.
pub fn render_table_rows(row: usize, items: &[ProductRow], theme: &Theme, cols: usize, max_rows: usize) -> usize {
    let widths = ColumnWidths::for_width(cols);
    let mut current_row = row;
    for item in items.iter().take(max_rows) {
        current_row = render_table_row(current_row, item, theme, widths, cols);
    }
    current_row
}

/// Renders one product row padded to the full terminal width.
///
/// # Styling Precedence
///
/// 1. Selection colors (if `is_selected`)
/// 2. Keyword highlight and price color (unless selected)
/// 3. Stripe background and normal text
///
/// The row's base style is re-applied after every colored cell, so highlights
/// and prices do not break the stripe.
fn render_table_row(row: usize, item: &ProductRow, theme: &Theme, widths: ColumnWidths, cols: usize) -> usize {
    let base_style = if item.is_selected {
        format!("{}{}", Theme::bg(&theme.colors.selection_bg), Theme::fg(&theme.colors.selection_fg))
    } else if item.is_striped {
        format!("{}{}", Theme::bg(&theme.colors.stripe_bg), Theme::fg(&theme.colors.text_normal))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base_style}");

    let mut first = true;
    let mut gap = || {
        if !first {
            print!("{}", " ".repeat(GAP));
        }
        first = false;
    };

    if widths.title > 0 {
        gap();
        let title = fit(&item.title, widths.title);
        if item.is_selected {
            print!("{title}");
        } else {
            let ranges = helpers::clip_ranges(&item.highlight_ranges, item.title.chars().count(), widths.title);
            helpers::render_highlighted_text(&title, &ranges, theme, &base_style);
        }
    }

    if widths.price > 0 {
        gap();
        if item.is_selected {
            print!("{}", fit(&item.price, widths.price));
        } else {
            print!("{}", Theme::fg(&theme.colors.price_fg));
            print!("{}", fit(&item.price, widths.price));
            print!("{}", Theme::reset());
            print!("{base_style}");
        }
    }

    if widths.category > 0 {
        gap();
        print!("{}", fit(&item.category, widths.category));
    }

    if widths.description > 0 {
        gap();
        if item.is_selected {
            print!("{}", fit(&item.description, widths.description));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", fit(&item.description, widths.description));
            print!("{}", Theme::reset());
            print!("{base_style}");
        }
    }

    if widths.image > 0 {
        gap();
        print!("{}", fit(&item.image_url, widths.image));
    }

    print!("{}", " ".repeat(cols.saturating_sub(widths.total())));
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_takes_the_remaining_width() {
        let widths = ColumnWidths::for_width(120);
        assert_eq!(widths.description, 120 - (28 + 10 + 14 + 32 + 4));
        assert_eq!(widths.total(), 120);
    }

    #[test]
    fn narrow_terminal_drops_description() {
        assert_eq!(ColumnWidths::for_width(80).description, 0);
        assert_eq!(ColumnWidths::for_width(0).description, 0);
    }

    #[test]
    fn rows_never_exceed_the_pane() {
        for cols in 40..=200 {
            let widths = ColumnWidths::for_width(cols);
            assert!(widths.total() <= cols, "cols {cols}: {widths:?}");
            assert!(widths.title >= MIN_TITLE_WIDTH, "cols {cols}: {widths:?}");
            assert_eq!(widths.price, PRICE_WIDTH, "cols {cols}");
        }
    }

    #[test]
    fn standard_pane_shrinks_the_image_column() {
        let widths = ColumnWidths::for_width(80);
        assert_eq!(widths.image, 80 - (28 + 10 + 14) - 3 * GAP);
        assert_eq!(widths.total(), 80);
    }

    #[test]
    fn columns_give_way_in_order() {
        let widths = ColumnWidths::for_width(60);
        assert_eq!(widths.image, 0);
        assert_eq!(widths.category, CATEGORY_WIDTH);

        let widths = ColumnWidths::for_width(40);
        assert_eq!(widths.image, 0);
        assert_eq!(widths.title, MIN_TITLE_WIDTH + 2);
        assert!(widths.category >= MIN_CATEGORY_WIDTH);
        assert_eq!(widths.total(), 40);

        let widths = ColumnWidths::for_width(20);
        assert_eq!((widths.category, widths.price, widths.title), (0, 0, 20));
        assert_eq!(widths.total(), 20);
    }
}
