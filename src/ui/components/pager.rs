//! Pager line renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders `‹ Prev  Page X / Y  Next ›` centered, followed by the range label
/// on the right edge.
///
/// Buttons that cannot be used on the current page are dimmed.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let prev = "‹ Prev";
    let next = "Next ›";
    let page = format!("Page {} / {}", pager.current_page, pager.total_pages);
    let controls_len = prev.chars().count() + next.chars().count() + page.chars().count() + 4;
    let label_len = pager.range_label.chars().count();

    let padding = cols.saturating_sub(controls_len) / 2;
    let label_fits = padding + controls_len + label_len + 1 <= cols;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print_button(prev, pager.has_prev, theme);
    print!("  ");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{page}");
    print!("{}", Theme::reset());
    print!("  ");
    print_button(next, pager.has_next, theme);

    let mut used = padding + controls_len;
    if label_fits {
        let gap = cols.saturating_sub(used + label_len);
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", pager.range_label);
        print!("{}", Theme::reset());
        used += gap + label_len;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn print_button(label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!("{}", Theme::fg(&theme.colors.header_fg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{label}");
    print!("{}", Theme::reset());
}
