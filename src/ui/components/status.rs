//! Full-screen status message renderer (loading, no results, fetch failure).

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusScreen};

/// Row of the primary message.
const MESSAGE_ROW: usize = 6;

/// Prints `text` centered on `row`, padded to the full width.
fn render_centered(row: usize, text: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", text.chars().take(len).collect::<String>());
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders a two-line centered status message starting at `start_row`.
///
/// The message color depends on the kind: errors use `error_fg`, everything
/// else `empty_state_fg`. The subtitle is dimmed and omitted when empty.
pub fn render_status_screen(start_row: usize, status: &StatusScreen, theme: &Theme, cols: usize) {
    let color = match status.kind {
        StatusKind::Error => &theme.colors.error_fg,
        StatusKind::Loading | StatusKind::Empty => &theme.colors.empty_state_fg,
    };

    print!("{}", Theme::fg(color));
    if status.kind == StatusKind::Error {
        print!("{}", Theme::bold());
    }
    render_centered(start_row.max(MESSAGE_ROW), &status.message, cols);
    print!("{}", Theme::reset());

    if !status.subtitle.is_empty() {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        render_centered(start_row.max(MESSAGE_ROW) + 1, &status.subtitle, cols);
        print!("{}", Theme::reset());
    }
}
