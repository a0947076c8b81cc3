//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning,
//! fixed-width cell fitting, keyword highlighting and image URL cleanup.
//! Everything here operates on character indices, never byte offsets.

use crate::ui::theme::Theme;

/// Shown when a product has no usable image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/100?text=No+Image";

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Truncated text ends in `…` so the cut is visible.
///
/// # Example
///
/// ```rust
/// use zshelf::ui::helpers::fit;
///
/// assert_eq!(fit("mug", 5), "mug  ");
/// assert_eq!(fit("wooden chair", 6), "woode…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Picks a displayable URL from a product's raw image strings.
///
/// Only the first entry is considered. Values that arrive as a stringified
/// JSON array (`["https://..."]`) are unwrapped; anything not starting with
/// `http` falls back to [`PLACEHOLDER_IMAGE_URL`].
///
/// # Example
///
/// ```rust
/// use zshelf::ui::helpers::{sanitize_image_url, PLACEHOLDER_IMAGE_URL};
///
/// let raw = vec![r#"["https://i.imgur.com/a.jpeg"]"#.to_string()];
/// assert_eq!(sanitize_image_url(&raw), "https://i.imgur.com/a.jpeg");
/// assert_eq!(sanitize_image_url(&[]), PLACEHOLDER_IMAGE_URL);
/// ```
#[must_use]
pub fn sanitize_image_url(images: &[String]) -> String {
    let Some(first) = images.first() else {
        return PLACEHOLDER_IMAGE_URL.to_string();
    };

    let mut raw = first.clone();
    if raw.starts_with("[\"") && raw.ends_with("\"]") {
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut urls) if !urls.is_empty() => raw = urls.swap_remove(0),
            Ok(_) => {}
            Err(e) => tracing::trace!(error = %e, "image value looked like an array but is not JSON"),
        }
    }

    if raw.starts_with("http") {
        raw
    } else {
        PLACEHOLDER_IMAGE_URL.to_string()
    }
}

/// Finds the first case-insensitive occurrence of `needle` in `title`.
///
/// `needle` must already be lowercased. Returns an empty vector when there is
/// no match, or when lowercasing changes the title's character count (the
/// indices would not line up).
#[must_use]
pub fn keyword_highlight_ranges(title: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let lower = title.to_lowercase();
    if lower.chars().count() != title.chars().count() {
        return vec![];
    }

    lower.find(needle).map_or_else(Vec::new, |byte_start| {
        let start = lower[..byte_start].chars().count();
        vec![(start, start + needle.chars().count())]
    })
}

/// Clips highlight ranges to what survives [`fit`] at `width`.
///
/// A title longer than `width` keeps `width - 1` characters plus `…`; ranges
/// are cut at that point so the ellipsis itself is never highlighted.
///
/// # Example
///
/// ```rust
/// use zshelf::ui::helpers::clip_ranges;
///
/// assert_eq!(clip_ranges(&[(2, 9)], 12, 6), vec![(2, 5)]);
/// assert_eq!(clip_ranges(&[(6, 9)], 12, 6), vec![]);
/// assert_eq!(clip_ranges(&[(2, 9)], 9, 12), vec![(2, 9)]);
/// ```
#[must_use]
pub fn clip_ranges(ranges: &[(usize, usize)], text_len: usize, width: usize) -> Vec<(usize, usize)> {
    let limit = if text_len > width { width.saturating_sub(1) } else { text_len };
    ranges
        .iter()
        .map(|&(start, end)| (start, end.min(limit)))
        .filter(|&(start, end)| start < end)
        .collect()
}

/// Prints `text` with the given character ranges highlighted.
///
/// `restore` is re-emitted after every highlighted section so the row's own
/// colors (zebra stripe, normal text) resume. Ranges past the end of `text`
/// are clipped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipped_ranges_stop_before_the_ellipsis() {
        let title = "Handmade Leather Wallet";
        let ranges = keyword_highlight_ranges(title, "wallet");
        assert_eq!(ranges, vec![(17, 23)]);

        let width = 20;
        let clipped = clip_ranges(&ranges, title.chars().count(), width);
        assert_eq!(clipped, vec![(17, 19)]);
        assert_eq!(fit(title, width).chars().nth(19), Some('…'));

        assert!(clip_ranges(&[(0, 4)], 10, 0).is_empty());
    }

    #[test]
    fn fit_handles_multibyte_text() {
        assert_eq!(fit("café", 6), "café  ");
        assert_eq!(fit("crème brûlée", 5), "crèm…");
        assert_eq!(fit("anything", 0), "");
    }

    #[test]
    fn plain_http_urls_pass_through() {
        let raw = vec!["https://i.imgur.com/x.png".to_string(), "ignored".to_string()];
        assert_eq!(sanitize_image_url(&raw), "https://i.imgur.com/x.png");
    }

    #[test]
    fn non_http_values_use_placeholder() {
        for value in ["/relative/img.png", "", "ftp://host/a.png", "[\"/local.png\"]"] {
            assert_eq!(
                sanitize_image_url(&[value.to_string()]),
                PLACEHOLDER_IMAGE_URL,
                "value {value:?}"
            );
        }
    }

    #[test]
    fn broken_array_string_is_kept_raw() {
        // Looks like an array but the inner quoting is broken; the raw value
        // does not start with http either.
        let raw = vec![r#"["https://a.png"", "x"]"#.to_string()];
        assert_eq!(sanitize_image_url(&raw), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn empty_stringified_array_falls_back() {
        assert_eq!(sanitize_image_url(&["[\"\"]".to_string()]), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn highlight_range_is_in_chars() {
        assert_eq!(keyword_highlight_ranges("Banana", "an"), vec![(1, 3)]);
        assert_eq!(keyword_highlight_ranges("Épée Noire", "noire"), vec![(5, 10)]);
        assert!(keyword_highlight_ranges("Apple", "an").is_empty());
        assert!(keyword_highlight_ranges("Apple", "").is_empty());
    }
}
