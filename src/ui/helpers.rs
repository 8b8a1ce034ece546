//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor placement, search match highlighting, terminal hyperlinks
//! and width-aware truncation.
//!
//! All width calculations count characters, not bytes, so recipe titles with
//! accents or non-Latin scripts line up.
//!
//! # Example
//!
//! ```rust
//! use recipebox::ui::helpers::{hyperlink, truncate};
//!
//! assert_eq!(truncate("Tagine aux pruneaux", 9), "Tagine a…");
//! assert!(hyperlink("Mai", "https://example.org").contains("https://example.org"));
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. When `is_selected`
/// is `true` the selection colors are re-applied after each highlight so the
/// row background stays intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.max(current_pos)..end.max(start)].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        }

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Wraps `label` in an OSC 8 hyperlink pointing at `url`.
///
/// Terminals without OSC 8 support show the label only.
#[must_use]
pub fn hyperlink(label: &str, url: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\")
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Number of terminal columns `text` occupies, ignoring wide glyphs.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Word-wraps `text` into lines of at most `width` characters.
///
/// Runs of whitespace collapse to one space. A word longer than `width` is split
/// across lines. Always returns at least one (possibly empty) line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        if chars.is_empty() {
            continue;
        }

        if current_width > 0 && current_width + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current_width += chars.len();
        current.extend(chars);
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Phở bò", 10), "Phở bò");
        assert_eq!(truncate("Phở bò", 4), "Phở…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
    }

    #[test]
    fn hyperlink_wraps_label() {
        let link = hyperlink("Mai", "https://example.org/pho");
        assert!(link.starts_with("\u{1b}]8;;https://example.org/pho"));
        assert!(link.contains("Mai"));
        assert!(link.ends_with("\u{1b}]8;;\u{1b}\\"));
    }

    #[test]
    fn width_ignores_bytes() {
        assert_eq!(width_of("Crêpe"), 5);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Brown the lamb in olive oil", 12),
            vec!["Brown the", "lamb in", "olive oil"]
        );
        assert_eq!(wrap("short", 20), vec!["short"]);
        assert_eq!(wrap("", 20), vec![""]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("a abcdefgh b", 3), vec!["a", "abc", "def", "gh", "b"]);
        assert_eq!(wrap("Phở  bò", 3), vec!["Phở", "bò"]);
    }
}
