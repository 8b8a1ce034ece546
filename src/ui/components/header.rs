//! Title bar: recipe counts in the list, "New Recipe" in the form.

use crate::ui::helpers::{position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the centered, bold title across the full width and returns the next row.
///
/// The theme's optional header background fills the whole line.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let left = cols.saturating_sub(width_of(&title)) / 2;
    let right = cols.saturating_sub(left + width_of(&title));

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{title}{}", " ".repeat(left), " ".repeat(right));
    print!("{}", Theme::reset());

    row + 1
}
