//! Footer component renderer.
//!
//! This module renders the footer line: keybinding hints, a one-shot status
//! message, or the delete confirmation prompt.

use crate::ui::helpers::{position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at the specified row.
///
/// Hints and status messages are dimmed; a prompt is bold in the error color so
/// it cannot be missed. Text wider than the terminal is truncated.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.text, cols);

    let text_len = width_of(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    if footer.is_prompt {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
