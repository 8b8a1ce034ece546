//! Recipe list component renderer.
//!
//! This module renders the compact one-line-per-recipe list above the detail
//! pane. Each row shows the favorite star, the title with search highlights,
//! and the culture and difficulty.

use crate::ui::helpers::{self, position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::RecipeCard;

/// Columns taken by the star and its spacing.
const STAR_WIDTH: usize = 3;

/// Renders all list rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_list_rows(row: usize, cards: &[RecipeCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_list_row(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single recipe row.
///
/// # Layout
///
/// ```text
///  ★ Title with highlights            Moroccan · Medium [padding]
/// ```
///
/// The meta column is right-aligned; the title is truncated to make room for it.
fn render_list_row(row: usize, card: &RecipeCard, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let restore = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    print!("{restore}");

    print!(" ");
    if card.favorite && !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.favorite_fg));
    }
    print!("{} ", card.favorite_symbol());
    print!("{restore}");

    let meta = if card.difficulty.is_empty() {
        card.culture.clone()
    } else {
        format!("{} · {}", card.culture, card.difficulty)
    };
    let meta_width = width_of(&meta) + 1;

    let title_room = cols.saturating_sub(STAR_WIDTH + meta_width + 2);
    let title = truncate(&card.title, title_room);
    if card.is_selected {
        print!("{}", Theme::bold());
    }
    helpers::render_highlighted_text(&title, &card.highlight_ranges, theme, card.is_selected);
    print!("{}{restore}", Theme::reset());

    let used = STAR_WIDTH + width_of(&title);
    let gap = cols.saturating_sub(used + meta_width);
    print!("{}", " ".repeat(gap));

    if cols > used + meta_width {
        if !card.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{meta} ");
    }

    print!("{}", Theme::reset());
    row + 1
}
