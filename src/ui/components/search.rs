//! Recipe filter box.
//!
//! A framed, single-line input above the list. While the query is empty it
//! shows what the filter looks at; while typing, a cursor follows the query.

use crate::ui::helpers::{position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Columns left blank on either side of the box.
const MARGIN: usize = 5;

const LABEL: &str = " Filter: ";
const HINT: &str = "title, culture or dietary tag";

/// Draws the three-row filter box at `row` and returns the row below it.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let c = &theme.colors;
    let inner = cols.saturating_sub(MARGIN * 2).saturating_sub(2);
    let margin = " ".repeat(MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(&c.search_bar_border), "─".repeat(inner), Theme::reset());

    let room = inner.saturating_sub(width_of(LABEL) + 1);
    let (text, color) = if search.query.is_empty() && search.typing {
        (truncate(HINT, room), &c.text_dim)
    } else {
        // long queries show their tail
        let skip = width_of(&search.query).saturating_sub(room);
        (search.query.chars().skip(skip).collect::<String>(), &c.text_normal)
    };
    let cursor = if search.typing { "▏" } else { " " };
    let used = width_of(LABEL) + width_of(&text) + 1;

    position_cursor(row + 1, 1);
    print!("{margin}{}│", Theme::fg(&c.search_bar_border));
    print!("{}{LABEL}{}{text}", Theme::fg(&c.text_dim), Theme::fg(color));
    print!("{}{cursor}", Theme::fg(&c.focus_fg));
    print!("{}", " ".repeat(inner.saturating_sub(used)));
    print!("{}│{}", Theme::fg(&c.search_bar_border), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(&c.search_bar_border), "─".repeat(inner), Theme::reset());

    row + 3
}
