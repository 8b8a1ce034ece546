//! Composable UI component renderers.
//!
//! Each component is responsible for rendering one part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with recipe counts
//! - [`footer`]: Keybinding hints, status message or delete prompt
//! - [`search`]: Search input box (border, query text)
//! - [`list`]: Compact recipe list with highlights
//! - [`detail`]: Full card of the selected recipe
//! - [`form`]: New-recipe form
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! - [`render_list_mode`]: Header + optional `SearchBar` + List + Detail + Footer
//! - [`render_form_mode`]: Header + Form + Footer

pub(crate) mod detail;
mod empty;
mod footer;
mod form;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormView, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use list::render_list_rows;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the bottom border and footer; returns the last body row.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> usize {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
    border_row.saturating_sub(1)
}

/// Renders the list layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, search mode only]
/// [List Rows]
/// [Separator]
/// [Detail pane, fills remaining space, scrolled by `detail_scroll`]
/// [Border]
/// [Footer]
/// ```
///
/// With an empty state the list and detail pane are replaced by the message.
pub fn render_list_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let last_body_row = render_bottom(vm, theme, cols, rows);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
        return;
    }

    current_row = render_list_rows(current_row, &vm.cards, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(card) = vm.selected_card() {
        let height = (last_body_row + 1).saturating_sub(current_row);
        render_detail(current_row, height, vm.detail_scroll, card, theme, cols);
    }
}

/// Renders the form layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Form fields, scrolled to keep focus visible]
/// [Border]
/// [Footer]
/// ```
pub fn render_form_mode(vm: &UIViewModel, form: &FormView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let last_body_row = render_bottom(vm, theme, cols, rows);
    let height = (last_body_row + 1).saturating_sub(current_row);
    render_form(current_row, height, form, theme, cols);
}
