//! Entry point for drawing the plugin pane.
//!
//! The state is first reduced to a [`UIViewModel`] for the current pane size;
//! the form layout is used while a recipe is being written, the list-and-card
//! layout otherwise (including search and the delete prompt).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Prints the whole pane as ANSI text.
///
/// Nothing is cleared first; Zellij repaints the pane on each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm: UIViewModel = state.compute_viewmodel(rows, cols);

    match &vm.form {
        Some(form) => components::render_form_mode(&vm, form, &state.theme, cols, rows),
        None => components::render_list_mode(&vm, &state.theme, cols, rows),
    }
}
