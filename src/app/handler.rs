//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! plugin feedback, translating them into state changes and action sequences.
//! It is the primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim, already mapped from keys per input mode
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Navigation and form edits mutate `AppState` directly; anything touching the
//!    collection is resolved to a [`Command`] and run through [`dispatch`]
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Detail**: `ScrollDetailDown`, `ScrollDetailUp`, `PageDetailDown`, `PageDetailUp`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Collection**: `ToggleFavorite`, `RequestDelete`, `ConfirmDelete`, `CancelDelete`, `Export`
//! - **Form**: `NewRecipe`, `NextField`, `PrevField`, `PickerLeft`, `PickerRight`,
//!   `FormEnter`, `SubmitForm`, `CancelForm`
//! - **Feedback**: `ExportFinished`
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::{AppState, handler::{Event, handle_event}};
//! use recipebox::domain::Vocabulary;
//! use recipebox::storage::{MemoryStorage, RecipeStore};
//! use recipebox::Theme;
//!
//! let store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
//! let mut state = AppState::new(store, Vocabulary::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), recipebox::RecipeBoxError>(())
//! ```

use super::commands::{dispatch, Command};
use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::{RecipeBoxError, Result};

/// Events triggered by user input or by the plugin shim reporting back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Scrolls the detail pane one line down.
    ScrollDetailDown,
    /// Scrolls the detail pane one line up.
    ScrollDetailUp,
    /// Scrolls the detail pane one page down.
    PageDetailDown,
    /// Scrolls the detail pane one page up.
    PageDetailUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query or the focused form field.
    Char(char),
    /// Removes the last character from the search query or the focused form field.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Flips the favorite flag of the selected recipe.
    ToggleFavorite,
    /// Asks for confirmation before deleting the selected recipe.
    RequestDelete,
    /// Deletes the recipe awaiting confirmation.
    ConfirmDelete,
    /// Drops the pending delete.
    CancelDelete,
    /// Serializes the collection for download.
    Export,

    /// Opens the new-recipe form.
    NewRecipe,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Steps the focused picker backwards.
    PickerLeft,
    /// Steps the focused picker forwards.
    PickerRight,
    /// Enter inside the form: newline or next field.
    FormEnter,
    /// Validates the form and creates the recipe.
    SubmitForm,
    /// Leaves the form and discards its contents.
    CancelForm,

    /// Reports the outcome of an [`Action::Export`].
    ExportFinished {
        /// Written path on success, error message on failure.
        result: std::result::Result<String, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI needs a re-render, and the actions to execute in sequence.
///
/// # Errors
///
/// Validation failures from form submission are absorbed into the form's error
/// messages. Any other store error is returned.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let had_status = state.status.take().is_some();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ScrollDetailDown => {
            state.scroll_detail_down(1);
            Ok((true, vec![]))
        }
        Event::ScrollDetailUp => {
            state.scroll_detail_up(1);
            Ok((true, vec![]))
        }
        Event::PageDetailDown => {
            state.scroll_detail_down(state.detail_page());
            Ok((true, vec![]))
        }
        Event::PageDetailUp => {
            state.scroll_detail_up(state.detail_page());
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            dispatch(state, Command::Search { query: String::new() })?;
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            dispatch(state, Command::Search { query: String::new() })?;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                let mut query = state.search_query.clone();
                query.push(*c);
                tracing::trace!(query = %query, char = %c, "search query updated");
                dispatch(state, Command::Search { query })?;
                Ok((true, vec![]))
            }
            InputMode::Form => {
                state.form.insert_char(*c, &state.vocabulary);
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::ConfirmDelete => Ok((had_status, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                let mut query = state.search_query.clone();
                query.pop();
                dispatch(state, Command::Search { query })?;
                Ok((true, vec![]))
            }
            InputMode::Form => {
                state.form.backspace();
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::ConfirmDelete => Ok((had_status, vec![])),
        },

        Event::ToggleFavorite => {
            let Some(id) = state.selected_recipe().map(|r| r.id.clone()) else {
                tracing::debug!("no recipe selected to favorite");
                return Ok((had_status, vec![]));
            };
            let actions = dispatch(state, Command::ToggleFavorite { id })?;
            Ok((true, actions))
        }
        Event::RequestDelete => {
            let Some(id) = state.selected_recipe().map(|r| r.id.clone()) else {
                tracing::debug!("no recipe selected to delete");
                return Ok((had_status, vec![]));
            };
            tracing::debug!(recipe_id = %id, "awaiting delete confirmation");
            state.pending_delete = Some(id);
            state.input_mode = InputMode::ConfirmDelete;
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => {
            state.input_mode = mode_after_confirm(state);
            let Some(id) = state.pending_delete.take() else {
                return Ok((true, vec![]));
            };
            let actions = dispatch(state, Command::Delete { id })?;
            Ok((true, actions))
        }
        Event::CancelDelete => {
            state.input_mode = mode_after_confirm(state);
            state.pending_delete = None;
            Ok((true, vec![]))
        }
        Event::Export => {
            let actions = dispatch(state, Command::Export)?;
            Ok((false, actions))
        }

        Event::NewRecipe => {
            state.form.clear_errors();
            state.input_mode = InputMode::Form;
            Ok((true, vec![]))
        }
        Event::NextField => {
            state.form.focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            state.form.focus_prev();
            Ok((true, vec![]))
        }
        Event::PickerLeft => {
            state.form.left(&state.vocabulary);
            Ok((true, vec![]))
        }
        Event::PickerRight => {
            state.form.right(&state.vocabulary);
            Ok((true, vec![]))
        }
        Event::FormEnter => {
            state.form.enter();
            Ok((true, vec![]))
        }
        Event::SubmitForm => {
            state.form.clear_errors();
            let draft = state.form.to_draft(&state.vocabulary);

            match dispatch(state, Command::Submit(draft)) {
                Ok(actions) => {
                    state.form.reset(&state.vocabulary);
                    state.input_mode = InputMode::Normal;
                    Ok((true, actions))
                }
                Err(RecipeBoxError::Validation { field, reason }) => {
                    tracing::debug!(field = %field, reason = %reason, "form rejected");
                    state.form.set_error(field, reason);
                    Ok((true, vec![]))
                }
                Err(e) => Err(e),
            }
        }
        Event::CancelForm => {
            state.form.reset(&state.vocabulary);
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::ExportFinished { result } => {
            state.status = Some(match result {
                Ok(path) => format!("Exported to {path}"),
                Err(e) => format!("Export failed: {e}"),
            });
            Ok((true, vec![]))
        }
    }
}

/// Leaving the confirm prompt returns to the results when a search is active.
fn mode_after_confirm(state: &AppState) -> InputMode {
    if state.search_query.is_empty() {
        InputMode::Normal
    } else {
        InputMode::Search(SearchFocus::Navigating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Culture, Vocabulary};
    use crate::storage::{MemoryStorage, RecipeStore};
    use crate::ui::theme::Theme;

    fn state(require_culture: bool) -> AppState {
        let store = RecipeStore::open(Box::new(MemoryStorage::default()), require_culture);
        let vocabulary = Vocabulary {
            difficulties: vec!["Easy".into(), "Hard".into()],
            cultures: vec![Culture::new("ma", "Moroccan")],
            dietary: vec!["Vegan".into()],
        };
        AppState::new(store, vocabulary, Theme::default())
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn add(state: &mut AppState, title: &str) {
        handle_event(state, &Event::NewRecipe).unwrap();
        type_str(state, title);
        handle_event(state, &Event::SubmitForm).unwrap();
    }

    #[test]
    fn submit_creates_and_resets_form() {
        let mut state = state(false);
        add(&mut state, "Tagine");

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.recipes().len(), 1);
        assert_eq!(state.form.title, "");
        assert_eq!(state.status.as_deref(), Some("Saved \"Tagine\""));
    }

    #[test]
    fn short_title_keeps_form_open_with_error() {
        let mut state = state(false);
        add(&mut state, "ab");

        assert_eq!(state.input_mode, InputMode::Form);
        assert!(state.store.recipes().is_empty());
        assert!(state.form.title_error.is_some());
        assert_eq!(state.form.title, "ab");
    }

    #[test]
    fn missing_culture_rejected_when_required() {
        let mut state = state(true);
        add(&mut state, "Tagine");
        assert!(state.form.culture_error.is_some());

        handle_event(&mut state, &Event::PickerRight).unwrap();
        handle_event(&mut state, &Event::SubmitForm).unwrap();
        assert_eq!(state.store.recipes()[0].culture_label, "Moroccan");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = state(false);
        add(&mut state, "Tagine");

        handle_event(&mut state, &Event::RequestDelete).unwrap();
        assert_eq!(state.input_mode, InputMode::ConfirmDelete);
        handle_event(&mut state, &Event::CancelDelete).unwrap();
        assert_eq!(state.store.recipes().len(), 1);

        handle_event(&mut state, &Event::RequestDelete).unwrap();
        handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert!(state.store.recipes().is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn search_typing_filters_and_escape_restores() {
        let mut state = state(false);
        add(&mut state, "Tagine");
        add(&mut state, "Pho");

        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_str(&mut state, "pho");
        assert_eq!(state.visible_count(), 1);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.visible_count(), 2);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn favorite_in_filtered_view_keeps_filter() {
        let mut state = state(false);
        add(&mut state, "Tagine");
        add(&mut state, "Pho");

        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_str(&mut state, "tag");
        handle_event(&mut state, &Event::FocusResults).unwrap();
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();

        assert_eq!(state.visible_count(), 1);
        assert!(state.selected_recipe().unwrap().favorite);
    }

    #[test]
    fn export_emits_action_and_reports_back() {
        let mut state = state(false);
        add(&mut state, "Tagine");

        let (_, actions) = handle_event(&mut state, &Event::Export).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::Export { filename, .. }] if filename == "recipes.json"
        ));

        handle_event(
            &mut state,
            &Event::ExportFinished {
                result: Ok("/tmp/recipes.json".into()),
            },
        )
        .unwrap();
        assert_eq!(state.status.as_deref(), Some("Exported to /tmp/recipes.json"));

        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(state.status.is_none());
    }

    #[test]
    fn normal_mode_ignores_typing() {
        let mut state = state(false);
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn cancel_discards_form_input() {
        let mut state = state(false);
        handle_event(&mut state, &Event::NewRecipe).unwrap();
        type_str(&mut state, "Half typed");
        handle_event(&mut state, &Event::CancelForm).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.store.recipes().is_empty());
        assert_eq!(state.form.title, "");
    }

    #[test]
    fn detail_scroll_is_bounded_and_resets_on_selection() {
        let mut state = state(false);
        handle_event(&mut state, &Event::NewRecipe).unwrap();
        type_str(&mut state, "Tagine");
        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        for i in 0..30 {
            type_str(&mut state, &format!("ingredient {i}"));
            handle_event(&mut state, &Event::FormEnter).unwrap();
        }
        handle_event(&mut state, &Event::SubmitForm).unwrap();
        add(&mut state, "Pho");
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selected_recipe().unwrap().title, "Tagine");

        for _ in 0..100 {
            handle_event(&mut state, &Event::PageDetailDown).unwrap();
        }
        let deepest = state.detail_scroll;
        assert!(deepest > 0);
        assert!(deepest < 40);

        handle_event(&mut state, &Event::ScrollDetailDown).unwrap();
        assert_eq!(state.detail_scroll, deepest);
        handle_event(&mut state, &Event::ScrollDetailUp).unwrap();
        assert_eq!(state.detail_scroll, deepest - 1);

        handle_event(&mut state, &Event::KeyUp).unwrap();
        assert_eq!(state.detail_scroll, 0);
    }
}
