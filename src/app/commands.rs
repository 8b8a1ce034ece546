//! Command dispatch table.
//!
//! Key handling decides *what* the user meant; this module decides *what happens to
//! the store*. Each [`Command`] variant is one user intent and maps to exactly one
//! store operation, after which the view is re-filtered from the live collection.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::RecipeDraft;
use crate::storage::EXPORT_FILENAME;

/// A discrete user intent against the recipe collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a recipe from form input.
    Submit(RecipeDraft),
    /// Flip the favorite flag of a recipe.
    ToggleFavorite { id: String },
    /// Remove a recipe. Callers have already obtained confirmation.
    Delete { id: String },
    /// Replace the search query.
    Search { query: String },
    /// Serialize everything for the export sink.
    Export,
}

/// Applies `command` to the store and refreshes the filtered view.
///
/// # Errors
///
/// Only [`Command::Submit`] can fail, with the store's validation error. Nothing is
/// mutated in that case.
///
/// # Example
///
/// ```rust
/// use recipebox::app::commands::{dispatch, Command};
/// use recipebox::app::AppState;
/// use recipebox::domain::{RecipeDraft, Vocabulary};
/// use recipebox::storage::{MemoryStorage, RecipeStore};
/// use recipebox::Theme;
///
/// let store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
/// let mut state = AppState::new(store, Vocabulary::default(), Theme::default());
///
/// dispatch(&mut state, Command::Submit(RecipeDraft {
///     title: "Tagine".into(),
///     ..Default::default()
/// }))?;
/// assert_eq!(state.visible_count(), 1);
/// # Ok::<(), recipebox::RecipeBoxError>(())
/// ```
pub fn dispatch(state: &mut AppState, command: Command) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("dispatch", command = command.name()).entered();

    match command {
        Command::Submit(draft) => {
            let recipe = state.store.create(draft)?;
            let (id, title) = (recipe.id.clone(), recipe.title.clone());

            state.apply_search_filter();
            state.select_id(&id);
            state.status = Some(format!("Saved \"{title}\""));
            Ok(vec![])
        }
        Command::ToggleFavorite { id } => {
            if state.store.toggle_favorite(&id).is_some() {
                state.apply_search_filter();
            }
            Ok(vec![])
        }
        Command::Delete { id } => {
            if let Some(removed) = state.store.delete(&id) {
                state.apply_search_filter();
                state.status = Some(format!("Deleted \"{}\"", removed.title));
            }
            Ok(vec![])
        }
        Command::Search { query } => {
            state.search_query = query;
            state.apply_search_filter();
            Ok(vec![])
        }
        Command::Export => {
            let payload = state.store.export();
            tracing::debug!(
                recipes = state.store.recipes().len(),
                bytes = payload.len(),
                "export prepared"
            );
            Ok(vec![Action::Export {
                filename: EXPORT_FILENAME.to_string(),
                payload,
            }])
        }
    }
}

impl Command {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submit(_) => "submit",
            Self::ToggleFavorite { .. } => "toggle_favorite",
            Self::Delete { .. } => "delete",
            Self::Search { .. } => "search",
            Self::Export => "export",
        }
    }
}
