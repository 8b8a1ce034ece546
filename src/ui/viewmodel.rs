//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges, relative
//! timestamps and selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use recipebox::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Recipes (0) ".to_string() },
//!     footer: FooterInfo { text: "q: quit".to_string(), is_prompt: false },
//!     search_bar: None,
//!     cards: vec![],
//!     selected_index: 0,
//!     list_rows: 1,
//!     detail_scroll: 0,
//!     empty_state: None,
//!     form: None,
//! };
//! assert!(vm.selected_card().is_none());
//! ```

/// Shown in place of a missing culture or source.
pub const PLACEHOLDER: &str = "—";

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title and counts).
    pub header: HeaderInfo,

    /// Footer information (keybindings, status or prompt).
    pub footer: FooterInfo,

    /// Search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Cards inside the visible list window.
    pub cards: Vec<RecipeCard>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Rows reserved for the compact list above the detail pane.
    pub list_rows: usize,

    /// Card lines scrolled off the top of the detail pane.
    pub detail_scroll: usize,

    /// Empty state message (no recipes at all, or none matching).
    pub empty_state: Option<EmptyState>,

    /// The new-recipe form, replacing the list when present.
    pub form: Option<FormView>,
}

impl UIViewModel {
    /// The card shown in the detail pane.
    #[must_use]
    pub fn selected_card(&self) -> Option<&RecipeCard> {
        self.cards.get(self.selected_index)
    }
}

/// Display information for a single recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    pub difficulty: String,

    /// Culture label, or [`PLACEHOLDER`].
    pub culture: String,

    pub favorite: bool,
    pub source: SourceRef,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,

    /// Dietary tags rendered as badges.
    pub badges: Vec<String>,

    /// Relative creation time, e.g. "3 days ago".
    pub created: String,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of the title to highlight (search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl RecipeCard {
    /// Filled star for favorites, hollow otherwise.
    #[must_use]
    pub const fn favorite_symbol(&self) -> &'static str {
        if self.favorite {
            "★"
        } else {
            "☆"
        }
    }
}

/// Where a recipe came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// Clickable link; the label is the source name, or the URL itself.
    Link { label: String, url: String },
    /// Name only, no URL.
    Text(String),
    /// Neither given.
    Missing,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding hints, a status message, or the delete prompt.
    pub text: String,

    /// Whether `text` is a question awaiting an answer.
    pub is_prompt: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No recipes yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Keys go to the query rather than the results.
    pub typing: bool,
}

/// The new-recipe form, one row per field in tab order.
#[derive(Debug, Clone)]
pub struct FormView {
    pub rows: Vec<FormRow>,
}

/// One labelled form field.
#[derive(Debug, Clone)]
pub struct FormRow {
    pub label: String,
    /// Current value; multi-line fields yield several entries.
    pub lines: Vec<String>,
    pub is_focused: bool,
    pub kind: FormRowKind,
    /// Validation message shown under the field.
    pub error: Option<String>,
}

/// How a form field takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRowKind {
    /// Free text, edited by typing.
    Text,
    /// One value chosen with Left/Right.
    Picker,
    /// Several values toggled with Space.
    Checklist,
}
