//! Input mode state types for the application.
//!
//! The mode decides how keys are interpreted and which layout the renderer uses.
//!
//! # State Machine
//!
//! ```text
//!            /               n
//!   Search ◄──── Normal ────────► Form
//!      │  Esc      ▲  ▲   Esc / Ctrl+s ok │
//!      └───────────┘  └───────────────────┘
//!                  │ d        ▲
//!                  ▼          │ y / any
//!              ConfirmDelete ─┘
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Every keystroke re-filters the list.
    Typing,

    /// User is moving through the filtered results with the query kept.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default list mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), n (new recipe),
    /// f (favorite), d (delete), e (export), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// The new-recipe form is open.
    Form,

    /// Waiting for the user to confirm deletion of the pending recipe.
    ConfirmDelete,
}
