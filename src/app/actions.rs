//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches Zellij or the filesystem outside the store. When
//! an event needs the outside world it returns an [`Action`] and the plugin shim
//! carries it out.
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::Action;
//!
//! let actions = vec![Action::Export {
//!     filename: "recipes.json".to_string(),
//!     payload: b"[]".to_vec(),
//! }];
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Hands a serialized collection to the export sink.
    Export {
        /// Target filename, relative to the sink's directory.
        filename: String,
        /// Pretty-printed JSON of every recipe.
        payload: Vec<u8>,
    },
}
