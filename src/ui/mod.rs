//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides theme
//! support, responsive layout, search highlighting and terminal hyperlinks.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, links, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::AppState;
//! use recipebox::domain::Vocabulary;
//! use recipebox::storage::{MemoryStorage, RecipeStore};
//! use recipebox::ui::{render, Theme};
//!
//! let store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
//! let state = AppState::new(store, Vocabulary::default(), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, FormRow, FormView, HeaderInfo, RecipeCard, SearchBarInfo, SourceRef,
    UIViewModel,
};
