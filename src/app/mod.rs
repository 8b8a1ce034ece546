//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/storage
//! layers. It implements the event-driven architecture that powers the
//! interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key → Event → handle_event → Command → RecipeStore → re-filter → Actions
//!                    ↑                                               ↓
//!                    └──────────── ExportFinished ───────── plugin shim
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`commands`]: Dispatch table from user intents to store operations
//! - [`filter`]: Case-insensitive search over title, culture and dietary tags
//! - [`form`]: New-recipe form state
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::{AppState, Event, handle_event};
//! use recipebox::domain::Vocabulary;
//! use recipebox::storage::{MemoryStorage, RecipeStore};
//! use recipebox::Theme;
//!
//! let store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
//! let mut state = AppState::new(store, Vocabulary::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Export)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), recipebox::RecipeBoxError>(())
//! ```

pub mod actions;
pub mod commands;
pub mod filter;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use commands::{dispatch, Command};
pub use form::{FormField, RecipeForm};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
