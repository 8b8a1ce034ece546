//! Storage layer for persistent recipe data.
//!
//! This module provides the key-value storage abstraction, its file and in-memory
//! backends, the [`RecipeStore`] that owns the recipe collection, and the export sink.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `file`: JSON-file-per-key backend with atomic writes
//! - `memory`: In-memory backend
//! - `store`: Recipe collection with load/persist/create/toggle/delete/export
//! - `export`: Export sink trait and file implementation

pub mod backend;
pub mod export;
pub mod file;
pub mod memory;
pub mod store;

pub use backend::Storage;
pub use export::{ExportSink, FileExportSink, EXPORT_FILENAME};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use store::{RecipeStore, RECIPES_KEY};
