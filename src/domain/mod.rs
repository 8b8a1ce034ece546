//! Domain layer for the Recipebox plugin.
//!
//! This module contains the core recipe types and creation rules, independent of
//! Zellij APIs or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe record, form draft, and validation
//! - [`vocabulary`]: Difficulty, culture, and dietary choice lists
//!
//! # Examples
//!
//! ```
//! use recipebox::domain::{Recipe, RecipeDraft, Result};
//!
//! fn build(draft: RecipeDraft) -> Result<Recipe> {
//!     draft.validate(false)?;
//!     Ok(Recipe::from_draft(draft, "id-1".to_string(), 0))
//! }
//!
//! let recipe = build(RecipeDraft { title: "Tagine".into(), ..Default::default() })?;
//! assert!(!recipe.favorite);
//! # Ok::<(), recipebox::RecipeBoxError>(())
//! ```

pub mod error;
pub mod recipe;
pub mod vocabulary;

pub use error::{Field, RecipeBoxError, Result};
pub use recipe::{Recipe, RecipeDraft};
pub use vocabulary::{Culture, Vocabulary};
