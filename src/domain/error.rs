//! Error types for the Recipebox plugin.
//!
//! This module defines the centralized error type [`RecipeBoxError`] and a type alias
//! [`Result`] used throughout the crate. Only recipe creation surfaces an error to the
//! user; everything else is logged and degraded to an empty or no-op state.

use std::fmt;
use thiserror::Error;

/// Form field that failed validation during recipe creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Culture,
}

impl Field {
    /// Returns the lowercase field name used in messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Culture => "culture",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for Recipebox operations.
///
/// # Examples
///
/// ```
/// use recipebox::domain::{Field, RecipeBoxError};
///
/// let err = RecipeBoxError::validation(Field::Title, "Title must be at least 3 characters.");
/// assert_eq!(err.to_string(), "invalid title: Title must be at least 3 characters.");
/// ```
#[derive(Debug, Error)]
pub enum RecipeBoxError {
    /// A recipe draft was rejected at creation time.
    ///
    /// The `reason` is the user-facing message shown under the failing field.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The field that failed validation.
        field: Field,
        /// Human-readable guidance for correcting the input.
        reason: String,
    },

    /// Persisted recipe data could not be parsed.
    ///
    /// Never reaches the user: the store substitutes an empty collection.
    #[error("persisted data is corrupt: {0}")]
    PersistedDataCorrupt(String),

    /// Reading from or writing to the storage collaborator failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid or a referenced file is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RecipeBoxError {
    /// Builds a [`RecipeBoxError::Validation`] for `field`.
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for Recipebox operations.
pub type Result<T> = std::result::Result<T, RecipeBoxError>;
