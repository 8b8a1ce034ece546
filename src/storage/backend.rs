//! Storage collaborator abstraction.
//!
//! The recipe store persists through a plain key-value interface: one fixed key
//! holds the whole serialized collection. Keeping the trait this narrow lets the
//! plugin use a JSON file on disk while tests use an in-memory map.

use crate::domain::error::Result;

/// Key-value persistence backend.
///
/// Values are complete JSON documents. `set` replaces the previous value
/// wholesale; implementations must never leave a half-written value behind.
///
/// # Implementations
///
/// - [`FileStorage`](crate::storage::FileStorage): one JSON file per key with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-process map
///
/// # Examples
///
/// ```
/// use recipebox::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default();
/// storage.set("recipes", "[]")?;
/// assert_eq!(storage.get("recipes")?.as_deref(), Some("[]"));
/// # Ok::<(), recipebox::RecipeBoxError>(())
/// ```
pub trait Storage: Send {
    /// Returns the value stored under `key`, or `None` if nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous value is then left intact.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
