//! The recipe store.
//!
//! [`RecipeStore`] owns the authoritative, newest-first recipe collection and keeps
//! it synchronized with a [`Storage`] collaborator. Every mutation rewrites the full
//! collection under [`RECIPES_KEY`].
//!
//! Only [`RecipeStore::create`] can fail, and only on validation. Loading tolerates
//! missing or corrupt data by starting empty, and toggling or deleting an unknown id
//! does nothing.

use crate::domain::error::{RecipeBoxError, Result};
use crate::domain::{Recipe, RecipeDraft};
use crate::storage::backend::Storage;
use std::fmt;

/// Storage key under which the serialized recipe array lives.
pub const RECIPES_KEY: &str = "recipes";

/// Authoritative recipe collection bound to a storage backend.
pub struct RecipeStore {
    storage: Box<dyn Storage>,
    recipes: Vec<Recipe>,
    require_culture: bool,
}

impl fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeStore")
            .field("recipes", &self.recipes.len())
            .field("require_culture", &self.require_culture)
            .finish_non_exhaustive()
    }
}

impl RecipeStore {
    /// Opens a store over `storage`, loading whatever it currently holds.
    ///
    /// `require_culture` makes a culture selection mandatory for [`create`](Self::create).
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::storage::{MemoryStorage, RecipeStore};
    ///
    /// let store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    /// assert!(store.recipes().is_empty());
    /// ```
    #[must_use]
    pub fn open(storage: Box<dyn Storage>, require_culture: bool) -> Self {
        let mut store = Self {
            storage,
            recipes: Vec::new(),
            require_culture,
        };
        store.recipes = store.load();
        store
    }

    /// Reads and deserializes the persisted collection.
    ///
    /// Never fails: an absent value, a read error, or malformed JSON all yield an
    /// empty collection. Corrupt data is logged as a warning and otherwise ignored.
    #[must_use]
    pub fn load(&self) -> Vec<Recipe> {
        let _span = tracing::debug_span!("store_load").entered();

        let raw = match self.storage.get(RECIPES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no persisted recipes");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted recipes, starting empty");
                return Vec::new();
            }
        };

        match Self::decode(&raw) {
            Ok(recipes) => {
                tracing::debug!(count = recipes.len(), "recipes loaded");
                recipes
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable recipe data");
                Vec::new()
            }
        }
    }

    fn decode(raw: &str) -> Result<Vec<Recipe>> {
        serde_json::from_str::<Option<Vec<Recipe>>>(raw)
            .map(Option::unwrap_or_default)
            .map_err(|e| RecipeBoxError::PersistedDataCorrupt(e.to_string()))
    }

    /// Writes the full collection to storage.
    ///
    /// A failed write is logged; the in-memory collection remains authoritative and
    /// the next successful mutation rewrites everything.
    pub fn persist(&mut self) {
        let _span = tracing::debug_span!("store_persist", count = self.recipes.len()).entered();

        let result = serde_json::to_string(&self.recipes)
            .map_err(|e| RecipeBoxError::Storage(format!("failed to serialize recipes: {e}")))
            .and_then(|json| self.storage.set(RECIPES_KEY, &json));

        match result {
            Ok(()) => tracing::debug!("recipes persisted"),
            Err(e) => tracing::error!(error = %e, "failed to persist recipes"),
        }
    }

    /// Validates `draft`, prepends the resulting recipe, and persists.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Validation`] if the title is shorter than three
    /// characters or a required culture is missing. The collection is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::domain::RecipeDraft;
    /// use recipebox::storage::{MemoryStorage, RecipeStore};
    ///
    /// let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    /// let draft = RecipeDraft {
    ///     title: "Tagine".into(),
    ///     ingredients: "a\nb\n\nc".into(),
    ///     ..Default::default()
    /// };
    /// let recipe = store.create(draft)?;
    /// assert_eq!(recipe.ingredients, vec!["a", "b", "c"]);
    /// # Ok::<(), recipebox::RecipeBoxError>(())
    /// ```
    pub fn create(&mut self, draft: RecipeDraft) -> Result<&Recipe> {
        let _span = tracing::debug_span!("store_create", title = %draft.title.trim()).entered();

        if let Err(e) = draft.validate(self.require_culture) {
            tracing::debug!(error = %e, "recipe rejected");
            return Err(e);
        }

        let id = self.next_id();
        let created_at = chrono::Utc::now().timestamp_millis();
        let recipe = Recipe::from_draft(draft, id, created_at);

        tracing::debug!(
            recipe_id = %recipe.id,
            ingredients = recipe.ingredients.len(),
            steps = recipe.steps.len(),
            "recipe created"
        );

        self.recipes.insert(0, recipe);
        self.persist();
        Ok(&self.recipes[0])
    }

    /// Flips the favorite flag of the recipe with `id` and persists.
    ///
    /// Returns the new flag value, or `None` (without persisting) if no recipe has
    /// that id.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let _span = tracing::debug_span!("store_toggle_favorite", recipe_id = %id).entered();

        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            tracing::debug!("unknown recipe id, ignoring");
            return None;
        };

        recipe.favorite = !recipe.favorite;
        let favorite = recipe.favorite;
        self.persist();

        tracing::debug!(favorite = favorite, "favorite toggled");
        Some(favorite)
    }

    /// Removes the recipe with `id` and persists.
    ///
    /// Returns the removed recipe, or `None` (without persisting) if no recipe has
    /// that id.
    pub fn delete(&mut self, id: &str) -> Option<Recipe> {
        let _span = tracing::debug_span!("store_delete", recipe_id = %id).entered();

        let Some(index) = self.recipes.iter().position(|r| r.id == id) else {
            tracing::debug!("unknown recipe id, ignoring");
            return None;
        };

        let removed = self.recipes.remove(index);
        self.persist();

        tracing::debug!(remaining = self.recipes.len(), "recipe deleted");
        Some(removed)
    }

    /// Adds the recipes from `earlier` whose ids this store does not hold yet.
    ///
    /// They go in front, keeping their relative order, and the collection is
    /// persisted if anything was added. Returns how many were added.
    pub fn merge_unsaved(&mut self, earlier: &[Recipe]) -> usize {
        let _span = tracing::debug_span!("store_merge", offered = earlier.len()).entered();

        let mut merged: Vec<Recipe> = earlier
            .iter()
            .filter(|r| self.get(&r.id).is_none())
            .cloned()
            .collect();
        if merged.is_empty() {
            return 0;
        }

        let added = merged.len();
        merged.append(&mut self.recipes);
        self.recipes = merged;
        self.persist();

        tracing::info!(added, "carried unsaved recipes into store");
        added
    }

    /// Serializes the full collection as 2-space indented JSON for an export sink.
    #[must_use]
    pub fn export(&self) -> Vec<u8> {
        serde_json::to_vec_pretty(&self.recipes).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize recipes for export");
            b"[]".to_vec()
        })
    }

    /// All recipes, newest first.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up a recipe by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Whether [`create`](Self::create) insists on a culture selection.
    #[must_use]
    pub const fn require_culture(&self) -> bool {
        self.require_culture
    }

    /// Read access to the underlying storage backend.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    fn next_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().simple().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            difficulty: "Easy".to_string(),
            ..Default::default()
        }
    }

    fn empty_store() -> RecipeStore {
        RecipeStore::open(Box::new(MemoryStorage::default()), false)
    }

    #[test]
    fn corrupt_data_loads_empty() {
        let storage = MemoryStorage::with_value(RECIPES_KEY, "{not json");
        let store = RecipeStore::open(Box::new(storage), false);
        assert!(store.recipes().is_empty());
    }

    #[test]
    fn null_and_wrong_shape_load_empty() {
        for raw in ["null", "{\"a\":1}", "42"] {
            let storage = MemoryStorage::with_value(RECIPES_KEY, raw);
            let store = RecipeStore::open(Box::new(storage), false);
            assert!(store.recipes().is_empty(), "raw = {raw}");
        }
    }

    #[test]
    fn decode_classifies_corruption() {
        let err = RecipeStore::decode("[").unwrap_err();
        assert!(matches!(err, RecipeBoxError::PersistedDataCorrupt(_)));
    }

    #[test]
    fn rejected_create_does_not_persist() {
        let mut store = empty_store();
        assert!(store.create(draft("ab")).is_err());
        assert!(store.recipes().is_empty());
        assert_eq!(store.storage().get(RECIPES_KEY).unwrap(), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut store = empty_store();
        let a = store.create(draft("First")).unwrap().id.clone();
        let b = store.create(draft("Second")).unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn toggle_returns_new_flag() {
        let mut store = empty_store();
        let id = store.create(draft("Tagine")).unwrap().id.clone();
        assert_eq!(store.toggle_favorite(&id), Some(true));
        assert_eq!(store.toggle_favorite(&id), Some(false));
        assert_eq!(store.toggle_favorite("missing"), None);
    }

    #[test]
    fn delete_returns_removed_recipe() {
        let mut store = empty_store();
        let id = store.create(draft("Tagine")).unwrap().id.clone();
        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.title, "Tagine");
        assert!(store.get(&id).is_none());
        assert!(store.delete(&id).is_none());
    }

    #[test]
    fn export_is_pretty_printed_with_two_spaces() {
        let mut store = empty_store();
        store.create(draft("Tagine")).unwrap();
        let text = String::from_utf8(store.export()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\""));
    }

    #[test]
    fn export_of_empty_store_is_empty_array() {
        assert_eq!(empty_store().export(), b"[]");
    }

    #[test]
    fn merge_unsaved_prepends_only_new_recipes() {
        let mut session = empty_store();
        session.create(draft("Pho")).unwrap();
        session.create(draft("Tagine")).unwrap();

        let mut disk = empty_store();
        disk.create(draft("Paella")).unwrap();

        assert_eq!(disk.merge_unsaved(session.recipes()), 2);
        let titles: Vec<&str> = disk.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Tagine", "Pho", "Paella"]);

        let persisted = disk.storage().get(RECIPES_KEY).unwrap().unwrap();
        assert!(persisted.contains("Tagine"));

        assert_eq!(disk.merge_unsaved(session.recipes()), 0);
        assert_eq!(disk.recipes().len(), 3);
    }
}
