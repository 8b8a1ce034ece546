//! Recipe domain model and creation rules.
//!
//! This module defines the stored [`Recipe`] record and the [`RecipeDraft`] the form
//! produces. A draft only becomes a recipe through [`RecipeDraft::validate`] followed
//! by [`Recipe::from_draft`], so a stored record never exists half-built.

use super::error::{Field, RecipeBoxError, Result};
use serde::{Deserialize, Serialize};

/// Minimum title length, counted in characters after trimming.
pub const MIN_TITLE_LEN: usize = 3;

/// Number of milliseconds in one minute.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Number of milliseconds in one hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Number of milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// A stored recipe.
///
/// Serialized with camelCase keys so the persisted array keeps the
/// `[{id, title, difficulty, ingredients, steps, sourceName, sourceUrl, culture,
/// cultureLabel, dietary, favorite, createdAt}]` shape. Every field except `id`
/// and `title` tolerates being absent when loading older data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub culture: String,
    #[serde(default)]
    pub culture_label: String,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub created_at: i64,
}

/// Raw form input for a new recipe.
///
/// Ingredients and steps are free-text blocks, one entry per line. The culture
/// value and label travel together because they come from a single picker choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub difficulty: String,
    pub ingredients: String,
    pub steps: String,
    pub source_name: String,
    pub source_url: String,
    pub culture: String,
    pub culture_label: String,
    pub dietary: Vec<String>,
}

impl RecipeDraft {
    /// Checks the draft against the creation rules.
    ///
    /// The title is checked first, then the culture selection when
    /// `require_culture` is set.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Validation`] naming the first failing field.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::domain::{Field, RecipeBoxError, RecipeDraft};
    ///
    /// let draft = RecipeDraft { title: " ab ".into(), ..Default::default() };
    /// match draft.validate(false) {
    ///     Err(RecipeBoxError::Validation { field, .. }) => assert_eq!(field, Field::Title),
    ///     other => panic!("unexpected: {other:?}"),
    /// }
    /// ```
    pub fn validate(&self, require_culture: bool) -> Result<()> {
        if self.title.trim().chars().count() < MIN_TITLE_LEN {
            return Err(RecipeBoxError::validation(
                Field::Title,
                "Title must be at least 3 characters.",
            ));
        }

        if require_culture && self.culture.trim().is_empty() {
            return Err(RecipeBoxError::validation(
                Field::Culture,
                "Please choose a culture.",
            ));
        }

        Ok(())
    }
}

impl Recipe {
    /// Builds a recipe from an already validated draft.
    ///
    /// Text fields are trimmed, ingredient and step blocks are split into lines,
    /// and `favorite` starts out false.
    #[must_use]
    pub fn from_draft(draft: RecipeDraft, id: String, created_at: i64) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            difficulty: draft.difficulty,
            ingredients: parse_lines(&draft.ingredients),
            steps: parse_lines(&draft.steps),
            source_name: draft.source_name.trim().to_string(),
            source_url: draft.source_url.trim().to_string(),
            culture: draft.culture,
            culture_label: draft.culture_label,
            dietary: draft.dietary,
            favorite: false,
            created_at,
        }
    }

    /// Label to show for the culture, falling back to the raw value.
    #[must_use]
    pub fn culture_display(&self) -> Option<&str> {
        [self.culture_label.as_str(), self.culture.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    /// Returns a human-readable string describing how long ago the recipe was created.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn created_ago(&self, now_millis: i64) -> String {
        let diff = now_millis - self.created_at;

        if diff < MILLIS_PER_MINUTE {
            "just now".to_string()
        } else if diff < MILLIS_PER_HOUR {
            format!("{}m ago", diff / MILLIS_PER_MINUTE)
        } else if diff < MILLIS_PER_DAY {
            format!("{}h ago", diff / MILLIS_PER_HOUR)
        } else {
            format!("{}d ago", diff / MILLIS_PER_DAY)
        }
    }
}

/// Splits a free-text block into trimmed, non-blank lines.
///
/// Accepts both `\n` and `\r\n` line endings.
///
/// # Examples
///
/// ```
/// use recipebox::domain::recipe::parse_lines;
///
/// assert_eq!(parse_lines("a\r\n  b \n\n\tc"), vec!["a", "b", "c"]);
/// assert!(parse_lines("").is_empty());
/// ```
#[must_use]
pub fn parse_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            difficulty: "Medium".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn title_is_measured_after_trimming() {
        assert!(draft("  ab  ").validate(false).is_err());
        assert!(draft("  abc  ").validate(false).is_ok());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        assert!(draft("été").validate(false).is_ok());
        assert!(draft("éé").validate(false).is_err());
    }

    #[test]
    fn culture_required_only_when_flag_set() {
        let d = draft("Tagine");
        assert!(d.validate(false).is_ok());

        let err = d.validate(true).unwrap_err();
        assert!(matches!(
            err,
            RecipeBoxError::Validation { field: Field::Culture, .. }
        ));
    }

    #[test]
    fn title_failure_reported_before_culture() {
        let err = draft("x").validate(true).unwrap_err();
        assert!(matches!(
            err,
            RecipeBoxError::Validation { field: Field::Title, .. }
        ));
    }

    #[test]
    fn from_draft_trims_and_splits() {
        let d = RecipeDraft {
            title: "  Pho ".into(),
            ingredients: "noodles\r\n\r\n broth ".into(),
            steps: "boil\n".into(),
            source_name: " Mai ".into(),
            ..Default::default()
        };
        let r = Recipe::from_draft(d, "id1".into(), 42);
        assert_eq!(r.title, "Pho");
        assert_eq!(r.ingredients, vec!["noodles", "broth"]);
        assert_eq!(r.steps, vec!["boil"]);
        assert_eq!(r.source_name, "Mai");
        assert!(!r.favorite);
        assert_eq!(r.created_at, 42);
    }

    #[test]
    fn culture_display_falls_back_to_value() {
        let mut r = Recipe::from_draft(draft("Tagine"), "x".into(), 0);
        assert_eq!(r.culture_display(), None);
        r.culture = "ma".into();
        assert_eq!(r.culture_display(), Some("ma"));
        r.culture_label = "Moroccan".into();
        assert_eq!(r.culture_display(), Some("Moroccan"));
    }

    #[test]
    fn created_ago_buckets() {
        let r = Recipe::from_draft(draft("Tagine"), "x".into(), 0);
        assert_eq!(r.created_ago(30_000), "just now");
        assert_eq!(r.created_ago(5 * MILLIS_PER_MINUTE), "5m ago");
        assert_eq!(r.created_ago(3 * MILLIS_PER_HOUR), "3h ago");
        assert_eq!(r.created_ago(2 * MILLIS_PER_DAY), "2d ago");
    }

    #[test]
    fn deserializes_sparse_legacy_record() {
        let json = r#"{"id":"k1","title":"Soup"}"#;
        let r: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(r.title, "Soup");
        assert!(r.ingredients.is_empty());
        assert!(!r.favorite);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let r = Recipe::from_draft(draft("Tagine"), "x".into(), 7);
        let value = serde_json::to_value(&r).unwrap();
        assert!(value.get("sourceName").is_some());
        assert!(value.get("cultureLabel").is_some());
        assert_eq!(value["createdAt"], 7);
    }
}
