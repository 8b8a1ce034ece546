//! Selectable vocabularies offered by the recipe form.
//!
//! The form never invents values: difficulty, culture, and dietary choices all come
//! from a [`Vocabulary`] supplied by configuration (or the built-in defaults). The
//! store only ever sees the chosen values.

use super::error::{RecipeBoxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of the culture picker: a machine value and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    pub value: String,
    pub label: String,
}

impl Culture {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The three choice lists presented by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "default_difficulties")]
    pub difficulties: Vec<String>,
    #[serde(default = "default_cultures")]
    pub cultures: Vec<Culture>,
    #[serde(default = "default_dietary")]
    pub dietary: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            difficulties: default_difficulties(),
            cultures: default_cultures(),
            dietary: default_dietary(),
        }
    }
}

fn default_difficulties() -> Vec<String> {
    ["Easy", "Medium", "Hard"].map(String::from).to_vec()
}

fn default_cultures() -> Vec<Culture> {
    [
        ("it", "Italian"),
        ("fr", "French"),
        ("ma", "Moroccan"),
        ("mx", "Mexican"),
        ("in", "Indian"),
        ("jp", "Japanese"),
        ("vn", "Vietnamese"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(value, label)| Culture::new(value, label))
    .collect()
}

fn default_dietary() -> Vec<String> {
    ["Vegan", "Vegetarian", "Gluten-free", "Dairy-free", "Nut-free"]
        .map(String::from)
        .to_vec()
}

impl Vocabulary {
    /// Loads a vocabulary from a TOML file.
    ///
    /// Lists missing from the file keep their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Config`] if the file cannot be read or parsed.
    ///
    /// # File Format
    ///
    /// ```toml
    /// difficulties = ["Easy", "Hard"]
    /// dietary = ["Vegan"]
    ///
    /// [[cultures]]
    /// value = "ma"
    /// label = "Moroccan"
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RecipeBoxError::Config(format!("failed to read vocabulary file: {e}"))
        })?;
        Self::from_toml(&contents)
    }

    /// Parses a vocabulary from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Config`] on invalid TOML or mistyped lists.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| RecipeBoxError::Config(format!("failed to parse vocabulary TOML: {e}")))
    }

    /// Parses a comma-separated `value=Label` list.
    ///
    /// An entry without `=` uses the same text for value and label. Blank entries
    /// are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::domain::Vocabulary;
    ///
    /// let cultures = Vocabulary::parse_cultures("ma=Moroccan, Thai ,");
    /// assert_eq!(cultures.len(), 2);
    /// assert_eq!(cultures[0].label, "Moroccan");
    /// assert_eq!(cultures[1].value, "Thai");
    /// ```
    #[must_use]
    pub fn parse_cultures(list: &str) -> Vec<Culture> {
        split_list(list)
            .into_iter()
            .map(|entry| match entry.split_once('=') {
                Some((value, label)) => Culture::new(value.trim(), label.trim()),
                None => Culture::new(entry.clone(), entry),
            })
            .filter(|c| !c.value.is_empty())
            .collect()
    }

    /// Parses a comma-separated list of plain labels.
    #[must_use]
    pub fn parse_labels(list: &str) -> Vec<String> {
        split_list(list)
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
