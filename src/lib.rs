//! Recipebox: a Zellij plugin for collecting and browsing recipes.
//!
//! Recipebox keeps a personal recipe collection inside a floating pane:
//! - Add recipes through a form with title, ingredients, steps, source, culture
//!   and dietary tags
//! - Browse newest-first with a compact list and a detail card
//! - Case-insensitive search over title, culture and dietary tags
//! - Favorites, confirmed deletion and JSON export
//! - Persistent state backed by a JSON document in the plugin data directory

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Command dispatch                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ UI Layer (ui/)        │         │ Storage Layer         │
//! │ - Rendering           │         │ (storage/)            │
//! │ - Theming             │         │ - RecipeStore         │
//! │ - Components          │         │ - Storage backends    │
//! └───────────────────────┘         │ - Export sink         │
//!                                   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Recipe, draft, vocabulary, errors (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/recipebox.wasm" {
//!         cultures "ma=Moroccan,vn=Vietnamese,mx=Mexican"
//!         dietary "Vegan,Gluten-free"
//!         require_culture "true"
//!         export_dir "~/Downloads"
//!         theme "recipebox-light"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing, build
//!    `AppState` over an in-memory store, request permissions
//! 2. **Permission Granted**: open the JSON file store in the data directory and
//!    swap it in; the collection is loaded once, right then
//! 3. **Keys**: mapped per input mode to [`Event`]s, handled by [`handle_event`]
//! 4. **Actions**: closing the pane and writing exports are carried out by the shim
//!
//! # Example
//!
//! ```rust
//! use recipebox::{handle_event, Config, Event};
//!
//! let config = Config { require_culture: false, ..Default::default() };
//! let mut state = recipebox::initialize(&config);
//!
//! handle_event(&mut state, &Event::NewRecipe)?;
//! for c in "Tagine".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::SubmitForm)?;
//! assert_eq!(state.visible_count(), 1);
//! # Ok::<(), recipebox::RecipeBoxError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Synchronous Storage
//!
//! The collection is a single small JSON document, so reads and writes happen
//! on the plugin thread. Write failures are logged and the in-memory collection
//! stays authoritative for the session.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models, keeping display formatting (relative
//! times, placeholders, highlight ranges) out of the renderer.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator; OSC 8 links where supported

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Recipe, RecipeBoxError, Result, Vocabulary};
pub use ui::Theme;

use std::collections::BTreeMap;
use storage::{FileStorage, MemoryStorage, RecipeStore, Storage};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Culture choices as `value=Label` pairs, comma separated.
    pub cultures: Option<String>,

    /// Dietary tag labels, comma separated.
    pub dietary: Option<String>,

    /// Difficulty labels, comma separated.
    pub difficulties: Option<String>,

    /// TOML file with any of the three lists. Inline options override it.
    pub vocabulary_file: Option<String>,

    /// Whether a culture must be chosen. Ignored when no cultures are configured.
    pub require_culture: bool,

    /// Directory receiving `recipes.json` on export. Default: `"~"`
    pub export_dir: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cultures: None,
            dietary: None,
            difficulties: None,
            vocabulary_file: None,
            require_culture: true,
            export_dir: "~".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - Empty values count as unset
    /// - `require_culture`: `false`, `no`, `off` or `0` disable it; anything else
    ///   keeps the default
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use recipebox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("require_culture".to_string(), "false".to_string());
    /// map.insert("export_dir".to_string(), "~/Downloads".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(!config.require_culture);
    /// assert_eq!(config.export_dir, "~/Downloads");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let require_culture = get("require_culture").map_or(true, |v| {
            !matches!(v.to_ascii_lowercase().as_str(), "false" | "no" | "off" | "0")
        });

        Self {
            cultures: get("cultures"),
            dietary: get("dietary"),
            difficulties: get("difficulties"),
            vocabulary_file: get("vocabulary_file"),
            require_culture,
            export_dir: get("export_dir").unwrap_or_else(|| "~".to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the choice lists.
    ///
    /// Starts from `vocabulary_file` (or the built-in lists when it is unset or
    /// unusable) and replaces each list given inline.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocabulary = self.vocabulary_file.as_ref().map_or_else(
            Vocabulary::default,
            |path| {
                Vocabulary::from_file(infrastructure::expand_tilde(path)).unwrap_or_else(|e| {
                    tracing::warn!(vocabulary_file = %path, error = %e, "failed to load vocabulary, using defaults");
                    Vocabulary::default()
                })
            },
        );

        if let Some(list) = &self.cultures {
            vocabulary.cultures = Vocabulary::parse_cultures(list);
        }
        if let Some(list) = &self.dietary {
            vocabulary.dietary = Vocabulary::parse_labels(list);
        }
        if let Some(list) = &self.difficulties {
            let labels = Vocabulary::parse_labels(list);
            if !labels.is_empty() {
                vocabulary.difficulties = labels;
            }
        }

        vocabulary
    }

    /// Whether culture is mandatory given the resolved vocabulary.
    #[must_use]
    pub fn culture_required(&self, vocabulary: &Vocabulary) -> bool {
        self.require_culture && !vocabulary.cultures.is_empty()
    }

    /// Loads the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the application state from configuration.
///
/// The returned state holds an in-memory store; the plugin swaps in the file
/// store from [`open_store`] once filesystem access is granted.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing recipebox plugin");

    let vocabulary = config.vocabulary();
    let require_culture = config.culture_required(&vocabulary);
    tracing::debug!(
        cultures = vocabulary.cultures.len(),
        dietary = vocabulary.dietary.len(),
        require_culture,
        "vocabulary resolved"
    );

    let store = RecipeStore::open(Box::new(MemoryStorage::default()), require_culture);
    AppState::new(store, vocabulary, config.theme())
}

/// Opens the persistent store in the plugin data directory.
///
/// Falls back to an in-memory store, logging the reason, when the directory
/// cannot be created.
pub fn open_store(require_culture: bool) -> RecipeStore {
    let data_dir = infrastructure::get_data_dir();
    let storage: Box<dyn Storage> = match FileStorage::new(&data_dir) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::error!(data_dir = %data_dir.display(), error = %e, "storage unavailable, keeping recipes in memory");
            Box::new(MemoryStorage::default())
        }
    };
    RecipeStore::open(storage, require_culture)
}
