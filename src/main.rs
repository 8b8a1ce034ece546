//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the recipebox library and
//! the Zellij plugin system. It maps keys to library events per input mode,
//! carries out the actions the library returns, and swaps in the file-backed
//! store once filesystem access is granted.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Permission Granted**: Open the recipe file store and re-render
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: Move selection
//! - `J`/`K`, `PageDown`/`PageUp`: Scroll the recipe card
//! - `/`: Search
//! - `n`: New recipe
//! - `f`: Toggle favorite
//! - `d`: Delete (asks for confirmation)
//! - `e`: Export to `recipes.json`
//! - `q`: Close plugin
//!
//! Search mode:
//! - Typing filters; `Enter` moves to the results, `/` back to the query
//! - `Esc`: Exit search
//!
//! Form:
//! - `Tab`/`Shift+Tab`: Next/previous field
//! - `Left`/`Right`: Cycle pickers and the dietary cursor; `Space` toggles a tag
//! - `Enter`: New line in ingredients and steps, otherwise next field
//! - `Ctrl+s`: Save; `Esc`: Leave the form
//!
//! Delete prompt:
//! - `y`: Delete; any other key cancels

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use recipebox::infrastructure::{collapse_host, expand_tilde};
use recipebox::storage::{ExportSink, FileExportSink};
use recipebox::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: recipebox::AppState,

    /// Export directory as configured (may start with `~`).
    export_dir: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: recipebox::initialize(&default_config),
            export_dir: default_config.export_dir,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `FullHdAccess` to read and write the recipe collection and exports
    /// under the host home directory.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        recipebox::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = recipebox::initialize(&config);
        self.export_dir.clone_from(&config.export_dir);
        tracing::debug!(export_dir = %self.export_dir, "app state initialized");

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        recipebox::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event and any follow-up events produced by its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        let mut pending = vec![event.clone()];
        let mut render = false;

        while let Some(event) = pending.pop() {
            match handle_event(&mut self.app, &event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    render |= should_render;
                    pending.extend(actions.iter().filter_map(|a| self.execute_action(a)));
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                }
            }
        }

        render
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        match self.app.input_mode {
            InputMode::ConfirmDelete => Some(match key.bare_key {
                BareKey::Char('y' | 'Y') if !ctrl => Event::ConfirmDelete,
                _ => Event::CancelDelete,
            }),
            InputMode::Form => Self::map_form_key(key, ctrl),
            InputMode::Search(focus) => Self::map_search_key(key, ctrl, focus),
            InputMode::Normal => Self::map_normal_key(key, ctrl),
        }
    }

    fn map_normal_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('n') if ctrl => Event::KeyDown,
            BareKey::Char('p') if ctrl => Event::KeyUp,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('J') => Event::ScrollDetailDown,
            BareKey::Char('K') => Event::ScrollDetailUp,
            BareKey::PageDown => Event::PageDetailDown,
            BareKey::PageUp => Event::PageDetailUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('n') => Event::NewRecipe,
            BareKey::Char('f') => Event::ToggleFavorite,
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('e') => Event::Export,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier, ctrl: bool, focus: SearchFocus) -> Option<Event> {
        Some(match (focus, key.bare_key) {
            (_, BareKey::Char('n')) if ctrl => Event::KeyDown,
            (_, BareKey::Char('p')) if ctrl => Event::KeyUp,
            (_, BareKey::Down) => Event::KeyDown,
            (_, BareKey::Up) => Event::KeyUp,
            (_, BareKey::PageDown) => Event::PageDetailDown,
            (_, BareKey::PageUp) => Event::PageDetailUp,
            (_, BareKey::Esc) => Event::ExitSearch,
            (SearchFocus::Typing, BareKey::Enter) => Event::FocusResults,
            (SearchFocus::Typing, BareKey::Backspace) => Event::Backspace,
            (SearchFocus::Typing, BareKey::Char(c)) if !ctrl => Event::Char(c),
            (SearchFocus::Navigating, BareKey::Char('/')) => Event::FocusSearchBar,
            (SearchFocus::Navigating, BareKey::Char('j')) => Event::KeyDown,
            (SearchFocus::Navigating, BareKey::Char('k')) => Event::KeyUp,
            (SearchFocus::Navigating, BareKey::Char('J')) => Event::ScrollDetailDown,
            (SearchFocus::Navigating, BareKey::Char('K')) => Event::ScrollDetailUp,
            (SearchFocus::Navigating, BareKey::Char('f')) => Event::ToggleFavorite,
            (SearchFocus::Navigating, BareKey::Char('d')) => Event::RequestDelete,
            (SearchFocus::Navigating, BareKey::Char('e')) => Event::Export,
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('s') if ctrl => Event::SubmitForm,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab => Event::NextField,
            BareKey::Esc => Event::CancelForm,
            BareKey::Enter => Event::FormEnter,
            BareKey::Left => Event::PickerLeft,
            BareKey::Right => Event::PickerRight,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !ctrl => Event::Char(c),
            _ => return None,
        })
    }

    /// Opens the file store once access is granted. Returns whether to re-render.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - opening recipe store");
                let store = recipebox::open_store(self.app.store.require_culture());
                self.app.replace_store(store);
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - recipes will not persist");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Returns a follow-up event when the outcome needs reporting back.
    #[tracing::instrument(level = "debug", skip(self, action))]
    fn execute_action(&self, action: &Action) -> Option<Event> {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                None
            }
            Action::Export { filename, payload } => {
                let mut sink = FileExportSink::new(expand_tilde(&self.export_dir));
                let result = sink
                    .save(filename, payload)
                    .map(|path| collapse_host(&path.to_string_lossy()))
                    .map_err(|e| {
                        tracing::error!(error = %e, "export failed");
                        e.to_string()
                    });
                Some(Event::ExportFinished { result })
            }
        }
    }
}
