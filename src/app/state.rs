//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the [`RecipeStore`] and keeps the derived state (filtered ids, selection)
//! consistent with it.
//!
//! # State Components
//!
//! - **Store**: Authoritative newest-first recipe collection
//! - **Filtered Ids**: Recipes matching the current search query, in store order
//! - **Selection**: Cursor position within the filtered ids
//! - **Detail Scroll**: Lines of the selected card scrolled out of the detail pane
//! - **Input Mode**: Controls keybinding interpretation and layout
//! - **Form**: The new-recipe form, kept between openings until submitted
//! - **Status**: One-shot message shown in the footer after an operation
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns the state into a renderable [`UIViewModel`], windowing
//! the list around the selection and building a full [`RecipeCard`] per visible
//! recipe.

use super::filter;
use super::form::{FormField, RecipeForm};
use super::modes::{InputMode, SearchFocus};
use crate::domain::{Recipe, Vocabulary};
use crate::storage::RecipeStore;
use crate::ui::components::detail::{card_lines, pane_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, FormRow, FormRowKind, FormView, HeaderInfo, RecipeCard, SearchBarInfo, SourceRef,
    UIViewModel, PLACEHOLDER,
};

/// Rows taken by chrome in list mode: blank, header, border, separator, border, footer.
const LIST_CHROME_ROWS: usize = 6;

/// Extra rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Pane size assumed until the first render reports the real one.
const DEFAULT_VIEWPORT: (usize, usize) = (24, 80);

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// The recipe collection and its persistence.
    pub store: RecipeStore,

    /// Choice lists for the form.
    pub vocabulary: Vocabulary,

    /// Ids of recipes matching `search_query`, newest first.
    ///
    /// Recomputed by `apply_search_filter()` after every query change or mutation.
    pub filtered_ids: Vec<String>,

    /// Zero-based index of the selected recipe within `filtered_ids`.
    pub selected_index: usize,

    /// Card lines hidden above the detail pane. Reset when the selection moves.
    pub detail_scroll: usize,

    /// Last rendered `(rows, cols)`, used to bound `detail_scroll`.
    pub viewport: (usize, usize),

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    /// New-recipe form state.
    pub form: RecipeForm,

    /// Recipe awaiting delete confirmation.
    pub pending_delete: Option<String>,

    /// One-shot footer message, cleared by the next handled event.
    pub status: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the application state around an opened store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipebox::app::AppState;
    /// use recipebox::domain::Vocabulary;
    /// use recipebox::storage::{MemoryStorage, RecipeStore};
    /// use recipebox::Theme;
    ///
    /// let store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
    /// let state = AppState::new(store, Vocabulary::default(), Theme::default());
    /// assert_eq!(state.visible_count(), 0);
    /// ```
    #[must_use]
    pub fn new(store: RecipeStore, vocabulary: Vocabulary, theme: Theme) -> Self {
        let form = RecipeForm::new(&vocabulary);
        let mut state = Self {
            store,
            vocabulary,
            filtered_ids: vec![],
            selected_index: 0,
            detail_scroll: 0,
            viewport: DEFAULT_VIEWPORT,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            form,
            pending_delete: None,
            status: None,
            theme,
        };
        state.apply_search_filter();
        state
    }

    /// Swaps in a different store (e.g. once disk access is granted) and re-filters.
    ///
    /// Recipes created in the outgoing store that the new one lacks are carried
    /// over and persisted, so nothing added before the swap is lost.
    pub fn replace_store(&mut self, mut store: RecipeStore) {
        let carried = store.merge_unsaved(self.store.recipes());
        tracing::debug!(recipes = store.recipes().len(), carried, "store replaced");
        self.store = store;
        self.apply_search_filter();
    }

    /// Records the pane size of the latest render.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
        self.detail_scroll = self.detail_scroll.min(self.max_detail_scroll(rows, cols));
    }

    /// Number of recipes passing the current filter.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.filtered_ids.len()
    }

    pub fn move_selection_down(&mut self) {
        if self.filtered_ids.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_ids.len();
        self.detail_scroll = 0;
    }

    pub fn move_selection_up(&mut self) {
        if self.filtered_ids.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_ids.len() - 1;
        } else {
            self.selected_index -= 1;
        }
        self.detail_scroll = 0;
    }

    /// Scrolls the detail pane down, stopping once the card's last line is visible.
    pub fn scroll_detail_down(&mut self, lines: usize) {
        let (rows, cols) = self.viewport;
        let max = self.max_detail_scroll(rows, cols);
        self.detail_scroll = (self.detail_scroll + lines).min(max);
    }

    pub fn scroll_detail_up(&mut self, lines: usize) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    /// Rows the detail pane currently spans, at least one.
    #[must_use]
    pub fn detail_page(&self) -> usize {
        self.detail_rows(self.viewport.0).max(1)
    }

    /// Returns the currently selected recipe, if any.
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.filtered_ids
            .get(self.selected_index)
            .and_then(|id| self.store.get(id))
    }

    /// Moves the selection to `id` if it is currently visible.
    pub fn select_id(&mut self, id: &str) {
        if let Some(index) = self.filtered_ids.iter().position(|v| v == id) {
            if index != self.selected_index {
                self.detail_scroll = 0;
            }
            self.selected_index = index;
        }
    }

    /// Recomputes `filtered_ids` from the live store and clamps the selection.
    ///
    /// The selection follows the previously selected recipe when it is still
    /// visible.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            total_recipes = self.store.recipes().len(),
            query_len = self.search_query.len()
        ).entered();

        let previously_selected = self.filtered_ids.get(self.selected_index).cloned();

        self.filtered_ids = filter::filter(self.store.recipes(), &self.search_query)
            .into_iter()
            .map(|r| r.id.clone())
            .collect();

        if let Some(id) = &previously_selected {
            self.select_id(id);
        }

        if self.filtered_ids.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_ids.len() - 1);
        }

        if self.filtered_ids.get(self.selected_index) != previously_selected.as_ref() {
            self.detail_scroll = 0;
        }

        tracing::debug!(
            filtered_count = self.filtered_ids.len(),
            "search filter applied"
        );
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Split the body between the list and the detail pane
    /// 2. Center the list window around the selected index
    /// 3. Shift the window back when near the end to keep it full
    ///
    /// `cols` bounds the detail scroll: a card that fits needs no scrolling.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let now = chrono::Utc::now().timestamp_millis();

        if self.input_mode == InputMode::Form {
            return UIViewModel {
                header: HeaderInfo {
                    title: " New Recipe ".to_string(),
                },
                footer: self.compute_footer(),
                search_bar: None,
                cards: vec![],
                selected_index: 0,
                list_rows: 0,
                detail_scroll: 0,
                empty_state: None,
                form: Some(self.compute_form_view()),
            };
        }

        let list_rows = self.list_rows(rows);
        let total = self.filtered_ids.len();

        let mut visible_start = self.selected_index.saturating_sub(list_rows / 2);
        let visible_end = (visible_start + list_rows).min(total);
        if visible_end - visible_start < list_rows && total >= list_rows {
            visible_start = visible_end.saturating_sub(list_rows);
        }

        let cards: Vec<RecipeCard> = self.filtered_ids[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, id)| {
                let recipe = self.store.get(id)?;
                let is_selected = visible_start + relative_idx == self.selected_index;
                Some(self.compute_card(recipe, is_selected, now))
            })
            .collect();

        let selected_index = self.selected_index.saturating_sub(visible_start);
        let detail_scroll = cards
            .get(selected_index)
            .map_or(0, |card| self.detail_scroll.min(self.detail_overflow(card, rows, cols)));

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            cards,
            selected_index,
            list_rows,
            detail_scroll,
            empty_state: self.compute_empty_state(),
            form: None,
        }
    }

    /// Builds the full card for one recipe.
    fn compute_card(&self, recipe: &Recipe, is_selected: bool, now: i64) -> RecipeCard {
        let source = if !recipe.source_url.is_empty() {
            let label = if recipe.source_name.is_empty() {
                recipe.source_url.clone()
            } else {
                recipe.source_name.clone()
            };
            SourceRef::Link {
                label,
                url: recipe.source_url.clone(),
            }
        } else if !recipe.source_name.is_empty() {
            SourceRef::Text(recipe.source_name.clone())
        } else {
            SourceRef::Missing
        };

        let highlight_ranges = filter::highlight_range(&recipe.title, &self.search_query)
            .into_iter()
            .collect();

        RecipeCard {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            difficulty: recipe.difficulty.clone(),
            culture: recipe.culture_display().unwrap_or(PLACEHOLDER).to_string(),
            favorite: recipe.favorite,
            source,
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            badges: recipe.dietary.clone(),
            created: recipe.created_ago(now),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.store.recipes().len();
        let visible = self.filtered_ids.len();
        let title = if visible == total {
            format!(" Recipes ({total}) ")
        } else {
            format!(" Recipes ({visible}/{total}) ")
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        if self.input_mode == InputMode::ConfirmDelete {
            let title = self
                .pending_delete
                .as_deref()
                .and_then(|id| self.store.get(id))
                .map_or("this recipe", |r| r.title.as_str());
            return FooterInfo {
                text: format!("Delete \"{title}\"?  y: delete  any other key: cancel"),
                is_prompt: true,
            };
        }

        if let Some(status) = &self.status {
            if self.input_mode != InputMode::Form {
                return FooterInfo {
                    text: status.clone(),
                    is_prompt: false,
                };
            }
        }

        let text = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  J/K: scroll  f: favorite  d: delete"
            }
            InputMode::Form => {
                "Tab/Shift+Tab: field  ←/→: choose  Space: toggle tag  Ctrl+s: save  Esc: cancel"
            }
            InputMode::Normal | InputMode::ConfirmDelete => {
                "j/k: navigate  J/K: scroll  /: search  n: new  f: favorite  d: delete  e: export  q: quit"
            }
        };

        FooterInfo {
            text: text.to_string(),
            is_prompt: false,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                typing: focus == SearchFocus::Typing,
            }),
            _ => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.store.recipes().is_empty() {
            Some(EmptyState {
                message: "No recipes yet".to_string(),
                subtitle: "Press 'n' to add your first recipe".to_string(),
            })
        } else if self.filtered_ids.is_empty() {
            Some(EmptyState {
                message: format!("No recipes match \"{}\"", self.search_query),
                subtitle: "Press Esc to clear the search".to_string(),
            })
        } else {
            None
        }
    }

    fn compute_form_view(&self) -> FormView {
        let form = &self.form;
        let vocab = &self.vocabulary;

        let rows = FormField::ALL
            .iter()
            .map(|&field| {
                let is_focused = form.focus == field;
                let lines = match field {
                    FormField::Title => vec![form.title.clone()],
                    FormField::SourceName => vec![form.source_name.clone()],
                    FormField::SourceUrl => vec![form.source_url.clone()],
                    FormField::Ingredients => text_lines(&form.ingredients),
                    FormField::Steps => text_lines(&form.steps),
                    FormField::Difficulty => vec![vocab
                        .difficulties
                        .get(form.difficulty)
                        .cloned()
                        .unwrap_or_else(|| PLACEHOLDER.to_string())],
                    FormField::Culture => vec![form
                        .culture
                        .and_then(|i| vocab.cultures.get(i))
                        .map_or_else(|| "(choose)".to_string(), |c| c.label.clone())],
                    FormField::Dietary => vec![vocab
                        .dietary
                        .iter()
                        .zip(&form.dietary_checked)
                        .enumerate()
                        .map(|(i, (tag, checked))| {
                            let cursor = if is_focused && i == form.dietary_cursor { '>' } else { ' ' };
                            let mark = if *checked { 'x' } else { ' ' };
                            format!("{cursor}[{mark}] {tag}")
                        })
                        .collect::<Vec<_>>()
                        .join(" ")],
                };
                let error = match field {
                    FormField::Title => form.title_error.clone(),
                    FormField::Culture => form.culture_error.clone(),
                    _ => None,
                };
                FormRow {
                    label: field.label().to_string(),
                    lines,
                    is_focused,
                    kind: match field {
                        FormField::Dietary => FormRowKind::Checklist,
                        f if f.is_choice() => FormRowKind::Picker,
                        _ => FormRowKind::Text,
                    },
                    error,
                }
            })
            .collect();

        FormView { rows }
    }

    /// Rows given to the compact list; the rest of the body goes to the detail pane.
    fn body_rows(&self, total_rows: usize) -> usize {
        let chrome = match self.input_mode {
            InputMode::Search(_) => LIST_CHROME_ROWS + SEARCH_BAR_ROWS,
            _ => LIST_CHROME_ROWS,
        };
        total_rows.saturating_sub(chrome)
    }

    fn list_rows(&self, total_rows: usize) -> usize {
        (self.body_rows(total_rows) / 3).max(1)
    }

    /// Rows left for the detail pane under the list window.
    ///
    /// The footer sits one row above the bottom edge, so one more row is lost.
    fn detail_rows(&self, total_rows: usize) -> usize {
        let shown = self.list_rows(total_rows).min(self.filtered_ids.len());
        self.body_rows(total_rows).saturating_sub(shown + 1)
    }

    /// Card lines that do not fit in the detail pane.
    fn detail_overflow(&self, card: &RecipeCard, rows: usize, cols: usize) -> usize {
        card_lines(card, &self.theme, pane_width(cols))
            .len()
            .saturating_sub(self.detail_rows(rows))
    }

    fn max_detail_scroll(&self, rows: usize, cols: usize) -> usize {
        let Some(recipe) = self.selected_recipe() else {
            return 0;
        };
        let now = chrono::Utc::now().timestamp_millis();
        self.detail_overflow(&self.compute_card(recipe, true, now), rows, cols)
    }
}

/// Splits a multi-line buffer for display, keeping a trailing empty line so the
/// cursor position after Enter is visible.
fn text_lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeDraft;
    use crate::storage::MemoryStorage;

    fn state_with(titles: &[&str]) -> AppState {
        let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
        for title in titles {
            store
                .create(RecipeDraft {
                    title: (*title).to_string(),
                    ..Default::default()
                })
                .unwrap();
        }
        AppState::new(store, Vocabulary::default(), Theme::default())
    }

    #[test]
    fn selection_wraps() {
        let mut state = state_with(&["Aaa", "Bbb", "Ccc"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_follows_recipe_through_refilter() {
        let mut state = state_with(&["Tagine", "Pho", "Paella"]);
        // newest first: Paella, Pho, Tagine
        state.selected_index = 1;
        assert_eq!(state.selected_recipe().unwrap().title, "Pho");

        state.search_query = "p".into();
        state.apply_search_filter();
        assert_eq!(state.selected_recipe().unwrap().title, "Pho");
    }

    #[test]
    fn selection_clamped_when_filter_shrinks() {
        let mut state = state_with(&["Tagine", "Pho", "Paella"]);
        state.selected_index = 2;
        state.search_query = "pho".into();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_marks_selected_card_and_highlight() {
        let mut state = state_with(&["Tagine", "Pho"]);
        state.search_query = "ag".into();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.cards.len(), 1);
        assert!(vm.cards[0].is_selected);
        assert_eq!(vm.cards[0].highlight_ranges, vec![(1, 3)]);
        assert_eq!(vm.cards[0].culture, PLACEHOLDER);
        assert_eq!(vm.cards[0].source, SourceRef::Missing);
    }

    #[test]
    fn viewmodel_windows_long_lists() {
        let titles: Vec<String> = (0..40).map(|i| format!("Recipe {i:02}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.selected_index = 39;

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), vm.list_rows);
        assert!(vm.cards[vm.selected_index].is_selected);
        assert!(vm.cards.last().unwrap().is_selected);
    }

    #[test]
    fn empty_state_distinguishes_no_data_from_no_match() {
        let state = state_with(&[]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No recipes yet");

        let mut state = state_with(&["Tagine"]);
        state.search_query = "zzz".into();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.unwrap().message.contains("zzz"));
    }

    #[test]
    fn source_link_prefers_name_as_label() {
        let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
        store
            .create(RecipeDraft {
                title: "Tagine".into(),
                source_url: "https://example.org/tagine".into(),
                ..Default::default()
            })
            .unwrap();
        store
            .create(RecipeDraft {
                title: "Pho".into(),
                source_name: "Mai".into(),
                source_url: "https://example.org/pho".into(),
                ..Default::default()
            })
            .unwrap();
        let state = AppState::new(store, Vocabulary::default(), Theme::default());

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(
            vm.cards[0].source,
            SourceRef::Link {
                label: "Mai".into(),
                url: "https://example.org/pho".into()
            }
        );
        assert_eq!(
            vm.cards[1].source,
            SourceRef::Link {
                label: "https://example.org/tagine".into(),
                url: "https://example.org/tagine".into()
            }
        );
    }

    #[test]
    fn form_view_lists_every_field() {
        let mut state = state_with(&[]);
        state.input_mode = InputMode::Form;
        let vm = state.compute_viewmodel(24, 80);
        let form = vm.form.unwrap();
        assert_eq!(form.rows.len(), FormField::ALL.len());
        assert!(form.rows[0].is_focused);
    }

    #[test]
    fn viewmodel_clamps_detail_scroll_to_card_overflow() {
        let mut store = RecipeStore::open(Box::new(MemoryStorage::default()), false);
        store
            .create(RecipeDraft {
                title: "Tagine".into(),
                steps: (1..=20).map(|i| format!("step {i}\n")).collect(),
                ..Default::default()
            })
            .unwrap();
        let mut state = AppState::new(store, Vocabulary::default(), Theme::default());

        state.detail_scroll = 500;
        let scroll = state.compute_viewmodel(24, 80).detail_scroll;
        assert!(scroll > 0 && scroll < 500);

        assert_eq!(state.compute_viewmodel(200, 80).detail_scroll, 0);

        state.set_viewport(24, 80);
        assert_eq!(state.detail_scroll, scroll);
    }
}
