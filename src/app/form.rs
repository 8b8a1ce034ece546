//! New-recipe form state.
//!
//! [`RecipeForm`] is the terminal counterpart of a submit form: text fields are edited
//! in place, pickers cycle through the configured [`Vocabulary`], and the dietary
//! field is a checklist. Typing on a picker jumps to the best fuzzy match.

use crate::domain::{Field, RecipeDraft, Vocabulary};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Difficulty,
    Ingredients,
    Steps,
    SourceName,
    SourceUrl,
    Culture,
    Dietary,
}

impl FormField {
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Difficulty,
        Self::Ingredients,
        Self::Steps,
        Self::SourceName,
        Self::SourceUrl,
        Self::Culture,
        Self::Dietary,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Difficulty => "Difficulty",
            Self::Ingredients => "Ingredients",
            Self::Steps => "Steps",
            Self::SourceName => "Source name",
            Self::SourceUrl => "Source URL",
            Self::Culture => "Culture",
            Self::Dietary => "Dietary",
        }
    }

    /// Fields where Enter inserts a line break instead of advancing.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Ingredients | Self::Steps)
    }

    /// Fields whose value is chosen from a vocabulary rather than typed.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Difficulty | Self::Culture | Self::Dietary)
    }
}

impl From<Field> for FormField {
    fn from(field: Field) -> Self {
        match field {
            Field::Title => Self::Title,
            Field::Culture => Self::Culture,
        }
    }
}

/// Editable state of the new-recipe form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    pub focus: FormField,
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub source_name: String,
    pub source_url: String,
    /// Index into the vocabulary's difficulties.
    pub difficulty: usize,
    /// Index into the vocabulary's cultures, `None` until chosen.
    pub culture: Option<usize>,
    /// One flag per vocabulary dietary tag.
    pub dietary_checked: Vec<bool>,
    pub dietary_cursor: usize,
    /// Characters typed while a picker has focus.
    pub picker_query: String,
    pub title_error: Option<String>,
    pub culture_error: Option<String>,
}

impl RecipeForm {
    #[must_use]
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            focus: FormField::Title,
            title: String::new(),
            ingredients: String::new(),
            steps: String::new(),
            source_name: String::new(),
            source_url: String::new(),
            difficulty: 0,
            culture: None,
            dietary_checked: vec![false; vocabulary.dietary.len()],
            dietary_cursor: 0,
            picker_query: String::new(),
            title_error: None,
            culture_error: None,
        }
    }

    /// Clears every field back to its initial state.
    pub fn reset(&mut self, vocabulary: &Vocabulary) {
        *self = Self::new(vocabulary);
    }

    pub fn focus_next(&mut self) {
        self.focus_on(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus_on(self.focus.prev());
    }

    pub fn focus_on(&mut self, field: FormField) {
        self.focus = field;
        self.picker_query.clear();
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Ingredients => Some(&mut self.ingredients),
            FormField::Steps => Some(&mut self.steps),
            FormField::SourceName => Some(&mut self.source_name),
            FormField::SourceUrl => Some(&mut self.source_url),
            FormField::Difficulty | FormField::Culture | FormField::Dietary => None,
        }
    }

    /// Handles a typed character for the focused field.
    ///
    /// Text fields append it. On the dietary checklist a space toggles the tag
    /// under the cursor. On any picker other characters extend the jump query.
    pub fn insert_char(&mut self, c: char, vocabulary: &Vocabulary) {
        if let Some(text) = self.text_mut() {
            text.push(c);
            return;
        }

        if self.focus == FormField::Dietary && c == ' ' {
            self.toggle_dietary();
            return;
        }

        self.picker_query.push(c);
        self.jump_to_match(vocabulary);
    }

    /// Deletes backwards in the focused field.
    ///
    /// On the culture picker with no pending jump query this clears the selection.
    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
            return;
        }

        if self.picker_query.pop().is_none() && self.focus == FormField::Culture {
            self.culture = None;
        }
    }

    /// Handles Enter: a line break in multi-line fields, otherwise next field.
    pub fn enter(&mut self) {
        if self.focus.is_multiline() {
            if let Some(text) = self.text_mut() {
                text.push('\n');
            }
        } else {
            self.focus_next();
        }
    }

    /// Moves the focused picker or checklist cursor one step left (wrapping).
    pub fn left(&mut self, vocabulary: &Vocabulary) {
        self.picker_query.clear();
        match self.focus {
            FormField::Difficulty => {
                self.difficulty = step_back(self.difficulty, vocabulary.difficulties.len());
            }
            FormField::Culture => {
                let len = vocabulary.cultures.len();
                if len > 0 {
                    self.culture = Some(self.culture.map_or(len - 1, |i| step_back(i, len)));
                }
            }
            FormField::Dietary => {
                self.dietary_cursor = step_back(self.dietary_cursor, vocabulary.dietary.len());
            }
            _ => {}
        }
    }

    /// Moves the focused picker or checklist cursor one step right (wrapping).
    pub fn right(&mut self, vocabulary: &Vocabulary) {
        self.picker_query.clear();
        match self.focus {
            FormField::Difficulty => {
                self.difficulty = step_forward(self.difficulty, vocabulary.difficulties.len());
            }
            FormField::Culture => {
                let len = vocabulary.cultures.len();
                if len > 0 {
                    self.culture = Some(self.culture.map_or(0, |i| step_forward(i, len)));
                }
            }
            FormField::Dietary => {
                self.dietary_cursor = step_forward(self.dietary_cursor, vocabulary.dietary.len());
            }
            _ => {}
        }
    }

    pub fn toggle_dietary(&mut self) {
        if let Some(flag) = self.dietary_checked.get_mut(self.dietary_cursor) {
            *flag = !*flag;
        }
    }

    fn jump_to_match(&mut self, vocabulary: &Vocabulary) {
        let labels: Vec<&str> = match self.focus {
            FormField::Difficulty => vocabulary.difficulties.iter().map(String::as_str).collect(),
            FormField::Culture => vocabulary.cultures.iter().map(|c| c.label.as_str()).collect(),
            FormField::Dietary => vocabulary.dietary.iter().map(String::as_str).collect(),
            _ => return,
        };

        let Some(index) = best_match(&labels, &self.picker_query) else {
            tracing::trace!(query = %self.picker_query, "no picker match");
            return;
        };

        match self.focus {
            FormField::Difficulty => self.difficulty = index,
            FormField::Culture => self.culture = Some(index),
            FormField::Dietary => self.dietary_cursor = index,
            _ => {}
        }
    }

    /// Records a validation message and moves focus to the failing field.
    pub fn set_error(&mut self, field: Field, reason: String) {
        match field {
            Field::Title => self.title_error = Some(reason),
            Field::Culture => self.culture_error = Some(reason),
        }
        self.focus_on(field.into());
    }

    pub fn clear_errors(&mut self) {
        self.title_error = None;
        self.culture_error = None;
    }

    /// Collects the current input into a draft for the store.
    ///
    /// Dietary tags are emitted in checklist order.
    #[must_use]
    pub fn to_draft(&self, vocabulary: &Vocabulary) -> RecipeDraft {
        let culture = self.culture.and_then(|i| vocabulary.cultures.get(i));

        RecipeDraft {
            title: self.title.clone(),
            difficulty: vocabulary
                .difficulties
                .get(self.difficulty)
                .cloned()
                .unwrap_or_default(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            source_name: self.source_name.clone(),
            source_url: self.source_url.clone(),
            culture: culture.map(|c| c.value.clone()).unwrap_or_default(),
            culture_label: culture.map(|c| c.label.clone()).unwrap_or_default(),
            dietary: vocabulary
                .dietary
                .iter()
                .zip(&self.dietary_checked)
                .filter(|(_, checked)| **checked)
                .map(|(tag, _)| tag.clone())
                .collect(),
        }
    }
}

fn step_forward(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn step_back(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Index of the label scoring highest against `query`; earlier labels win ties.
fn best_match(labels: &[&str], query: &str) -> Option<usize> {
    let matcher = SkimMatcherV2::default().ignore_case();
    labels
        .iter()
        .enumerate()
        .filter_map(|(i, label)| matcher.fuzzy_match(label, query).map(|score| (i, score)))
        .fold(None, |best: Option<(usize, i64)>, (i, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((i, score)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Culture;

    fn vocab() -> Vocabulary {
        Vocabulary {
            difficulties: vec!["Easy".into(), "Medium".into(), "Hard".into()],
            cultures: vec![
                Culture::new("ma", "Moroccan"),
                Culture::new("vn", "Vietnamese"),
                Culture::new("mx", "Mexican"),
            ],
            dietary: vec!["Vegan".into(), "Gluten-free".into(), "Nut-free".into()],
        }
    }

    #[test]
    fn tab_order_wraps_both_ways() {
        assert_eq!(FormField::Dietary.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Dietary);
        assert_eq!(FormField::Title.next(), FormField::Difficulty);
    }

    #[test]
    fn enter_breaks_lines_only_in_multiline_fields() {
        let v = vocab();
        let mut form = RecipeForm::new(&v);
        form.insert_char('a', &v);
        form.enter();
        assert_eq!(form.focus, FormField::Difficulty);
        assert_eq!(form.title, "a");

        form.focus_on(FormField::Ingredients);
        form.insert_char('x', &v);
        form.enter();
        form.insert_char('y', &v);
        assert_eq!(form.ingredients, "x\ny");
        assert_eq!(form.focus, FormField::Ingredients);
    }

    #[test]
    fn culture_picker_cycles_and_clears() {
        let v = vocab();
        let mut form = RecipeForm::new(&v);
        form.focus_on(FormField::Culture);

        form.right(&v);
        assert_eq!(form.culture, Some(0));
        form.left(&v);
        assert_eq!(form.culture, Some(2));

        form.backspace();
        assert_eq!(form.culture, None);
    }

    #[test]
    fn typing_on_picker_jumps_to_fuzzy_match() {
        let v = vocab();
        let mut form = RecipeForm::new(&v);
        form.focus_on(FormField::Culture);
        for c in "viet".chars() {
            form.insert_char(c, &v);
        }
        assert_eq!(form.culture, Some(1));

        form.focus_on(FormField::Difficulty);
        form.insert_char('h', &v);
        assert_eq!(form.difficulty, 2);
    }

    #[test]
    fn dietary_space_toggles_under_cursor() {
        let v = vocab();
        let mut form = RecipeForm::new(&v);
        form.focus_on(FormField::Dietary);
        form.right(&v);
        form.insert_char(' ', &v);
        form.right(&v);
        form.insert_char(' ', &v);
        form.left(&v);
        form.insert_char(' ', &v);
        assert_eq!(form.dietary_checked, vec![false, false, true]);
    }

    #[test]
    fn draft_carries_choices_in_vocabulary_order() {
        let v = vocab();
        let mut form = RecipeForm::new(&v);
        form.title = "Tagine".into();
        form.difficulty = 1;
        form.culture = Some(0);
        form.dietary_checked = vec![true, false, true];

        let draft = form.to_draft(&v);
        assert_eq!(draft.difficulty, "Medium");
        assert_eq!(draft.culture, "ma");
        assert_eq!(draft.culture_label, "Moroccan");
        assert_eq!(draft.dietary, vec!["Vegan", "Nut-free"]);
    }

    #[test]
    fn set_error_moves_focus() {
        let v = vocab();
        let mut form = RecipeForm::new(&v);
        form.focus_on(FormField::Steps);
        form.set_error(Field::Culture, "Please choose a culture.".into());
        assert_eq!(form.focus, FormField::Culture);
        assert!(form.culture_error.is_some());
        form.clear_errors();
        assert!(form.culture_error.is_none());
    }
}
