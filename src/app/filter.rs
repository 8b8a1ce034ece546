//! Free-text recipe filtering.
//!
//! A recipe matches when the case-folded query is a substring of its title, its
//! culture label, or its dietary tags joined by single spaces. An empty query
//! matches everything. Results keep the store's newest-first order; there is no
//! ranking.

use crate::domain::Recipe;

/// Returns whether `recipe` matches `query`.
///
/// # Examples
///
/// ```
/// use recipebox::app::filter::matches;
/// use recipebox::domain::Recipe;
///
/// let recipe: Recipe = serde_json::from_str(
///     r#"{"id":"1","title":"Pho","cultureLabel":"Vietnamese","dietary":["Gluten-free"]}"#,
/// )?;
/// assert!(matches(&recipe, "PHO"));
/// assert!(matches(&recipe, "viet"));
/// assert!(matches(&recipe, "gluten"));
/// assert!(!matches(&recipe, "tagine"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn matches(recipe: &Recipe, query: &str) -> bool {
    let query = query.to_lowercase();
    matches_folded(recipe, &query)
}

fn matches_folded(recipe: &Recipe, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true;
    }

    recipe.title.to_lowercase().contains(folded_query)
        || recipe.culture_label.to_lowercase().contains(folded_query)
        || recipe.dietary.join(" ").to_lowercase().contains(folded_query)
}

/// Returns the recipes matching `query`, in their original order.
#[must_use]
pub fn filter<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let folded = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_folded(recipe, &folded))
        .collect()
}

/// Finds the first case-insensitive occurrence of `query` in `text`.
///
/// Returns a `(start, end)` range in character indices, end exclusive, suitable for
/// highlighting. Returns `None` for an empty query, no match, or when case folding
/// changes the character count of `text` (indices would no longer line up).
#[must_use]
pub fn highlight_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let folded_text = text.to_lowercase();
    if folded_text.chars().count() != text.chars().count() {
        return None;
    }

    let folded_query = query.to_lowercase();
    let byte_start = folded_text.find(&folded_query)?;
    let start = folded_text[..byte_start].chars().count();
    let end = start + folded_query.chars().count();
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, culture_label: &str, dietary: &[&str]) -> Recipe {
        Recipe {
            id: title.to_lowercase(),
            title: title.to_string(),
            difficulty: String::new(),
            ingredients: vec![],
            steps: vec![],
            source_name: String::new(),
            source_url: String::new(),
            culture: String::new(),
            culture_label: culture_label.to_string(),
            dietary: dietary.iter().map(ToString::to_string).collect(),
            favorite: false,
            created_at: 0,
        }
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let recipes = vec![
            recipe("Tagine", "Moroccan", &[]),
            recipe("Pho", "Vietnamese", &[]),
        ];
        let titles: Vec<_> = filter(&recipes, "").iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Tagine", "Pho"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let recipes = vec![
            recipe("Tagine", "Moroccan", &[]),
            recipe("Pho", "Vietnamese", &[]),
        ];
        let hits = filter(&recipes, "pHo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pho");
    }

    #[test]
    fn no_match_returns_empty() {
        let recipes = vec![recipe("Tagine", "Moroccan", &["Vegan"])];
        assert!(filter(&recipes, "sushi").is_empty());
    }

    #[test]
    fn dietary_tags_match_across_the_joining_space() {
        let r = recipe("Salad", "", &["Vegan", "Nut-free"]);
        assert!(matches(&r, "vegan nut"));
        assert!(!matches(&r, "vegan,nut"));
    }

    #[test]
    fn culture_value_alone_does_not_match() {
        let mut r = recipe("Salad", "", &[]);
        r.culture = "ma".into();
        assert!(!matches(&r, "ma"));
    }

    #[test]
    fn query_whitespace_is_significant() {
        let r = recipe("Pho", "", &[]);
        assert!(!matches(&r, " pho"));
    }

    #[test]
    fn highlight_uses_character_indices() {
        assert_eq!(highlight_range("Crème Brûlée", "brû"), Some((6, 9)));
        assert_eq!(highlight_range("Pho", "x"), None);
        assert_eq!(highlight_range("Pho", ""), None);
    }
}
