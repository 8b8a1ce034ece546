//! Detail pane renderer for the selected recipe.
//!
//! Shows the whole card: title, culture and difficulty, dietary badges, source
//! link, creation time, ingredients and numbered steps. Ingredients and steps wrap
//! onto as many rows as they need, continuation rows indented under the bullet or
//! number. A card taller than the pane scrolls; a `…` marker on the last row
//! means more follows below.

use crate::ui::helpers::{hyperlink, position_cursor, truncate, width_of, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RecipeCard, SourceRef, PLACEHOLDER};

/// Left indent of the pane body.
const INDENT: usize = 2;

/// Visible columns available to card lines in a pane `cols` wide.
pub(crate) const fn pane_width(cols: usize) -> usize {
    cols.saturating_sub(INDENT * 2)
}

/// Renders the card into `height` rows starting at `row`, skipping the first
/// `scroll` lines.
///
/// # Returns
///
/// The next available row position.
pub fn render_detail(
    row: usize,
    height: usize,
    scroll: usize,
    card: &RecipeCard,
    theme: &Theme,
    cols: usize,
) -> usize {
    let lines = card_lines(card, theme, pane_width(cols));
    let start = scroll.min(lines.len().saturating_sub(height));
    let more_below = lines.len() > start + height;

    let mut current_row = row;
    for (i, line) in lines.iter().skip(start).take(height).enumerate() {
        position_cursor(current_row, INDENT + 1);
        if more_below && i + 1 == height {
            print!("{}… J/K to scroll{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        } else {
            print!("{line}{}", Theme::reset());
        }
        current_row += 1;
    }
    current_row
}

/// Pre-styled pane lines; each stays within `width` visible columns.
pub(crate) fn card_lines(card: &RecipeCard, theme: &Theme, width: usize) -> Vec<String> {
    let c = &theme.colors;
    let mut lines = Vec::new();

    let star = if card.favorite {
        format!("{}{} ", Theme::fg(&c.favorite_fg), card.favorite_symbol())
    } else {
        format!("{}{} ", Theme::fg(&c.text_dim), card.favorite_symbol())
    };
    lines.push(format!(
        "{star}{}{}{}",
        Theme::bold(),
        Theme::fg(&c.header_fg),
        truncate(&card.title, width.saturating_sub(2))
    ));

    let difficulty = if card.difficulty.is_empty() {
        PLACEHOLDER
    } else {
        card.difficulty.as_str()
    };
    let meta = format!("{} · {} · added {}", card.culture, difficulty, card.created);
    lines.push(format!("{}{}", Theme::fg(&c.text_dim), truncate(&meta, width)));

    if !card.badges.is_empty() {
        let mut used = 0;
        let mut badges = String::new();
        for tag in &card.badges {
            let cell = format!(" {tag} ");
            if used + width_of(&cell) > width {
                break;
            }
            used += width_of(&cell) + 1;
            badges.push_str(&format!(
                "{}{}{cell}{} ",
                Theme::fg(&c.badge_fg),
                Theme::bg(&c.badge_bg),
                Theme::reset()
            ));
        }
        lines.push(badges);
    }

    let source = match &card.source {
        SourceRef::Link { label, url } => format!(
            "{}{}{}",
            Theme::fg(&c.link_fg),
            Theme::underline(),
            hyperlink(&truncate(label, width.saturating_sub(8)), url)
        ),
        SourceRef::Text(name) => format!(
            "{}{}",
            Theme::fg(&c.text_normal),
            truncate(name, width.saturating_sub(8))
        ),
        SourceRef::Missing => format!("{}{PLACEHOLDER}", Theme::fg(&c.text_dim)),
    };
    lines.push(format!("{}Source: {source}", Theme::fg(&c.text_dim)));

    lines.push(String::new());
    lines.push(section_title("Ingredients", theme));
    if card.ingredients.is_empty() {
        lines.push(format!("{}  {PLACEHOLDER}", Theme::fg(&c.text_dim)));
    }
    for item in &card.ingredients {
        push_wrapped(&mut lines, "  • ", item, theme, width);
    }

    lines.push(String::new());
    lines.push(section_title("Steps", theme));
    if card.steps.is_empty() {
        lines.push(format!("{}  {PLACEHOLDER}", Theme::fg(&c.text_dim)));
    }
    for (i, step) in card.steps.iter().enumerate() {
        push_wrapped(&mut lines, &format!("  {}. ", i + 1), step, theme, width);
    }

    lines
}

/// Appends `text` wrapped under `prefix`; continuation rows are indented to match.
fn push_wrapped(lines: &mut Vec<String>, prefix: &str, text: &str, theme: &Theme, width: usize) {
    let indent = " ".repeat(width_of(prefix));
    let color = Theme::fg(&theme.colors.text_normal);

    for (i, part) in wrap(text, width.saturating_sub(indent.len())).into_iter().enumerate() {
        let lead = if i == 0 { prefix } else { indent.as_str() };
        lines.push(format!("{color}{lead}{part}"));
    }
}

fn section_title(title: &str, theme: &Theme) -> String {
    format!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_STEP: &str = "Brown the lamb in olive oil, then add onions, garlic, ginger, \
        cumin and cinnamon and cook until fragrant before adding the stock";

    fn card(steps: &[&str]) -> RecipeCard {
        RecipeCard {
            id: "r1".into(),
            title: "Tagine".into(),
            difficulty: "Medium".into(),
            culture: "Moroccan".into(),
            favorite: false,
            source: SourceRef::Missing,
            ingredients: vec!["lamb".into()],
            steps: steps.iter().map(|s| (*s).to_string()).collect(),
            badges: vec![],
            created: "just now".into(),
            is_selected: true,
            highlight_ranges: vec![],
        }
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for inner in chars.by_ref() {
                    if inner == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn long_step_wraps_without_losing_text() {
        let theme = Theme::default();
        let lines: Vec<String> = card_lines(&card(&[LONG_STEP]), &theme, 76)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();

        let start = lines.iter().position(|l| l.starts_with("  1. ")).unwrap();
        let step_lines = &lines[start..];
        assert!(step_lines.len() > 1);
        assert!(step_lines.iter().all(|l| width_of(l) <= 76));
        assert!(step_lines[1..].iter().all(|l| l.starts_with("     ")));

        let rejoined = step_lines
            .iter()
            .map(|l| l.trim())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, format!("1. {LONG_STEP}"));
        assert!(!rejoined.contains('…'));
    }

    #[test]
    fn short_items_take_one_row_each() {
        let theme = Theme::default();
        let lines: Vec<String> = card_lines(&card(&["Sear", "Simmer"]), &theme, 76)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();

        assert!(lines.contains(&"  • lamb".to_string()));
        assert_eq!(lines[lines.len() - 2], "  1. Sear");
        assert_eq!(lines[lines.len() - 1], "  2. Simmer");
    }
}
