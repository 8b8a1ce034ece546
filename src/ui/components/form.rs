//! New-recipe form renderer.
//!
//! Each field gets a fixed-width label column and its value beside it.
//! Multi-line fields take one row per line. When the form is taller than the
//! available space, it scrolls so the focused field stays in view.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormRow, FormRowKind, FormView};

/// Width of the label column, including the focus marker.
const LABEL_WIDTH: usize = 15;

/// One rendered screen line of the form.
struct Line<'a> {
    row: &'a FormRow,
    kind: LineKind<'a>,
}

enum LineKind<'a> {
    Value { first: bool, last: bool, text: &'a str },
    Error(&'a str),
}

/// Renders the form into `height` rows starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_form(row: usize, height: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let lines = layout(form);

    let focused_last = lines
        .iter()
        .rposition(|l| l.row.is_focused)
        .unwrap_or(0);
    let start = (focused_last + 1).saturating_sub(height);

    let value_width = cols.saturating_sub(LABEL_WIDTH + 1);
    let mut current_row = row;
    for line in lines.iter().skip(start).take(height) {
        position_cursor(current_row, 1);
        render_line(line, theme, value_width);
        current_row += 1;
    }
    current_row
}

fn layout(form: &FormView) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for row in &form.rows {
        if row.lines.is_empty() {
            lines.push(Line {
                row,
                kind: LineKind::Value { first: true, last: true, text: "" },
            });
        }
        let count = row.lines.len();
        for (i, text) in row.lines.iter().enumerate() {
            lines.push(Line {
                row,
                kind: LineKind::Value { first: i == 0, last: i + 1 == count, text },
            });
        }
        if let Some(error) = &row.error {
            lines.push(Line {
                row,
                kind: LineKind::Error(error),
            });
        }
    }
    lines
}

fn render_line(line: &Line<'_>, theme: &Theme, value_width: usize) {
    let c = &theme.colors;
    match line.kind {
        LineKind::Value { first, last, text } => {
            if first {
                let marker = if line.row.is_focused { '>' } else { ' ' };
                if line.row.is_focused {
                    print!("{}{}", Theme::bold(), Theme::fg(&c.focus_fg));
                } else {
                    print!("{}", Theme::fg(&c.text_dim));
                }
                let label = format!("{marker} {}", line.row.label);
                print!("{label:<LABEL_WIDTH$}");
                print!("{}", Theme::reset());
            } else {
                print!("{}", " ".repeat(LABEL_WIDTH));
            }

            print!(" {}", Theme::fg(&c.text_normal));
            if line.row.kind == FormRowKind::Picker && line.row.is_focused {
                print!("◀ {} ▶", truncate(text, value_width.saturating_sub(4)));
            } else {
                print!("{}", truncate(text, value_width));
            }
            if line.row.is_focused && last && line.row.kind == FormRowKind::Text {
                print!("{}▏", Theme::fg(&c.focus_fg));
            }
            print!("{}", Theme::reset());
        }
        LineKind::Error(message) => {
            print!("{}", " ".repeat(LABEL_WIDTH + 1));
            print!("{}{}", Theme::fg(&c.error_fg), truncate(message, value_width));
            print!("{}", Theme::reset());
        }
    }
}
