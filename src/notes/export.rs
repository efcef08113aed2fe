//! Markdown export of a notebook.
//!
//! Notes come out under a dated header, uncategorized notes first, then
//! one section per category in display order. Multi-line notes stay
//! inside their list item through continuation indentation.

use chrono::{Local, NaiveDate};

use super::{Category, NoteBook};

/// Renders the notebook as a markdown document dated today.
pub fn export_markdown(book: &NoteBook) -> String {
    render_markdown(book, Local::now().date_naive())
}

fn render_markdown(book: &NoteBook, date: NaiveDate) -> String {
    let mut out = format!("# Review Notes - {}\n", date.format("%Y-%m-%d"));

    let uncategorized: Vec<&str> = book
        .notes
        .iter()
        .filter(|note| note.category.is_none())
        .map(|note| note.text.as_str())
        .collect();
    if !uncategorized.is_empty() {
        out.push('\n');
        for text in uncategorized {
            push_item(&mut out, text);
        }
    }

    for category in Category::ALL {
        let filed: Vec<&str> = book
            .notes
            .iter()
            .filter(|note| note.category == Some(category))
            .map(|note| note.text.as_str())
            .collect();
        if filed.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {}\n\n", category.label()));
        for text in filed {
            push_item(&mut out, text);
        }
    }

    out
}

/// Appends one note as a list item, indenting continuation lines so the
/// whole note stays inside the item.
fn push_item(out: &mut String, text: &str) {
    for (i, line) in text.lines().enumerate() {
        if i == 0 {
            out.push_str("- ");
        } else {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
    }
    if text.is_empty() {
        out.push_str("-\n");
    }
}
