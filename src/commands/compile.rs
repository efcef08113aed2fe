//! Compile command: a notes file rendered as dated markdown.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use debrief::notes::{export_markdown, NoteBook};

/// Reads blank-line-separated note blocks and renders the markdown
/// export, to stdout or to `output`.
pub fn handle(notes_file: &Path, output: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(notes_file)
        .with_context(|| format!("failed to read {}", notes_file.display()))?;

    let mut book = NoteBook::new();
    for block in content.split("\n\n") {
        let text = block.trim();
        if !text.is_empty() {
            book.push(text);
        }
    }
    info!(notes = book.len(), "compiled notebook");

    let markdown = export_markdown(&book);
    match output {
        Some(path) => std::fs::write(path, &markdown)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", markdown),
    }
    Ok(())
}
