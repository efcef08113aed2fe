//! Subcommand handlers for the CLI binary.

pub mod at;
pub mod compile;
pub mod completions;
pub mod config;
pub mod excerpt;
pub mod info;
pub mod show;
pub mod tag;
pub mod transform;

use std::path::Path;

use anyhow::{Context, Result};

use debrief::TranscriptDocument;

/// Reads and parses a transcript file, with the file name driving
/// format detection.
pub fn load_document(file: &Path) -> Result<TranscriptDocument> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let document = debrief::parse_transcript(&content, &file_name)?;
    Ok(document)
}
