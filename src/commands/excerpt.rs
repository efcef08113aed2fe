//! Excerpt command: transcript text between two playback positions.

use std::path::Path;

use anyhow::Result;

use super::load_document;

pub fn handle(file: &Path, from: f64, to: f64) -> Result<()> {
    let document = load_document(file)?;
    println!("{}", document.excerpt(from, to));
    Ok(())
}
