//! Info command: transcript summary.

use std::path::Path;

use anyhow::Result;

use debrief::transcript::{format_timestamp, Format};

use super::load_document;

pub fn handle(file: &Path) -> Result<()> {
    let document = load_document(file)?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    // load_document has already rejected unknown extensions.
    let format = Format::from_file_name(&file_name)
        .map(|f| f.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("Format:   {}", format);
    println!(
        "Segments: {} ({} timed, {} inert)",
        document.len(),
        document.timed_count(),
        document.inert_count()
    );
    match document.duration() {
        Some(duration) => println!("Duration: {}", format_timestamp(duration)),
        None => println!("Duration: unknown"),
    }
    Ok(())
}
