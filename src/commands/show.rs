//! Show command: parse a transcript and print its segments.

use std::path::Path;

use anyhow::Result;

use debrief::cli::OutputFormat;
use debrief::transcript::format_timestamp;

use super::load_document;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let document = load_document(file)?;
    match format {
        OutputFormat::Text => {
            for segment in &document.segments {
                match segment.start {
                    Some(start) => println!("[{}] {}", format_timestamp(start), segment.text),
                    None => println!("        {}", segment.text),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}
