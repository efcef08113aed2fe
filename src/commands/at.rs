//! At command: the segment under a playback position.

use std::path::Path;

use anyhow::Result;

use debrief::player::current_segment_index;
use debrief::transcript::format_timestamp;

use super::load_document;

pub fn handle(file: &Path, seconds: f64) -> Result<()> {
    let document = load_document(file)?;
    match current_segment_index(&document, seconds) {
        Some(index) => {
            let segment = &document.segments[index];
            match segment.start {
                Some(start) => {
                    println!("{}  [{}] {}", index, format_timestamp(start), segment.text)
                }
                None => println!("{}  {}", index, segment.text),
            }
        }
        None => println!("no current segment at {}s", seconds),
    }
    Ok(())
}
