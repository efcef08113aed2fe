//! Tag command: send a text selection to the tag-transform service.

use anyhow::{Context, Result};

use debrief::session::selection_anchor;
use debrief::transform::{HttpBackend, TransformBackend};
use debrief::Config;

pub fn handle(config: &Config, text: &str, timestamp: Option<&str>) -> Result<()> {
    let timestamp = match timestamp {
        Some(raw) if raw.starts_with('[') => raw.to_string(),
        Some(raw) => format!("[{}]", raw),
        None => selection_anchor(text),
    };

    let backend = HttpBackend::new(config.backend.url.clone(), config.request_timeout())?;
    let result = backend
        .tag_transform(text, &timestamp)
        .with_context(|| format!("transform service at {} failed", config.backend.url))?;

    // A response without the field leaves the text as it was.
    match result {
        Some(transformed) => println!("{}", transformed),
        None => println!("{}", text),
    }
    Ok(())
}
