//! Transform command: send notes to the rewrite service.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;

use debrief::transform::{HttpBackend, TransformBackend};
use debrief::Config;

pub fn handle(config: &Config, notes: &str, prompt: &str) -> Result<()> {
    let text = read_notes(notes)?;
    let backend = HttpBackend::new(config.backend.url.clone(), config.request_timeout())?;

    info!(url = %config.backend.url, "sending notes for transformation");
    let result = backend
        .transform_notes(prompt, &text)
        .with_context(|| format!("transform service at {} failed", config.backend.url))?;

    match result {
        Some(transformed) => println!("{}", transformed),
        None => println!("No response."),
    }
    Ok(())
}

fn read_notes(notes: &str) -> Result<String> {
    if notes == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("reading notes from stdin, end with Ctrl-D");
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(notes).with_context(|| format!("failed to read {}", notes))
    }
}
