//! Note transformation through an external rewrite service.
//!
//! The service exposes two JSON endpoints: `/transform` rewrites note
//! text under a prompt, `/tag-transform` rewrites a transcript selection
//! anchored to its timestamp. Both answer with a single optional field;
//! an answer without the field is a valid response the caller maps to
//! its own fallback text, not an error.

mod client;
mod prompt;

pub use client::HttpBackend;
pub use prompt::{note_payload, SUMMARY_PROMPT};

use thiserror::Error;

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors from the transform service.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The request produced no decodable response. Connection failures,
    /// timeouts and non-JSON bodies all land here; callers treat them as
    /// one failure path.
    #[error("transform request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A service that rewrites notes.
pub trait TransformBackend {
    /// Rewrites note text under a prompt. `Ok(None)` means the service
    /// answered without a `transformed_notes` field.
    fn transform_notes(&self, prompt: &str, notes: &str) -> TransformResult<Option<String>>;

    /// Rewrites a transcript selection anchored to its timestamp.
    /// `Ok(None)` means the service answered without a
    /// `transformed_text` field.
    fn tag_transform(
        &self,
        selected_text: &str,
        timestamp: &str,
    ) -> TransformResult<Option<String>>;
}
