//! Blocking HTTP client for the transform service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TransformBackend, TransformResult};

/// HTTP implementation of [`TransformBackend`].
///
/// Requests carry no timeout unless one is configured, and the HTTP
/// status is not checked: the service reports its outcome in the body,
/// and a non-JSON error body surfaces as a decode failure.
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Serialize)]
struct TransformRequest<'a> {
    prompt: &'a str,
    notes: &'a str,
}

#[derive(Deserialize)]
struct TransformResponse {
    transformed_notes: Option<String>,
}

#[derive(Serialize)]
struct TagTransformRequest<'a> {
    selected_text: &'a str,
    timestamp: &'a str,
}

#[derive(Deserialize)]
struct TagTransformResponse {
    transformed_text: Option<String>,
}

impl HttpBackend {
    /// Creates a client for the service at `base_url` (no trailing
    /// slash), with an optional request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> TransformResult<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl TransformBackend for HttpBackend {
    fn transform_notes(&self, prompt: &str, notes: &str) -> TransformResult<Option<String>> {
        let url = self.endpoint("transform");
        debug!(url = %url, bytes = notes.len(), "posting notes for transformation");
        let response: TransformResponse = self
            .client
            .post(&url)
            .json(&TransformRequest { prompt, notes })
            .send()?
            .json()?;
        Ok(response.transformed_notes)
    }

    fn tag_transform(
        &self,
        selected_text: &str,
        timestamp: &str,
    ) -> TransformResult<Option<String>> {
        let url = self.endpoint("tag-transform");
        debug!(url = %url, timestamp = %timestamp, "posting selection for transformation");
        let response: TagTransformResponse = self
            .client
            .post(&url)
            .json(&TagTransformRequest {
                selected_text,
                timestamp,
            })
            .send()?
            .json()?;
        Ok(response.transformed_text)
    }
}
