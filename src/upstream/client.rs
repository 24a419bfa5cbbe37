//! Upstream Client Module
//!
//! HTTP client for the slow generation backend. Sends the question to a
//! completions-style endpoint and extracts a single-line answer from the
//! response payload.

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;

/// Instruction prepended to every question so answers stay short and use
/// only characters that survive line-oriented transports.
const PROMPT_PREFIX: &str = "Answer as quickly as possible and concisely max 3 sentences \
Use only A-Z, a-z, 0-9, and spaces, commas, periods, and question marks. No extra formatting.:";

// == Upstream Client ==
/// Client for the upstream generation endpoint.
#[derive(Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

impl UpstreamClient {
    /// Creates a client from the service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.upstream_url.clone(),
            model: config.upstream_model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Generates an answer for `question`.
    ///
    /// The answer text is read from `output[1].content[0].text` of the
    /// response body and flattened to a single line. Any transport error,
    /// non-success status, or unexpected payload shape is an error; the
    /// resolver surfaces it verbatim to the leading caller.
    pub async fn generate(&self, question: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "input": format!("{PROMPT_PREFIX}{question}"),
        });

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("upstream request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("upstream returned {status}");
        }

        let payload: Value = response
            .json()
            .await
            .context("upstream response was not valid JSON")?;
        debug!(?payload, "upstream response");

        let text = payload
            .pointer("/output/1/content/0/text")
            .and_then(Value::as_str)
            .context("could not read response from upstream")?;

        Ok(flatten_lines(text))
    }
}

/// Collapses CR/LF into spaces so the answer fits one transport line.
fn flatten_lines(text: &str) -> String {
    text.replace('\n', " ").replace('\r', " ")
}
