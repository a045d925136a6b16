//! HTTP client for the configuration API.
//!
//! The editor is a thin client of two endpoints: `GET /api/config` returns
//! the nested configuration document, `POST /api/config` accepts the
//! collected document and answers with a `{status, message?}` envelope.
//! Failures of either call are surfaced to the caller as errors carrying
//! the underlying message; nothing is retried.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Server verdict on a save request.
#[derive(Debug, Deserialize)]
struct SaveOutcome {
    /// "success" or an error marker
    status: String,
    /// Optional human-readable detail
    message: Option<String>,
}

/// Blocking client bound to one API server.
pub struct ConfigClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ConfigClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The server URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON body.
    pub fn fetch(&self) -> Result<Value> {
        let url = format!("{}/api/config", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("Failed to load configuration from {url}"))?;
        response
            .json()
            .context("Failed to load configuration: response was not valid JSON")
    }

    /// Submits a collected document.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the server's envelope
    /// does not carry a "success" status.
    pub fn save(&self, doc: &Value) -> Result<()> {
        let url = format!("{}/api/config", self.base_url);
        let outcome: SaveOutcome = self
            .http
            .post(&url)
            .json(doc)
            .send()
            .with_context(|| format!("Failed to save configuration to {url}"))?
            .json()
            .context("Failed to save configuration: response was not valid JSON")?;

        if outcome.status == "success" {
            Ok(())
        } else {
            let detail = outcome.message.unwrap_or(outcome.status);
            anyhow::bail!("Error: {detail}")
        }
    }
}
