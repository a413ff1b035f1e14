//! HTTP adapter for the remote journal store.
//!
//! Talks to the journal service over plain JSON:
//!
//! - `GET  {base}/journal` returns the entry envelope
//! - `POST {base}/journal` stores one entry
//! - `GET  {base}/health` reports liveness
//!
//! One attempt per call. Non-2xx responses are logged and their bodies are
//! still decoded and passed through to the caller.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpJournalApiConfig::new("http://localhost:8080");
//! let api = HttpJournalApi::new(config);
//! let envelope = api.list_entries().await?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::domain::journal::JournalEntry;
use crate::ports::{ApiStatus, JournalApi, JournalApiError, JournalListResponse};

/// Default origin of the journal service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for the HTTP journal client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpJournalApiConfig {
    /// Origin without trailing slash, e.g. `http://localhost:8080`.
    pub base_url: String,
}

impl HttpJournalApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn journal_url(&self) -> String {
        format!("{}/journal", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for HttpJournalApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// `JournalApi` backed by reqwest.
pub struct HttpJournalApi {
    config: HttpJournalApiConfig,
    client: Client,
}

impl HttpJournalApi {
    pub fn new(config: HttpJournalApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: Response,
        what: &str,
    ) -> Result<T, JournalApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned {}", what, status);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to decode {} response: {}", what, e);
            if e.is_decode() {
                JournalApiError::Decode(e.to_string())
            } else {
                JournalApiError::Network(e.to_string())
            }
        })
    }
}

fn network_error(what: &str, e: reqwest::Error) -> JournalApiError {
    tracing::error!("{} request failed: {}", what, e);
    JournalApiError::Network(e.to_string())
}

#[async_trait]
impl JournalApi for HttpJournalApi {
    async fn list_entries(&self) -> Result<JournalListResponse, JournalApiError> {
        let url = self.config.journal_url();
        tracing::debug!("Fetching journal entries from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error("GET /journal", e))?;

        let envelope: JournalListResponse = self.decode(response, "GET /journal").await?;
        tracing::debug!("Fetched {} journal entries", envelope.data.len());

        Ok(envelope)
    }

    async fn create_entry(
        &self,
        entry: &JournalEntry,
    ) -> Result<serde_json::Value, JournalApiError> {
        let url = self.config.journal_url();
        tracing::debug!("Posting journal entry {} to {}", entry.id, url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(entry)
            .send()
            .await
            .map_err(|e| network_error("POST /journal", e))?;

        self.decode(response, "POST /journal").await
    }

    async fn health_check(&self) -> Result<ApiStatus, JournalApiError> {
        let url = self.config.health_url();
        tracing::debug!("Checking journal service health at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error("GET /health", e))?;

        self.decode(response, "GET /health").await
    }
}
