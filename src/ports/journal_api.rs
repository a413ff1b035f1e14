use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::journal::{null_as_default, JournalEntry};

/// Port for the remote journal store.
///
/// Implementations perform exactly one attempt per call: no retry, no
/// backoff, no timeout.
#[async_trait]
pub trait JournalApi: Send + Sync {
    /// Fetches every stored entry. The envelope is returned as received;
    /// entries are not validated against the entry schema.
    async fn list_entries(&self) -> Result<JournalListResponse, JournalApiError>;

    /// Persists one entry and returns the decoded response body unvalidated.
    async fn create_entry(
        &self,
        entry: &JournalEntry,
    ) -> Result<serde_json::Value, JournalApiError>;

    /// Liveness probe of the journal service.
    async fn health_check(&self) -> Result<ApiStatus, JournalApiError>;
}

/// Envelope returned by `GET /journal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalListResponse {
    pub error: bool,
    pub message: String,
    /// Absent or `null` when the store is empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<JournalEntry>,
}

/// Envelope without payload, as returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub error: bool,
    pub message: String,
}

/// Errors surfaced by journal API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not decode response: {0}")]
    Decode(String),
}
