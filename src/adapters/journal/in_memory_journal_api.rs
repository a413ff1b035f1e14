//! In-memory journal store.
//!
//! Seeded with the sample entries and used by the terminal binary in
//! offline mode and by tests. Supports failure injection and records every
//! created entry for verification.
//!
//! # Example
//!
//! ```ignore
//! let api = InMemoryJournalApi::seeded().failing_create("disk full");
//! let result = api.create_entry(&entry).await;
//! assert!(result.is_err());
//! ```

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::domain::journal::{seed_entries, JournalEntry};
use crate::ports::{ApiStatus, JournalApi, JournalApiError, JournalListResponse};

#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalApi {
    /// Stored entries, newest first.
    entries: Arc<Mutex<Vec<JournalEntry>>>,
    /// Entries received through `create_entry`, in call order.
    created: Arc<Mutex<Vec<JournalEntry>>>,
    list_failure: Option<JournalApiError>,
    create_failure: Option<JournalApiError>,
}

impl InMemoryJournalApi {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample entries.
    pub fn seeded() -> Self {
        Self::with_entries(seed_entries())
    }

    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
            ..Self::default()
        }
    }

    /// Makes every `list_entries` call fail with a network error.
    pub fn failing_list(mut self, reason: impl Into<String>) -> Self {
        self.list_failure = Some(JournalApiError::Network(reason.into()));
        self
    }

    /// Makes every `create_entry` call fail with a network error.
    pub fn failing_create(mut self, reason: impl Into<String>) -> Self {
        self.create_failure = Some(JournalApiError::Network(reason.into()));
        self
    }

    /// Entries received through `create_entry`, including rejected ones.
    pub fn created(&self) -> Vec<JournalEntry> {
        self.created.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Entries currently stored.
    pub fn stored(&self) -> Vec<JournalEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

fn poisoned() -> JournalApiError {
    JournalApiError::Network("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl JournalApi for InMemoryJournalApi {
    async fn list_entries(&self) -> Result<JournalListResponse, JournalApiError> {
        if let Some(err) = &self.list_failure {
            return Err(err.clone());
        }

        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(JournalListResponse {
            error: false,
            message: "Journal entries retrieved successfully".to_string(),
            data: entries.clone(),
        })
    }

    async fn create_entry(
        &self,
        entry: &JournalEntry,
    ) -> Result<serde_json::Value, JournalApiError> {
        self.created
            .lock()
            .map_err(|_| poisoned())?
            .push(entry.clone());

        if let Some(err) = &self.create_failure {
            return Err(err.clone());
        }

        self.entries
            .lock()
            .map_err(|_| poisoned())?
            .insert(0, entry.clone());

        Ok(json!({
            "error": false,
            "message": "Journal entry created successfully",
            "data": entry,
        }))
    }

    async fn health_check(&self) -> Result<ApiStatus, JournalApiError> {
        Ok(ApiStatus {
            error: false,
            message: "health check".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntryId;

    #[tokio::test]
    async fn seeded_store_lists_sample_entries() {
        let api = InMemoryJournalApi::seeded();

        let envelope = api.list_entries().await.unwrap();

        assert!(!envelope.error);
        assert_eq!(envelope.data.len(), 3);
        assert_eq!(envelope.data[0].problem_name, "Two Sum");
    }

    #[tokio::test]
    async fn created_entries_are_stored_first_and_recorded() {
        let api = InMemoryJournalApi::new();
        let mut entry = seed_entries().remove(0);
        entry.id = EntryId::new(7);

        let body = api.create_entry(&entry).await.unwrap();

        assert_eq!(body["data"]["id"], 7);
        assert_eq!(api.created(), vec![entry.clone()]);
        assert_eq!(api.stored(), vec![entry]);
    }

    #[tokio::test]
    async fn injected_failures_are_returned() {
        let api = InMemoryJournalApi::seeded()
            .failing_list("connection refused")
            .failing_create("connection reset");
        let entry = seed_entries().remove(1);

        assert_eq!(
            api.list_entries().await.unwrap_err(),
            JournalApiError::Network("connection refused".to_string())
        );
        assert!(api.create_entry(&entry).await.is_err());
        assert_eq!(api.created().len(), 1);
        assert_eq!(api.stored().len(), 3);
    }
}
