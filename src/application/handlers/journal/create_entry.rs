//! CreateEntryHandler - Command handler that persists one entry remotely.

use std::sync::Arc;

use crate::domain::journal::JournalEntry;
use crate::ports::{JournalApi, JournalApiError};

/// Result of a successful create: the service's response body, unvalidated.
pub type CreateEntryResult = serde_json::Value;

/// Sends a locally created entry to the journal API.
///
/// Makes a single attempt; the caller decides what to do on failure.
pub struct CreateEntryHandler {
    api: Arc<dyn JournalApi>,
}

impl CreateEntryHandler {
    pub fn new(api: Arc<dyn JournalApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        entry: &JournalEntry,
    ) -> Result<CreateEntryResult, JournalApiError> {
        tracing::debug!(entry_id = %entry.id, "persisting journal entry");

        match self.api.create_entry(entry).await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::error!(
                    entry_id = %entry.id,
                    error = %err,
                    "failed to persist journal entry"
                );
                Err(err)
            }
        }
    }
}
