//! LoadEntriesHandler - Query handler for the initial journal fetch.

use std::sync::Arc;

use crate::domain::journal::JournalEntry;
use crate::ports::{JournalApi, JournalApiError};

/// Why the entry list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadEntriesError {
    #[error(transparent)]
    Api(#[from] JournalApiError),

    /// The service answered with `error: true`.
    #[error("{0}")]
    Rejected(String),
}

/// Fetches every entry from the journal API.
///
/// The entries are returned as received; they are not checked against the
/// entry schema.
pub struct LoadEntriesHandler {
    api: Arc<dyn JournalApi>,
}

impl LoadEntriesHandler {
    pub fn new(api: Arc<dyn JournalApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self) -> Result<Vec<JournalEntry>, LoadEntriesError> {
        let envelope = self.api.list_entries().await?;

        if envelope.error {
            return Err(LoadEntriesError::Rejected(envelope.message));
        }

        Ok(envelope.data)
    }
}
