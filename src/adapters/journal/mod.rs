//! Journal store adapters.

mod http_journal_api;
mod in_memory_journal_api;

pub use http_journal_api::{HttpJournalApi, HttpJournalApiConfig, DEFAULT_BASE_URL};
pub use in_memory_journal_api::InMemoryJournalApi;
