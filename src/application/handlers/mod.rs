//! Application handlers.
//!
//! Command and query handlers that orchestrate calls to the journal API.

pub mod journal;

pub use journal::{CreateEntryHandler, CreateEntryResult, LoadEntriesError, LoadEntriesHandler};
