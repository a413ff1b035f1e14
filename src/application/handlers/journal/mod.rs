//! Journal handlers.

mod create_entry;
mod load_entries;

pub use create_entry::{CreateEntryHandler, CreateEntryResult};
pub use load_entries::{LoadEntriesError, LoadEntriesHandler};
