//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the journal domain to the outside world:
//! - `journal` - Journal store clients (HTTP, in-memory)
//! - `notification` - Notifier implementations (tracing, recording)
//! - `terminal` - Text rendering of dashboard view models

pub mod journal;
pub mod notification;
pub mod terminal;

pub use journal::{HttpJournalApi, HttpJournalApiConfig, InMemoryJournalApi};
pub use notification::{RecordingNotifier, TracingNotifier};
