//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the journal domain and the outside world. Adapters implement these ports.
//!
//! - `JournalApi` - Remote journal store (list, create, health)
//! - `Notifier` - User-facing notifications

mod journal_api;
mod notifier;

pub use journal_api::{ApiStatus, JournalApi, JournalApiError, JournalListResponse};
pub use notifier::{Notification, NotificationLevel, Notifier};
