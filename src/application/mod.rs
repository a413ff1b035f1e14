//! Application layer - Handlers, the add-entry form and the dashboard controller.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod dashboard_controller;
pub mod entry_form;
pub mod handlers;

pub use dashboard_controller::{AddEntryOutcome, DashboardController, DateSource, SyncStatus};
pub use entry_form::{EntryForm, FormError, FormStatus};
