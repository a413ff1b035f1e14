//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, date helpers, the state machine trait and the
//! error types that form the vocabulary of the journal domain.

mod date;
mod errors;
mod ids;
mod state_machine;

pub use date::{entry_date_string, format_date, parse_entry_date, today, INVALID_DATE};
pub use errors::ValidationError;
pub use ids::EntryId;
pub use state_machine::StateMachine;
