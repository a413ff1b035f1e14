//! Journal module - Entries, submissions and the entry schema.

mod difficulty;
mod entry;
mod form_data;
mod seed;
mod submission;
pub mod validation;

pub use difficulty::{BadgeTone, ConfidenceLevel, Difficulty};
pub use entry::{EntryDetails, Idea, JournalEntry, KeyLearnings, SelfReflection};
pub(crate) use entry::null_as_default;
pub use form_data::ProblemFormData;
pub use seed::seed_entries;
pub use submission::{ProblemSubmission, SelfReflectionDraft};
pub use validation::{validate_submission, FieldErrors};
