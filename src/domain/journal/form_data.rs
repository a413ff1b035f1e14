//! Validated form output.

use super::{Difficulty, EntryDetails, JournalEntry};
use crate::domain::foundation::EntryId;

/// A submission that passed validation.
///
/// Only the validator builds this type, so holding one guarantees every
/// leaf string is non-empty and at least one idea is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemFormData {
    problem_name: String,
    problem_id: String,
    topic: String,
    difficulty: Difficulty,
    details: EntryDetails,
}

impl ProblemFormData {
    pub(super) fn new(
        problem_name: String,
        problem_id: String,
        topic: String,
        difficulty: Difficulty,
        details: EntryDetails,
    ) -> Self {
        Self {
            problem_name,
            problem_id,
            topic,
            difficulty,
            details,
        }
    }

    pub fn problem_name(&self) -> &str {
        &self.problem_name
    }

    pub fn problem_id(&self) -> &str {
        &self.problem_id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn details(&self) -> &EntryDetails {
        &self.details
    }

    /// Turns the form data into an entry with the given identity and date.
    pub fn into_entry(self, id: EntryId, date_done: impl Into<String>) -> JournalEntry {
        JournalEntry {
            id,
            problem_name: self.problem_name,
            problem_id: self.problem_id,
            date_done: date_done.into(),
            topic: self.topic,
            difficulty: self.difficulty,
            details: self.details,
        }
    }
}
