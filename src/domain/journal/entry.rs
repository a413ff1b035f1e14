//! The journal entry aggregate as exchanged with the journal API.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ConfidenceLevel, Difficulty};
use crate::domain::foundation::EntryId;

/// One documented attempt at a problem.
///
/// Remote entries are trusted as stored: everything but the id may be
/// missing and decodes to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    #[serde(default)]
    pub problem_name: String,
    #[serde(default)]
    pub problem_id: String,
    /// Raw date string; `YYYY-MM-DD` locally, RFC 3339 from the server.
    #[serde(default)]
    pub date_done: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub details: EntryDetails,
}

/// Structured write-up of the attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryDetails {
    pub inputs: String,
    pub outputs: String,
    pub constraints: String,
    pub core_question: String,
    pub edge_cases: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ideas: Vec<Idea>,
    pub chosen_idea: String,
    pub rationale: String,
    pub pseudocode: String,
    pub implementation: String,
    pub bugs: String,
    pub missed_edge_cases: String,
    pub solution_summary: String,
    pub key_learnings: KeyLearnings,
    pub self_reflection: SelfReflection,
}

/// A brainstormed approach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Idea {
    pub title: String,
    pub pros: String,
    pub cons: String,
}

impl Idea {
    pub fn new(
        title: impl Into<String>,
        pros: impl Into<String>,
        cons: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            pros: pros.into(),
            cons: cons.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyLearnings {
    pub core_idea: String,
    pub data_structure_insights: String,
    pub algorithm_insights: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfReflection {
    pub what_went_well: String,
    pub what_could_be_better: String,
    pub future_study: String,
    pub confidence_level: ConfidenceLevel,
}

/// Treats an explicit JSON `null` like a missing field.
///
/// The journal server marshals empty collections as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;
