//! Raw, unvalidated input collected by the entry creation form.

use serde::{Deserialize, Serialize};

use super::{ConfidenceLevel, Difficulty, Idea, JournalEntry, KeyLearnings};

/// A candidate entry as typed by the user.
///
/// Every field is defaultable so that partial input still deserializes and
/// can be reported field by field. Enumerations are carried as raw strings;
/// `None` means "not chosen" and falls back to the enum default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemSubmission {
    pub problem_name: String,
    pub problem_id: String,
    pub topic: String,
    pub difficulty: Option<String>,
    pub inputs: String,
    pub outputs: String,
    pub constraints: String,
    pub core_question: String,
    pub edge_cases: String,
    pub ideas: Vec<Idea>,
    pub chosen_idea: String,
    pub rationale: String,
    pub pseudocode: String,
    pub implementation: String,
    pub bugs: String,
    pub missed_edge_cases: String,
    pub solution_summary: String,
    pub key_learnings: KeyLearnings,
    pub self_reflection: SelfReflectionDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfReflectionDraft {
    pub what_went_well: String,
    pub what_could_be_better: String,
    pub future_study: String,
    pub confidence_level: Option<String>,
}

impl ProblemSubmission {
    /// The initial draft shown when the form opens: one blank idea and
    /// medium difficulty and confidence.
    pub fn blank() -> Self {
        Self {
            difficulty: Some(Difficulty::default().as_str().to_string()),
            ideas: vec![Idea::default()],
            self_reflection: SelfReflectionDraft {
                confidence_level: Some(ConfidenceLevel::default().as_str().to_string()),
                ..SelfReflectionDraft::default()
            },
            ..Self::default()
        }
    }
}

impl From<&JournalEntry> for ProblemSubmission {
    /// Pre-fills a draft from an existing entry.
    fn from(entry: &JournalEntry) -> Self {
        let details = &entry.details;
        Self {
            problem_name: entry.problem_name.clone(),
            problem_id: entry.problem_id.clone(),
            topic: entry.topic.clone(),
            difficulty: Some(entry.difficulty.as_str().to_string()),
            inputs: details.inputs.clone(),
            outputs: details.outputs.clone(),
            constraints: details.constraints.clone(),
            core_question: details.core_question.clone(),
            edge_cases: details.edge_cases.clone(),
            ideas: details.ideas.clone(),
            chosen_idea: details.chosen_idea.clone(),
            rationale: details.rationale.clone(),
            pseudocode: details.pseudocode.clone(),
            implementation: details.implementation.clone(),
            bugs: details.bugs.clone(),
            missed_edge_cases: details.missed_edge_cases.clone(),
            solution_summary: details.solution_summary.clone(),
            key_learnings: details.key_learnings.clone(),
            self_reflection: SelfReflectionDraft {
                what_went_well: details.self_reflection.what_went_well.clone(),
                what_could_be_better: details.self_reflection.what_could_be_better.clone(),
                future_study: details.self_reflection.future_study.clone(),
                confidence_level: Some(
                    details.self_reflection.confidence_level.as_str().to_string(),
                ),
            },
        }
    }
}
