//! Read-only detail panel for one journal entry.
//!
//! Every leaf field of the entry details appears under a fixed subsection
//! and label, in display order.

use serde::Serialize;

use super::EmptyState;
use crate::domain::foundation::{format_date, EntryId};
use crate::domain::journal::{BadgeTone, ConfidenceLevel, Difficulty, JournalEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetailView {
    pub id: EntryId,
    pub problem_name: String,
    pub problem_id: String,
    pub date: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub difficulty_tone: BadgeTone,
    pub problem_understanding: DetailSection,
    pub brainstorming: BrainstormingSection,
    pub implementation: DetailSection,
    pub solution_summary: DetailSection,
    pub key_learnings: DetailSection,
    pub self_reflection: SelfReflectionSection,
}

/// A titled group of labelled text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<LabeledField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormingSection {
    pub title: &'static str,
    pub ideas: IdeaList,
    pub chosen_approach: LabeledField,
    pub rationale: String,
}

/// Idea blocks, or a placeholder when the entry carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IdeaList {
    Empty { placeholder: EmptyState },
    Ideas { blocks: Vec<IdeaBlock> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaBlock {
    /// `Idea <n>: <title>`, numbered from 1
    pub heading: String,
    pub pros: String,
    pub cons: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfReflectionSection {
    pub title: &'static str,
    pub fields: Vec<LabeledField>,
    pub confidence_level: ConfidenceLevel,
    pub confidence_tone: BadgeTone,
}

fn field(label: &'static str, value: &str) -> LabeledField {
    LabeledField {
        label,
        value: value.to_string(),
    }
}

impl EntryDetailView {
    /// Resolves the selected id against `entries`.
    ///
    /// Returns `None` when nothing is selected or the id no longer matches
    /// any entry; the detail pane then renders nothing.
    pub fn for_selection(entries: &[JournalEntry], selected: Option<EntryId>) -> Option<Self> {
        let id = selected?;
        entries.iter().find(|e| e.id == id).map(Self::from_entry)
    }

    pub fn from_entry(entry: &JournalEntry) -> Self {
        let d = &entry.details;

        let ideas = if d.ideas.is_empty() {
            IdeaList::Empty {
                placeholder: EmptyState::NO_IDEAS_YET,
            }
        } else {
            IdeaList::Ideas {
                blocks: d
                    .ideas
                    .iter()
                    .enumerate()
                    .map(|(i, idea)| IdeaBlock {
                        heading: format!("Idea {}: {}", i + 1, idea.title),
                        pros: idea.pros.clone(),
                        cons: idea.cons.clone(),
                    })
                    .collect(),
            }
        };

        Self {
            id: entry.id,
            problem_name: entry.problem_name.clone(),
            problem_id: format!("#{}", entry.problem_id),
            date: format_date(&entry.date_done),
            topic: entry.topic.clone(),
            difficulty: entry.difficulty,
            difficulty_tone: entry.difficulty.tone(),
            problem_understanding: DetailSection {
                title: "Problem Understanding",
                fields: vec![
                    field("Inputs", &d.inputs),
                    field("Outputs", &d.outputs),
                    field("Constraints", &d.constraints),
                    field("Core Question", &d.core_question),
                    field("Edge Cases", &d.edge_cases),
                ],
            },
            brainstorming: BrainstormingSection {
                title: "Brainstorming & Approach Selection",
                ideas,
                chosen_approach: field("Chosen Approach", &d.chosen_idea),
                rationale: d.rationale.clone(),
            },
            implementation: DetailSection {
                title: "Implementation",
                fields: vec![
                    field("Pseudocode", &d.pseudocode),
                    field("Code", &d.implementation),
                    field("Bugs Encountered", &d.bugs),
                    field("Missed Edge Cases", &d.missed_edge_cases),
                ],
            },
            solution_summary: DetailSection {
                title: "Solution Summary",
                fields: vec![field("Summary", &d.solution_summary)],
            },
            key_learnings: DetailSection {
                title: "Key Learnings",
                fields: vec![
                    field("Core Idea & Pattern", &d.key_learnings.core_idea),
                    field(
                        "Data Structure Insights",
                        &d.key_learnings.data_structure_insights,
                    ),
                    field("Algorithm Insights", &d.key_learnings.algorithm_insights),
                ],
            },
            self_reflection: SelfReflectionSection {
                title: "Self Reflection",
                fields: vec![
                    field("What Went Well", &d.self_reflection.what_went_well),
                    field(
                        "What Could Be Better",
                        &d.self_reflection.what_could_be_better,
                    ),
                    field("Areas for Future Study", &d.self_reflection.future_study),
                ],
                confidence_level: d.self_reflection.confidence_level,
                confidence_tone: d.self_reflection.confidence_level.tone(),
            },
        }
    }
}

#[cfg(test)]
#[path = "detail_view_test.rs"]
mod detail_view_test;
