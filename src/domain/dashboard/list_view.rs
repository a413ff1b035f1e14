use std::collections::HashSet;

use serde::Serialize;

use super::EmptyState;
use crate::domain::foundation::{format_date, EntryId};
use crate::domain::journal::{BadgeTone, Difficulty, JournalEntry};

/// The entry table, or its empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EntryListView {
    Empty { placeholder: EmptyState },
    Table { rows: Vec<EntryRow> },
}

/// One table row. `id` is what a row selection reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRow {
    pub id: EntryId,
    pub problem_name: String,
    /// Problem number as displayed, e.g. `#20`
    pub problem_id: String,
    pub date: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub difficulty_tone: BadgeTone,
    pub selected: bool,
    /// Shown locally but never confirmed by the journal API
    pub pending_sync: bool,
}

impl EntryListView {
    /// Builds one row per entry, preserving order.
    pub fn build(
        entries: &[JournalEntry],
        selected: Option<EntryId>,
        pending_sync: &HashSet<EntryId>,
    ) -> Self {
        if entries.is_empty() {
            return EntryListView::Empty {
                placeholder: EmptyState::NO_JOURNAL_ENTRIES,
            };
        }

        let rows = entries
            .iter()
            .map(|entry| EntryRow {
                id: entry.id,
                problem_name: entry.problem_name.clone(),
                problem_id: format!("#{}", entry.problem_id),
                date: format_date(&entry.date_done),
                topic: entry.topic.clone(),
                difficulty: entry.difficulty,
                difficulty_tone: entry.difficulty.tone(),
                selected: selected == Some(entry.id),
                pending_sync: pending_sync.contains(&entry.id),
            })
            .collect();

        EntryListView::Table { rows }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, EntryListView::Empty { .. })
    }

    pub fn rows(&self) -> &[EntryRow] {
        match self {
            EntryListView::Empty { .. } => &[],
            EntryListView::Table { rows } => rows,
        }
    }
}

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;
