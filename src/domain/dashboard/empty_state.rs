use serde::Serialize;

/// Placeholder rendered instead of an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub description: &'static str,
}

impl EmptyState {
    pub const NO_JOURNAL_ENTRIES: EmptyState = EmptyState {
        title: "No Journal Entries",
        description: "Start documenting your coding journey by adding your first journal entry.",
    };

    pub const NO_IDEAS_YET: EmptyState = EmptyState {
        title: "No Ideas Yet",
        description: "Start brainstorming solutions for this problem.",
    };
}
