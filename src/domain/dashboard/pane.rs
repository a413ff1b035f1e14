use serde::Serialize;

use crate::domain::foundation::EntryId;

/// What the main pane shows: the entry table alone, or the table plus the
/// detail panel of one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum PaneState {
    #[default]
    List,
    Detail(EntryId),
}

impl PaneState {
    /// Row click. Selecting while a detail is open switches entries.
    pub fn select(self, id: EntryId) -> Self {
        PaneState::Detail(id)
    }

    /// Close button on the detail panel.
    pub fn close(self) -> Self {
        PaneState::List
    }

    pub fn selected(&self) -> Option<EntryId> {
        match self {
            PaneState::List => None,
            PaneState::Detail(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_select_close_cycle() {
        let pane = PaneState::default();
        assert_eq!(pane.selected(), None);

        let pane = pane.select(EntryId::new(2));
        assert_eq!(pane, PaneState::Detail(EntryId::new(2)));

        let pane = pane.select(EntryId::new(1));
        assert_eq!(pane.selected(), Some(EntryId::new(1)));

        assert_eq!(pane.close(), PaneState::List);
    }

    #[test]
    fn closing_list_is_a_no_op() {
        assert_eq!(PaneState::List.close(), PaneState::List);
    }
}
