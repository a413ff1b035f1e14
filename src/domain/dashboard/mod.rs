pub mod detail_view;
pub mod empty_state;
pub mod list_view;
pub mod pane;
pub mod sidebar;

pub use detail_view::{
    BrainstormingSection, DetailSection, EntryDetailView, IdeaBlock, IdeaList, LabeledField,
    SelfReflectionSection,
};
pub use empty_state::EmptyState;
pub use list_view::{EntryListView, EntryRow};
pub use pane::PaneState;
pub use sidebar::Section;
