//! DashboardController - Owns the journal collection and the dashboard UI state.
//!
//! The controller is the single writer of the entry collection. Views are
//! computed from its state on demand and never hold entries themselves.
//!
//! Creating an entry inserts it locally before the remote call is issued.
//! If the remote call fails the entry stays in the collection and its id is
//! recorded as pending sync; nothing is retried.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use super::entry_form::{EntryForm, FormError};
use super::handlers::journal::{CreateEntryHandler, LoadEntriesError, LoadEntriesHandler};
use crate::domain::dashboard::{EntryDetailView, EntryListView, PaneState, Section};
use crate::domain::foundation::{entry_date_string, today, EntryId};
use crate::domain::journal::{JournalEntry, ProblemFormData};
use crate::ports::{JournalApi, JournalApiError, Notification, Notifier};

pub const CREATE_SUCCESS_MESSAGE: &str = "Problem added successfully!";

/// Supplies the creation date for new entries.
pub type DateSource = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Whether a newly added entry reached the journal API.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncStatus {
    /// Stored remotely; carries the response body.
    Synced(serde_json::Value),
    /// Kept locally only.
    Pending(JournalApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddEntryOutcome {
    pub entry: JournalEntry,
    pub sync: SyncStatus,
}

pub struct DashboardController {
    entries: Vec<JournalEntry>,
    pending_sync: HashSet<EntryId>,
    pane: PaneState,
    sidebar_collapsed: bool,
    active_section: Section,
    profile_menu_open: bool,
    form: Option<EntryForm>,
    load_entries: LoadEntriesHandler,
    create_entry: CreateEntryHandler,
    notifier: Arc<dyn Notifier>,
    today: DateSource,
}

impl DashboardController {
    pub fn new(api: Arc<dyn JournalApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            entries: Vec::new(),
            pending_sync: HashSet::new(),
            pane: PaneState::default(),
            sidebar_collapsed: false,
            active_section: Section::default(),
            profile_menu_open: false,
            form: None,
            load_entries: LoadEntriesHandler::new(api.clone()),
            create_entry: CreateEntryHandler::new(api),
            notifier,
            today: Arc::new(today),
        }
    }

    /// Replaces the clock used to date new entries.
    pub fn with_date_source(
        mut self,
        source: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        self.today = Arc::new(source);
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Entry collection
    // ─────────────────────────────────────────────────────────────────────

    /// Initial fetch. On failure the collection is left as it was and an
    /// error notification is raised; there is no fallback data.
    pub async fn mount(&mut self) -> Result<usize, LoadEntriesError> {
        match self.load_entries.handle().await {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "journal entries loaded");
                self.entries = entries;
                Ok(self.entries.len())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load journal entries");
                self.notifier.notify(Notification::error(format!(
                    "Failed to load journal entries: {}",
                    err
                )));
                Err(err)
            }
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Adds a validated entry: id is `count + 1`, date is today. The entry is
    /// prepended before the remote create is issued.
    pub async fn add_entry(&mut self, data: ProblemFormData) -> AddEntryOutcome {
        let id = EntryId::next_after(self.entries.len());
        let entry = data.into_entry(id, entry_date_string((self.today)()));

        self.entries.insert(0, entry.clone());
        tracing::debug!(entry_id = %id, "entry added locally");

        let sync = match self.create_entry.handle(&entry).await {
            Ok(body) => {
                self.notifier
                    .notify(Notification::success(CREATE_SUCCESS_MESSAGE));
                SyncStatus::Synced(body)
            }
            Err(err) => {
                self.pending_sync.insert(id);
                self.notifier.notify(Notification::error(format!(
                    "Failed to save problem: {}",
                    err
                )));
                SyncStatus::Pending(err)
            }
        };

        AddEntryOutcome { entry, sync }
    }

    /// True when the entry is shown locally but the remote create failed.
    pub fn is_pending_sync(&self, id: EntryId) -> bool {
        self.pending_sync.contains(&id)
    }

    pub fn pending_sync(&self) -> &HashSet<EntryId> {
        &self.pending_sync
    }

    // ─────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────

    pub fn list_view(&self) -> EntryListView {
        EntryListView::build(&self.entries, self.pane.selected(), &self.pending_sync)
    }

    /// Detail of the selected entry; `None` when nothing is selected or the
    /// selection no longer resolves.
    pub fn detail_view(&self) -> Option<EntryDetailView> {
        EntryDetailView::for_selection(&self.entries, self.pane.selected())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection and navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn pane(&self) -> PaneState {
        self.pane
    }

    pub fn selected_entry(&self) -> Option<EntryId> {
        self.pane.selected()
    }

    /// Row click: opens the detail pane and collapses the sidebar.
    pub fn select_entry(&mut self, id: EntryId) {
        self.pane = self.pane.select(id);
        self.sidebar_collapsed = true;
    }

    /// Detail close: returns to the list and expands the sidebar.
    pub fn close_detail(&mut self) {
        self.pane = self.pane.close();
        self.sidebar_collapsed = false;
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    /// The menu only renders inside the expanded sidebar.
    pub fn profile_menu_visible(&self) -> bool {
        self.profile_menu_open && !self.sidebar_collapsed
    }

    /// Placeholder; sessions are not managed by this client.
    pub fn logout(&self) {
        tracing::info!("logout requested");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Add-entry form
    // ─────────────────────────────────────────────────────────────────────

    /// Opens a blank form. An already open form is kept as is.
    pub fn open_form(&mut self) -> &mut EntryForm {
        self.form.get_or_insert_with(EntryForm::new)
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&EntryForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EntryForm> {
        self.form.as_mut()
    }

    pub fn cancel_form(&mut self) -> Result<(), FormError> {
        let form = self.form.as_mut().ok_or(FormError::Closed)?;
        form.cancel()?;
        self.form = None;
        Ok(())
    }

    /// Validates the open form and adds the entry.
    ///
    /// Validation failure keeps the form open with its field errors. A valid
    /// submission always closes the form: the local insert cannot fail, and
    /// remote failure is reported through the notifier.
    pub async fn submit_form(&mut self) -> Result<AddEntryOutcome, FormError> {
        let data = self
            .form
            .as_mut()
            .ok_or(FormError::Closed)?
            .begin_submit()?;

        let outcome = self.add_entry(data).await;

        if let Some(form) = self.form.as_mut() {
            form.finish_submit(true)?;
        }
        self.form = None;

        Ok(outcome)
    }
}
