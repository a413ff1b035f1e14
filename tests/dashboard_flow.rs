//! End-to-end dashboard scenarios against the in-memory journal store.

use std::sync::Arc;

use chrono::NaiveDate;

use journcode::adapters::{InMemoryJournalApi, RecordingNotifier};
use journcode::application::{DashboardController, FormError, FormStatus, SyncStatus};
use journcode::domain::dashboard::{EntryListView, PaneState};
use journcode::domain::foundation::{entry_date_string, EntryId};
use journcode::domain::journal::{
    seed_entries, Difficulty, Idea, KeyLearnings, ProblemSubmission, SelfReflectionDraft,
};
use journcode::ports::NotificationLevel;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn first_two_seeds() -> InMemoryJournalApi {
    InMemoryJournalApi::with_entries(seed_entries().into_iter().take(2).collect())
}

fn controller(api: InMemoryJournalApi) -> (DashboardController, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let controller = DashboardController::new(Arc::new(api), Arc::new(notifier.clone()));
    (controller, notifier)
}

fn climbing_stairs() -> ProblemSubmission {
    ProblemSubmission {
        problem_name: "Climbing Stairs".to_string(),
        problem_id: "70".to_string(),
        topic: "Dynamic Programming".to_string(),
        difficulty: Some("Easy".to_string()),
        inputs: "n = 3".to_string(),
        outputs: "3".to_string(),
        constraints: "1 <= n <= 45".to_string(),
        core_question: "How many distinct ways reach the top?".to_string(),
        edge_cases: "n = 1".to_string(),
        ideas: vec![
            Idea::new("Recursion", "Direct", "Exponential time"),
            Idea::new("Iterative DP", "Linear time", "Needs the recurrence"),
        ],
        chosen_idea: "Iterative DP".to_string(),
        rationale: "Linear time and constant space".to_string(),
        pseudocode: "a, b = 1, 1; repeat n times".to_string(),
        implementation: "fn climb(n: u32) -> u64 { .. }".to_string(),
        bugs: "Off by one on n = 1".to_string(),
        missed_edge_cases: "None".to_string(),
        solution_summary: "Fibonacci in disguise".to_string(),
        key_learnings: KeyLearnings {
            core_idea: "Recurrences over steps".to_string(),
            data_structure_insights: "Two rolling variables".to_string(),
            algorithm_insights: "Bottom-up DP".to_string(),
        },
        self_reflection: SelfReflectionDraft {
            what_went_well: "Spotted the recurrence".to_string(),
            what_could_be_better: "Faster base cases".to_string(),
            future_study: "Tabulation problems".to_string(),
            confidence_level: Some("Medium".to_string()),
        },
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn select_then_close_returns_to_full_list() {
    let (mut dashboard, _) = controller(first_two_seeds());
    dashboard.mount().await.unwrap();

    dashboard.select_entry(EntryId::new(2));
    let detail = dashboard.detail_view().expect("entry 2 should resolve");
    assert_eq!(detail.problem_name, "Valid Parentheses");
    assert_eq!(detail.topic, "Stack");
    assert_eq!(detail.difficulty, Difficulty::Medium);
    assert!(dashboard.sidebar_collapsed());

    dashboard.close_detail();

    assert_eq!(dashboard.pane(), PaneState::List);
    assert!(dashboard.detail_view().is_none());
    let list = dashboard.list_view();
    assert_eq!(list.rows().len(), 2);
    assert!(list.rows().iter().all(|row| !row.selected));
}

#[tokio::test]
async fn submitting_a_new_entry_prepends_it_with_next_id() {
    let api = first_two_seeds();
    let (mut dashboard, notifier) = controller(api.clone());
    dashboard.mount().await.unwrap();

    *dashboard.open_form().draft_mut().unwrap() = climbing_stairs();
    let outcome = dashboard.submit_form().await.unwrap();

    let today = entry_date_string(chrono::Utc::now().date_naive());
    assert_eq!(dashboard.entries().len(), 3);
    assert_eq!(dashboard.entries()[0].id, EntryId::new(3));
    assert_eq!(dashboard.entries()[0].date_done, today);
    assert_eq!(dashboard.entries()[0].details.ideas.len(), 2);
    assert!(matches!(outcome.sync, SyncStatus::Synced(_)));
    assert_eq!(api.stored().len(), 3);
    assert_eq!(notifier.count(NotificationLevel::Success), 1);
}

#[tokio::test]
async fn failed_remote_create_keeps_entry_visible() {
    let api = first_two_seeds().failing_create("connection reset by peer");
    let (mut dashboard, notifier) = controller(api.clone());
    dashboard.mount().await.unwrap();

    *dashboard.open_form().draft_mut().unwrap() = climbing_stairs();
    dashboard.submit_form().await.unwrap();

    assert_eq!(dashboard.entries().len(), 3);
    assert_eq!(dashboard.entries()[0].problem_name, "Climbing Stairs");
    assert!(dashboard.is_pending_sync(EntryId::new(3)));
    assert!(!dashboard.is_pending_sync(EntryId::new(1)));
    assert_eq!(api.created().len(), 1);
    assert_eq!(api.stored().len(), 2);
    assert_eq!(notifier.count(NotificationLevel::Error), 1);
}

#[tokio::test]
async fn incomplete_draft_stays_open_with_errors() {
    let api = first_two_seeds();
    let (mut dashboard, _) = controller(api.clone());
    dashboard.mount().await.unwrap();

    let form = dashboard.open_form();
    form.add_idea().unwrap();
    let draft = form.draft_mut().unwrap();
    draft.problem_name = "Partial".to_string();

    let err = dashboard.submit_form().await.unwrap_err();

    let FormError::Invalid(errors) = err else {
        panic!("expected validation errors");
    };
    assert!(errors.contains("ideas[1].title"));
    assert!(!errors.contains("problemName"));
    let form = dashboard.form().expect("form stays open");
    assert_eq!(form.status(), FormStatus::Editing);
    assert_eq!(dashboard.entries().len(), 2);
    assert!(api.created().is_empty());
}

#[tokio::test]
async fn failed_fetch_leaves_empty_state() {
    let api = InMemoryJournalApi::seeded().failing_list("connection refused");
    let (mut dashboard, notifier) = controller(api);

    assert!(dashboard.mount().await.is_err());

    assert!(matches!(dashboard.list_view(), EntryListView::Empty { .. }));
    assert_eq!(notifier.count(NotificationLevel::Error), 1);
}

#[tokio::test]
async fn failed_fetch_still_accepts_new_entries() {
    let api = InMemoryJournalApi::new().failing_list("connection refused");
    let (mut dashboard, notifier) = controller(api.clone());
    assert!(dashboard.mount().await.is_err());

    *dashboard.open_form().draft_mut().unwrap() = climbing_stairs();
    let outcome = dashboard.submit_form().await.unwrap();

    assert_eq!(outcome.entry.id, EntryId::new(1));
    assert!(matches!(outcome.sync, SyncStatus::Synced(_)));
    assert_eq!(dashboard.list_view().rows().len(), 1);
    assert_eq!(api.created().len(), 1);
    assert_eq!(notifier.count(NotificationLevel::Error), 1);
    assert_eq!(notifier.count(NotificationLevel::Success), 1);
}

#[tokio::test]
async fn entries_are_dated_by_the_configured_clock() {
    let (dashboard, _) = controller(InMemoryJournalApi::new());
    let mut dashboard =
        dashboard.with_date_source(|| NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    dashboard.mount().await.unwrap();

    *dashboard.open_form().draft_mut().unwrap() = climbing_stairs();
    dashboard.submit_form().await.unwrap();

    assert_eq!(dashboard.entries()[0].id, EntryId::new(1));
    assert_eq!(dashboard.list_view().rows()[0].date, "January 31, 2025");
}
