//! Plain-text rendering of dashboard view models for the terminal.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::domain::dashboard::{
    DetailSection, EmptyState, EntryDetailView, EntryListView, IdeaList, Section,
};
use crate::domain::journal::{BadgeTone, FieldErrors, JournalEntry};
use crate::ports::{ApiStatus, Notification, NotificationLevel};

fn badge(text: &str, tone: BadgeTone) -> ColoredString {
    match tone {
        BadgeTone::Success => text.green(),
        BadgeTone::Warning => text.yellow(),
        BadgeTone::Danger => text.red(),
    }
}

fn empty_state(out: &mut String, state: &EmptyState) {
    let _ = writeln!(out, "{}", state.title.bold());
    let _ = writeln!(out, "{}", state.description.dimmed());
}

fn section(out: &mut String, section: &DetailSection) {
    let _ = writeln!(out, "\n{}", section.title.bold().underline());
    for field in &section.fields {
        let _ = writeln!(out, "{}", field.label.cyan());
        let _ = writeln!(out, "{}", indent(&field.value));
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the entry table, or its empty state.
pub fn render_list(view: &EntryListView) -> String {
    let mut out = String::new();

    match view {
        EntryListView::Empty { placeholder } => empty_state(&mut out, placeholder),
        EntryListView::Table { rows } => {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "  {:<30} {:<8} {:<20} {:<20} {:<10}",
                    "Problem", "ID", "Date", "Topic", "Difficulty"
                )
                .bold()
            );
            for row in rows {
                let marker = if row.selected { ">" } else { " " };
                let name = format!("{:<30}", row.problem_name);
                let name = if row.selected { name.bold() } else { name.normal() };
                let _ = write!(
                    out,
                    "{} {} {:<8} {:<20} {:<20} {}",
                    marker,
                    name,
                    row.problem_id,
                    row.date,
                    row.topic,
                    badge(&format!("{:<10}", row.difficulty.as_str()), row.difficulty_tone)
                );
                if row.pending_sync {
                    let _ = write!(out, " {}", "(not synced)".magenta());
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Renders every subsection of one entry.
pub fn render_detail(view: &EntryDetailView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.problem_name.bold());
    let _ = writeln!(
        out,
        "{}  {}  {}  {}",
        view.problem_id.dimmed(),
        view.date,
        view.topic,
        badge(view.difficulty.as_str(), view.difficulty_tone)
    );

    section(&mut out, &view.problem_understanding);

    let brainstorming = &view.brainstorming;
    let _ = writeln!(out, "\n{}", brainstorming.title.bold().underline());
    match &brainstorming.ideas {
        IdeaList::Empty { placeholder } => empty_state(&mut out, placeholder),
        IdeaList::Ideas { blocks } => {
            for block in blocks {
                let _ = writeln!(out, "{}", block.heading.cyan());
                let _ = writeln!(out, "  {} {}", "Pros:".green(), block.pros);
                let _ = writeln!(out, "  {} {}", "Cons:".red(), block.cons);
            }
        }
    }
    let _ = writeln!(
        out,
        "{} {}",
        brainstorming.chosen_approach.label.cyan(),
        brainstorming.chosen_approach.value.bold()
    );
    let _ = writeln!(out, "{}", indent(&brainstorming.rationale));

    section(&mut out, &view.implementation);
    section(&mut out, &view.solution_summary);
    section(&mut out, &view.key_learnings);

    let reflection = &view.self_reflection;
    let _ = writeln!(out, "\n{}", reflection.title.bold().underline());
    for field in &reflection.fields {
        let _ = writeln!(out, "{}", field.label.cyan());
        let _ = writeln!(out, "{}", indent(&field.value));
    }
    let _ = writeln!(
        out,
        "{} {}",
        "Confidence Level".cyan(),
        badge(reflection.confidence_level.as_str(), reflection.confidence_tone)
    );

    out
}

/// Lists validation messages, one per field path.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (path, message) in errors {
        let _ = writeln!(out, "{} {}", format!("{path}:").red(), message);
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    match notification.level {
        NotificationLevel::Success => notification.message.green().to_string(),
        NotificationLevel::Info => notification.message.normal().to_string(),
        NotificationLevel::Error => notification.message.red().to_string(),
    }
}

/// Sidebar navigation with the active section highlighted.
pub fn render_sections(active: Section) -> String {
    let mut out = String::new();
    for section in Section::ALL {
        let label = format!("{:<14} {}", section.id(), section.label());
        if section == active {
            let _ = writeln!(out, "> {}", label.bold());
        } else {
            let _ = writeln!(out, "  {}", label);
        }
    }
    out
}

pub fn render_health(status: &ApiStatus) -> String {
    if status.error {
        format!("{} {}", "unhealthy:".red(), status.message)
    } else {
        format!("{} {}", "ok:".green(), status.message)
    }
}

/// One-line confirmation of a newly created entry.
pub fn render_created(entry: &JournalEntry, synced: bool) -> String {
    let state = if synced {
        "saved".green()
    } else {
        "saved locally, not synced".magenta()
    };
    format!(
        "#{} {} ({}) {}",
        entry.id,
        entry.problem_name.bold(),
        entry.date_done,
        state
    )
}
