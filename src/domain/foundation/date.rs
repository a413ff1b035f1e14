//! Calendar helpers for entry dates.
//!
//! Entry dates travel as raw strings: seed data and form submissions use
//! `YYYY-MM-DD`, while the journal server answers with RFC 3339 timestamps.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Placeholder shown for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Formats a date as stored on an entry (`2024-03-20`).
pub fn entry_date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses an entry date string into a UTC calendar date.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Renders a date string as `Month D, YYYY`, or [`INVALID_DATE`].
pub fn format_date(raw: &str) -> String {
    match parse_entry_date(raw) {
        Some(date) => format!(
            "{} {}, {}",
            MONTHS[date.month0() as usize],
            date.day(),
            date.year()
        ),
        None => INVALID_DATE.to_string(),
    }
}
