//! Domain layer containing the journal model and dashboard view models.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, dates, errors, state machine)
//! - `journal` - Journal entries, submissions and the entry schema
//! - `dashboard` - Read models for the list, detail and sidebar views

pub mod dashboard;
pub mod foundation;
pub mod journal;
