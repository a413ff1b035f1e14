//! Journcode - Coding-interview journal client
//!
//! This crate models solved-problem journal entries, validates new
//! submissions, talks to the remote journal API and owns the dashboard
//! state (entry list, detail pane, add-entry form).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
