//! Terminal presentation of the dashboard.

pub mod render;

pub use render::{
    render_created, render_detail, render_field_errors, render_health, render_list,
    render_notification, render_sections,
};
