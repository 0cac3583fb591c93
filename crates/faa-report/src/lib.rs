//! Bulletin output: event summaries, the HTML page, and the page writer.

pub mod html;
pub mod output;
pub mod summary;

pub use html::{
    HEADLINE_COUNT, NO_EVENTS_HEADLINE, escape_html, fallback_page, group_by_type, render_bulletin,
    render_html, type_counts,
};
pub use output::write_html;
pub use summary::summarize_event;
