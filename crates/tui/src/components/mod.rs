//! Widgets that make up the table screen.

/// Footer with the page summary and status message.
pub mod footer;
/// Search prompt row.
pub mod prompt;
/// Bordered table for one page of rows.
pub mod table;

pub use footer::{FooterContext, footer_text, render_footer};
pub use prompt::{PromptContext, PromptQuery, render_prompt};
pub use table::{TableContext, render_table};
